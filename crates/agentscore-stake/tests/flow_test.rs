use agentscore_core::models::{FlowEvent, FlowEventKind, FlowWindow};
use agentscore_core::{StakeSide, Wei};
use agentscore_stake::snapshot_from_events;
use chrono::{Duration, TimeZone, Utc};

fn event(kind: FlowEventKind, side: StakeSide, units: u64, hours_ago: i64) -> FlowEvent {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    FlowEvent {
        kind,
        side,
        amount_wei: Wei::from_units(units),
        timestamp: now - Duration::hours(hours_ago),
    }
}

#[test]
fn buckets_by_kind_and_side() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let events = vec![
        event(FlowEventKind::Deposit, StakeSide::Support, 10, 1),
        event(FlowEventKind::Redeem, StakeSide::Support, 3, 2),
        event(FlowEventKind::Deposit, StakeSide::Oppose, 4, 3),
        event(FlowEventKind::Redeem, StakeSide::Oppose, 1, 4),
        event(FlowEventKind::Deposit, StakeSide::Support, 5, 5),
    ];
    let snapshot = snapshot_from_events(&events, FlowWindow::Day, now);
    assert_eq!(snapshot.buy_support_wei, Wei::from_units(15));
    assert_eq!(snapshot.sell_support_wei, Wei::from_units(3));
    assert_eq!(snapshot.buy_oppose_wei, Wei::from_units(4));
    assert_eq!(snapshot.sell_oppose_wei, Wei::from_units(1));
    assert!((snapshot.signed_flow_units() - 9.0).abs() < 1e-12);
}

#[test]
fn events_outside_window_are_skipped() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let events = vec![
        event(FlowEventKind::Deposit, StakeSide::Support, 10, 23),
        event(FlowEventKind::Deposit, StakeSide::Support, 100, 25),
        // Future event: clock skew on the indexer side.
        event(FlowEventKind::Deposit, StakeSide::Support, 1000, -1),
    ];
    let day = snapshot_from_events(&events, FlowWindow::Day, now);
    assert_eq!(day.buy_support_wei, Wei::from_units(10));

    let week = snapshot_from_events(&events, FlowWindow::Week, now);
    assert_eq!(week.buy_support_wei, Wei::from_units(110));
}

#[test]
fn window_edges_are_inclusive() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let events = vec![
        event(FlowEventKind::Redeem, StakeSide::Oppose, 2, 24),
        event(FlowEventKind::Redeem, StakeSide::Oppose, 3, 0),
    ];
    let snapshot = snapshot_from_events(&events, FlowWindow::Custom(24 * 3600), now);
    assert_eq!(snapshot.sell_oppose_wei, Wei::from_units(5));
}

#[test]
fn no_events_is_empty_snapshot() {
    let now = Utc::now();
    let snapshot = snapshot_from_events(&[], FlowWindow::Week, now);
    assert!(snapshot.is_empty());
}
