//! Flow snapshots from vault deposit/redeem ledgers.

use chrono::{DateTime, Utc};

use agentscore_core::models::{FlowEvent, FlowEventKind, FlowWindow};
use agentscore_core::{StakeSide, TrustFlowSnapshot};

/// Sum deposits and redemptions per side over `[now − window, now]`.
///
/// Events outside the window, including ones stamped after `now`, are skipped.
pub fn snapshot_from_events(
    events: &[FlowEvent],
    window: FlowWindow,
    now: DateTime<Utc>,
) -> TrustFlowSnapshot {
    let since = now - window.duration();
    let mut snapshot = TrustFlowSnapshot::default();

    for event in events.iter().filter(|e| e.timestamp >= since && e.timestamp <= now) {
        let bucket = match (event.kind, event.side) {
            (FlowEventKind::Deposit, StakeSide::Support) => &mut snapshot.buy_support_wei,
            (FlowEventKind::Redeem, StakeSide::Support) => &mut snapshot.sell_support_wei,
            (FlowEventKind::Deposit, StakeSide::Oppose) => &mut snapshot.buy_oppose_wei,
            (FlowEventKind::Redeem, StakeSide::Oppose) => &mut snapshot.sell_oppose_wei,
        };
        *bucket += event.amount_wei;
    }

    tracing::debug!(
        window_secs = window.duration().num_seconds(),
        events = events.len(),
        signed_flow_units = snapshot.signed_flow_units(),
        "flow snapshot computed"
    );

    snapshot
}
