use agentscore_core::models::{EntityStakes, Position, Triple, Vault};
use agentscore_core::Wei;
use agentscore_stake::summarize;
use proptest::prelude::*;

fn vault(rows: &[(&str, &str)]) -> Vault {
    Vault::new(rows.iter().map(|(a, s)| Position::new(*a, *s)).collect())
}

#[test]
fn empty_entity_has_empty_summary() {
    let summary = summarize(&EntityStakes::default());
    assert!(summary.total_stake_wei().is_zero());
    assert_eq!(summary.unique_staker_count(), 0);
}

#[test]
fn direct_vault_counts_as_support() {
    let stakes = EntityStakes {
        vault: vault(&[("0x1", "10"), ("0x2", "5")]),
        triples: vec![],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei, Wei::new(15));
    assert!(summary.oppose_stake_wei.is_zero());
    assert_eq!(summary.support_staker_count(), 2);
}

#[test]
fn triples_are_split_by_predicate() {
    let stakes = EntityStakes {
        vault: Vault::default(),
        triples: vec![
            Triple::new("trusts", vault(&[("0xa", "100")])),
            Triple::new("vouches_for", vault(&[("0xb", "50")])),
            Triple::new("distrusts", vault(&[("0xc", "30")])),
            Triple::new("reported_for_injection", vault(&[("0xd", "20")])),
            Triple::new("has_tag", vault(&[("0xe", "999")])),
        ],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei, Wei::new(150));
    assert_eq!(summary.oppose_stake_wei, Wei::new(50));
    assert!(!summary.support_staker_addresses.contains("0xe"));
    assert!(!summary.oppose_staker_addresses.contains("0xe"));
}

#[test]
fn counter_vault_lands_on_opposite_side() {
    let stakes = EntityStakes {
        vault: Vault::default(),
        triples: vec![
            Triple::new("trustworthy", vault(&[("0xa", "80")]))
                .with_counter_vault(vault(&[("0xb", "20")])),
            Triple::new("untrustworthy", vault(&[("0xc", "5")]))
                .with_counter_vault(vault(&[("0xd", "7")])),
        ],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei, Wei::new(87));
    assert_eq!(summary.oppose_stake_wei, Wei::new(25));
    assert!(summary.oppose_staker_addresses.contains("0xb"));
    assert!(summary.support_staker_addresses.contains("0xd"));
}

#[test]
fn addresses_dedupe_case_insensitively() {
    let stakes = EntityStakes {
        vault: vault(&[("0xABCDEF", "1"), ("0xabcdef", "2"), (" 0xAbCdEf ", "3")]),
        triples: vec![],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_staker_count(), 1);
    assert!(summary.support_staker_addresses.contains("0xabcdef"));
    assert_eq!(summary.support_stake_wei, Wei::new(6));
}

#[test]
fn malformed_amounts_count_as_zero() {
    let stakes = EntityStakes {
        vault: vault(&[("0x1", "not-a-number"), ("0x2", "12.5"), ("0x3", "40")]),
        triples: vec![],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei, Wei::new(40));
    // Zero-share holders are not stakers.
    assert_eq!(summary.support_staker_count(), 1);
}

#[test]
fn wei_scale_sums_keep_full_precision() {
    // Two 10^24-wei positions: beyond f64's exact integer range, exact in u128.
    let stakes = EntityStakes {
        vault: vault(&[
            ("0x1", "1000000000000000000000001"),
            ("0x2", "1000000000000000000000001"),
        ]),
        triples: vec![],
    };
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei.value(), 2_000_000_000_000_000_000_000_002);
}

#[test]
fn summary_deserializes_from_indexer_json() {
    let json = r#"{
        "vault": { "positions": [ { "accountId": "0xAA", "shares": "3" } ] },
        "triples": [
            { "predicateLabel": "Verified By", "vault": { "positions": [ { "accountId": "0xbb", "shares": "4" } ] } }
        ]
    }"#;
    let stakes: EntityStakes = serde_json::from_str(json).unwrap();
    let summary = summarize(&stakes);
    assert_eq!(summary.support_stake_wei, Wei::new(7));
    assert_eq!(summary.support_staker_count(), 2);
}

proptest! {
    #[test]
    fn totals_equal_sum_of_classified_positions(
        support in proptest::collection::vec(0u64..1_000_000, 0..20),
        oppose in proptest::collection::vec(0u64..1_000_000, 0..20),
    ) {
        let support_vault = Vault::new(
            support.iter().enumerate().map(|(i, s)| Position::new(format!("0xs{i}"), s.to_string())).collect(),
        );
        let oppose_vault = Vault::new(
            oppose.iter().enumerate().map(|(i, s)| Position::new(format!("0xo{i}"), s.to_string())).collect(),
        );
        let stakes = EntityStakes {
            vault: Vault::default(),
            triples: vec![
                Triple::new("trusts", support_vault),
                Triple::new("distrusts", oppose_vault),
            ],
        };
        let summary = summarize(&stakes);
        prop_assert_eq!(summary.support_stake_wei.value(), support.iter().map(|&s| s as u128).sum::<u128>());
        prop_assert_eq!(summary.oppose_stake_wei.value(), oppose.iter().map(|&s| s as u128).sum::<u128>());
    }
}
