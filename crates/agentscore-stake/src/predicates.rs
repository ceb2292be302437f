//! Predicate classification.
//!
//! A triple's predicate decides which side its stake lands on. Labels are
//! matched case-insensitively, with spaces and hyphens folded to `_` so that
//! "Verified By" and "verified-by" both read as `verified_by`.

use agentscore_core::StakeSide;

/// Predicates whose stake counts as support.
pub const SUPPORT_PREDICATES: &[&str] = &[
    "trusts",
    "verified_by",
    "vouches_for",
    "trustworthy",
    "is_trustworthy",
];

/// Predicates whose stake counts as opposition.
pub const OPPOSE_PREDICATES: &[&str] = &[
    "distrusts",
    "reported_for_scam",
    "reported_for_spam",
    "reported_for_injection",
    "untrustworthy",
    "is_untrustworthy",
];

/// Canonical form of a predicate label.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Side a predicate label stakes on, or `None` for unrelated predicates.
pub fn classify_predicate(label: &str) -> Option<StakeSide> {
    let normalized = normalize_label(label);
    if SUPPORT_PREDICATES.contains(&normalized.as_str()) {
        Some(StakeSide::Support)
    } else if OPPOSE_PREDICATES.contains(&normalized.as_str()) {
        Some(StakeSide::Oppose)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(classify_predicate("TRUSTS"), Some(StakeSide::Support));
        assert_eq!(classify_predicate("Reported_For_Scam"), Some(StakeSide::Oppose));
    }

    #[test]
    fn separators_fold_to_underscore() {
        assert_eq!(classify_predicate(" verified by "), Some(StakeSide::Support));
        assert_eq!(classify_predicate("is-untrustworthy"), Some(StakeSide::Oppose));
    }

    #[test]
    fn unrelated_predicates_are_ignored() {
        assert_eq!(classify_predicate("has_tag"), None);
        assert_eq!(classify_predicate(""), None);
        assert_eq!(classify_predicate("trust"), None);
    }

    #[test]
    fn sets_are_disjoint() {
        for label in SUPPORT_PREDICATES {
            assert!(!OPPOSE_PREDICATES.contains(label));
        }
    }
}
