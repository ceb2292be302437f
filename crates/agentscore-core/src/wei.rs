//! Wei-scale stake amounts.
//!
//! Stakes are aggregated as `u128` integers so that summing thousands of
//! 18-decimal positions never loses precision. Conversion to `f64` happens
//! only for ratios and display, via [`Wei::to_units`].
//!
//! # Examples
//!
//! ```
//! use agentscore_core::Wei;
//!
//! let amount = Wei::parse_lossy("1500000000000000000");
//! assert!((amount.to_units() - 1.5).abs() < 1e-12);
//!
//! // Malformed input never errors, it reads as zero.
//! assert_eq!(Wei::parse_lossy("12abc"), Wei::ZERO);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::WEI_PER_UNIT;

/// A non-negative token amount in wei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wei(u128);

impl Wei {
    pub const ZERO: Wei = Wei(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Whole token units expressed in wei (`units × 10^18`), saturating.
    pub const fn from_units(units: u64) -> Self {
        Self((units as u128).saturating_mul(WEI_PER_UNIT))
    }

    pub const fn value(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal integer string, treating anything malformed as zero.
    ///
    /// Indexers hand amounts over as strings; a bad row must not take the
    /// whole score down with it.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().parse::<u128>() {
            Ok(value) => Self(value),
            Err(e) => {
                if !raw.trim().is_empty() {
                    tracing::debug!(raw = %raw, error = %e, "malformed wei amount, treating as zero");
                }
                Self::ZERO
            }
        }
    }

    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// `self − rhs` as a signed value, saturating at the `i128` bounds.
    pub fn signed_diff(self, rhs: Self) -> i128 {
        let lhs = i128::try_from(self.0).unwrap_or(i128::MAX);
        let rhs = i128::try_from(rhs.0).unwrap_or(i128::MAX);
        lhs.saturating_sub(rhs)
    }

    /// Convert to whole token units.
    ///
    /// Splits into integer and fractional parts first so large balances keep
    /// their sub-unit precision as long as `f64` allows.
    pub fn to_units(self) -> f64 {
        let whole = self.0 / WEI_PER_UNIT;
        let frac = self.0 % WEI_PER_UNIT;
        whole as f64 + frac as f64 / WEI_PER_UNIT as f64
    }

    /// Format as whole units with a fixed number of decimals, e.g. `"12.50"`.
    pub fn format_units(self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.to_units())
    }
}

impl From<u128> for Wei {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Wei> for u128 {
    fn from(w: Wei) -> Self {
        w.0
    }
}

impl Add for Wei {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Wei {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sum for Wei {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Wei> for Wei {
    fn sum<I: Iterator<Item = &'a Wei>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Wei {
    type Err = std::num::ParseIntError;

    /// Strict parse. Use [`Wei::parse_lossy`] for indexer input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u128>().map(Self)
    }
}

// Wire format is a decimal string: JSON numbers cannot carry 18-decimal
// balances without precision loss on the frontend.
impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeiVisitor;

        impl Visitor<'_> for WeiVisitor {
            type Value = Wei;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a wei amount as a decimal string or non-negative integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Wei, E> {
                Ok(Wei::parse_lossy(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Wei, E> {
                Ok(Wei(v as u128))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<Wei, E> {
                Ok(Wei(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Wei, E> {
                Ok(Wei(u128::try_from(v).unwrap_or(0)))
            }
        }

        deserializer.deserialize_any(WeiVisitor)
    }
}

/// Serde adapter for signed wei differences (`i128`) as decimal strings.
pub mod signed_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.trim().parse::<i128>().unwrap_or(0))
    }
}
