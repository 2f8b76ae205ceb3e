//! Exact whole-rupee price representation.
//!
//! All catalog prices are whole rupees, so money is carried as an `i64`
//! rupee count rather than a floating-point amount. Arithmetic over cart
//! totals therefore never rounds.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A price in whole Indian rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(i64);

impl Rupees {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole-rupee value.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Get the underlying rupee count.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u32> for Rupees {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Rupees {
    /// Formats with the Indian digit grouping used across the site,
    /// e.g. `₹1,25,260`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (sign, magnitude) = if self.0 < 0 {
            ("-", self.0.unsigned_abs())
        } else {
            ("", self.0.unsigned_abs())
        };
        write!(f, "{sign}₹{}", group_indian(magnitude))
    }
}

/// Group digits in the Indian numbering style: the last three digits form
/// one group, every pair of digits after that forms another (12,34,567).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head.get(start..end).unwrap_or_default());
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Rupees::new(0).to_string(), "₹0");
        assert_eq!(Rupees::new(500).to_string(), "₹500");
        assert_eq!(Rupees::new(999).to_string(), "₹999");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Rupees::new(16_060).to_string(), "₹16,060");
        assert_eq!(Rupees::new(125_260).to_string(), "₹1,25,260");
        assert_eq!(Rupees::new(1_339_960).to_string(), "₹13,39,960");
        assert_eq!(Rupees::new(12_34_56_789).to_string(), "₹12,34,56,789");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Rupees::new(-16_060).to_string(), "-₹16,060");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let unit = Rupees::new(36_444);
        assert_eq!(unit * 3, Rupees::new(109_332));
        assert_eq!(unit + Rupees::new(16_060), Rupees::new(52_504));

        let total: Rupees = [Rupees::new(100), Rupees::new(250), Rupees::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Rupees::new(353));
    }

    #[test]
    fn test_multiplication_saturates_instead_of_overflowing() {
        let huge = Rupees::new(i64::MAX);
        assert_eq!(huge * 2, Rupees::new(i64::MAX));
    }

    #[test]
    fn test_serde_is_transparent() {
        let price = Rupees::new(30_620);
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "30620");
        let back: Rupees = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
