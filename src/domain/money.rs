//! Exact monetary amounts.
//!
//! Prices arrive as `f64` (the way the fixtures and JSON files carry them) but every
//! sum is taken in whole cents, so `299.99 * 2 + 49.99 * 4` is exactly `799.94`
//! instead of whatever binary floating point makes of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Number of cents in one currency unit.
const CENTS_PER_UNIT: i64 = 100;

/// A non-fractional amount of money stored in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Converts a decimal amount, rounding half-up to two decimals.
    ///
    /// A tiny epsilon absorbs representation error so `1.005` rounds to `1.01`
    /// the way the amount is written, not the way it is stored. Non-finite input
    /// maps to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dishboard::Money;
    ///
    /// assert_eq!(Money::from_amount(299.99).cents(), 29999);
    /// assert_eq!(Money::from_amount(1.005).cents(), 101);
    /// ```
    #[must_use]
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::ZERO;
        }
        let scaled = amount * CENTS_PER_UNIT as f64;
        let nudged = if scaled >= 0.0 { scaled + 1e-7 } else { scaled - 1e-7 };
        #[allow(clippy::cast_possible_truncation)]
        let cents = nudged.round() as i64;
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the amount as a decimal value, for ratios and JSON output.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    /// Multiplies a unit price by a quantity, saturating at the `i64` bounds.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Divides the amount evenly, rounding half-up to the cent.
    ///
    /// Returns zero when `count` is zero.
    #[must_use]
    pub fn average_over(self, count: usize) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        #[allow(clippy::cast_possible_wrap)]
        let count = count as i64;
        let half = count / 2;
        let adjusted = if self.0 >= 0 {
            self.0.saturating_add(half)
        } else {
            self.0.saturating_sub(half)
        };
        Self(adjusted / count)
    }

    /// Formats with three-digit thousands separators: `124,458.90`.
    #[must_use]
    pub fn grouped(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / CENTS_PER_UNIT.unsigned_abs()).to_string();
        let cents = abs % CENTS_PER_UNIT.unsigned_abs();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{sign}{grouped}.{cents:02}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_to_two_decimals() {
        assert_eq!(Money::from_amount(0.125).cents(), 13);
        assert_eq!(Money::from_amount(2.675).cents(), 268);
        assert_eq!(Money::from_amount(49.99).cents(), 4999);
        assert_eq!(Money::from_amount(f64::NAN), Money::ZERO);
    }

    #[test]
    fn sums_exactly_in_cents() {
        let total = Money::from_amount(299.99).times(2) + Money::from_amount(49.99).times(4);
        assert_eq!(total.cents(), 79994);
        assert_eq!(total.to_string(), "799.94");
    }

    #[test]
    fn display_pads_cents() {
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-150).to_string(), "-1.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn grouped_inserts_thousands_separators() {
        assert_eq!(Money::from_cents(12_445_890).grouped(), "124,458.90");
        assert_eq!(Money::from_cents(2_345_000).grouped(), "23,450.00");
        assert_eq!(Money::from_cents(99_900).grouped(), "999.00");
    }

    #[test]
    fn huge_amounts_saturate() {
        let gold = Money::from_amount(1e10).times(u32::MAX);
        assert_eq!(gold.cents(), i64::MAX);
        assert_eq!((gold + gold).cents(), i64::MAX);

        let mut total = Money::from_cents(i64::MIN);
        total += Money::from_cents(-1);
        assert_eq!(total.cents(), i64::MIN);
        assert_eq!(Money::from_cents(i64::MAX).average_over(2).cents(), i64::MAX / 2);
    }

    #[test]
    fn average_rounds_and_guards_zero() {
        assert_eq!(Money::from_cents(1000).average_over(3).cents(), 333);
        assert_eq!(Money::from_cents(1001).average_over(2).cents(), 501);
        assert_eq!(Money::from_cents(1000).average_over(0), Money::ZERO);
    }
}
