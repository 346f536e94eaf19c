use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Signed money amount represented as **integer cents**.
///
/// Every monetary value in the engine (expense amounts, exact split amounts,
/// balances, settlement payments) is a `Money` so per-cent arithmetic is
/// exact and no floating-point drift can accumulate across expenses.
///
/// The value is signed:
/// - positive = is owed money by the group
/// - negative = owes money to the group
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::from_cents(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("120".parse::<Money>().unwrap().cents(), 12000);
/// assert_eq!("49,99".parse::<Money>().unwrap().cents(), 4999);
/// assert!("12.345".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub const fn abs(self) -> Money {
        Money(self.0.abs())
    }

    /// Returns the smaller of the two amounts.
    #[must_use]
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Divides the amount by `n` parts, rounding half away from zero to the
    /// nearest cent. `n` must be > 0.
    ///
    /// The per-part remainder lost to rounding is reconciled by the caller
    /// (last participant absorbs the drift), so a rounded division here never
    /// changes per-expense totals.
    #[must_use]
    pub fn divided_by(self, n: i64) -> Money {
        debug_assert!(n > 0);
        let doubled = 2 * self.0 + n * self.0.signum();
        Money(doubled / (2 * n))
    }

    /// Multiplies the amount by the ratio `weight / total_weight`, rounding
    /// half away from zero to the nearest cent.
    #[must_use]
    pub fn proportion(self, weight: f64, total_weight: f64) -> Money {
        let raw = self.0 as f64 * (weight / total_weight);
        Money(raw.round() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`. Rejects empty strings and more than 2 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAmount(format!("invalid amount: {s:?}"));

        let trimmed = s.trim();
        let (sign, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let digits = digits.replace(',', ".");
        let (units_str, frac_str) = match digits.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (digits.as_str(), ""),
        };

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;
        let cents: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => frac_str.parse::<i64>().map_err(|_| invalid())?,
            _ => {
                return Err(LedgerError::InvalidAmount(format!(
                    "too many decimals: {s:?}"
                )));
            }
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| LedgerError::InvalidAmount(format!("amount too large: {s:?}")))?;

        Ok(Money(sign * total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_cents() {
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(1).to_string(), "0.01");
        assert_eq!(Money::from_cents(10).to_string(), "0.10");
        assert_eq!(Money::from_cents(12000).to_string(), "120.00");
        assert_eq!(Money::from_cents(-4050).to_string(), "-40.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("120".parse::<Money>().unwrap().cents(), 12000);
        assert_eq!("120.5".parse::<Money>().unwrap().cents(), 12050);
        assert_eq!("120,50".parse::<Money>().unwrap().cents(), 12050);
        assert_eq!("-3.99".parse::<Money>().unwrap().cents(), -399);
        assert_eq!("+0.05".parse::<Money>().unwrap().cents(), 5);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("12a".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
    }

    #[test]
    fn divided_by_rounds_half_away_from_zero() {
        assert_eq!(Money::from_cents(12000).divided_by(3).cents(), 4000);
        // 100.00 / 3 = 33.333… -> 33.33
        assert_eq!(Money::from_cents(10000).divided_by(3).cents(), 3333);
        // 0.05 / 3 = 0.0166… -> 0.02
        assert_eq!(Money::from_cents(5).divided_by(3).cents(), 2);
        // 0.03 / 2 = 0.015 -> 0.02
        assert_eq!(Money::from_cents(3).divided_by(2).cents(), 2);
    }

    #[test]
    fn proportion_rounds_to_nearest_cent() {
        // 60.00 * 1/4
        assert_eq!(Money::from_cents(6000).proportion(1.0, 4.0).cents(), 1500);
        // 10.00 * 1/3 -> 3.33
        assert_eq!(Money::from_cents(1000).proportion(1.0, 3.0).cents(), 333);
    }
}
