//! # Money Module
//!
//! Provides the `Money` type for prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices drifts:                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  The catalog service prices pizzas in whole currency units              │
//! │  (e.g. 395, 450, 803), so every price and total stays an i64.           │
//! │                                                                         │
//! │    Cart total = Σ price × count   (exact, no rounding)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::money::Money;
//!
//! let price = Money::from_units(395);
//!
//! let line_total = price * 3;
//! assert_eq!(line_total.units(), 1185);
//!
//! let total: Money = [price, Money::from_units(450)].into_iter().sum();
//! assert_eq!(total.units(), 845);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest unit the catalog service prices in.
///
/// ## Wire Format
/// Serializes as a bare JSON number (`"price": 395`), exactly as the
/// catalog service sends it. A fractional price in the catalog payload is
/// rejected at decode time rather than silently truncated.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► CartEntry line total (price × count)                 │
/// │                         │                                               │
/// │                         ▼                                               │
/// │                    Cart.total_price (Σ line totals)                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a cart count, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use pizzeria_core::money::Money;
    ///
    /// let unit_price = Money::from_units(450);
    /// assert_eq!(unit_price.multiply_count(2).units(), 900);
    /// ```
    #[inline]
    pub const fn multiply_count(&self, count: u32) -> Self {
        Money(self.0.saturating_mul(count as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the bare amount; width and alignment flags are honoured.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Multiplication by a cart count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.multiply_count(count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let price = Money::from_units(803);
        assert_eq!(price.units(), 803);
        assert!(!price.is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(395);
        let b = Money::from_units(450);

        assert_eq!((a + b).units(), 845);
        assert_eq!((a * 3).units(), 1185);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running, a + b);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_units(i64::MAX / 2 + 1);

        assert_eq!((huge * 2).units(), i64::MAX);
        assert_eq!((huge + huge).units(), i64::MAX);
        assert_eq!(Money::from_units(-huge.units()).multiply_count(3).units(), i64::MIN);

        let total: Money = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.units(), i64::MAX);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
        assert_eq!(total, Money::default());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_units(395)).unwrap();
        assert_eq!(json, "395");

        let parsed: Money = serde_json::from_str("450").unwrap();
        assert_eq!(parsed.units(), 450);
    }

    #[test]
    fn test_fractional_price_is_rejected() {
        assert!(serde_json::from_str::<Money>("395.5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(1185).to_string(), "1185");
        assert_eq!(format!("{:>6}", Money::from_units(395)), "   395");
    }
}
