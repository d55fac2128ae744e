//! # Money Module
//!
//! Provides the `Money` type for menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer paise                                            │
//! │    ₹350.00 = 35000 paise, ₹60.00 = 6000 paise                          │
//! │    Order totals are exact sums of integers                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use resto_core::money::Money;
//!
//! let butter_chicken = Money::from_major(350);
//! let naan = Money::from_major(60);
//!
//! let total = butter_chicken + naan * 2;
//! assert_eq!(total.major(), 470);
//! assert_eq!(total.to_string(), "₹470");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// Number of minor units (paise) in one major unit (rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Currency symbol used by [`Money`]'s `Display` implementation.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for refunds without a second type
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a bare integer of paise**: snapshots stay plain JSON
///   numbers, but `"price": 350` means ₹3.50, not ₹350
/// - **Plain i64 arithmetic**: [`crate::validation::MAX_PRICE`] and the
///   cart caps keep every cart total in range
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► CartLine.line_total ──► Cart.total ──► Order.total_amount
///        │
///        └──► OrderItem.price (frozen copy at checkout)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// let price = Money::from_minor(35050); // ₹350.50
    /// assert_eq!(price.minor(), 35050);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// Menu prices are entered as whole rupees in the admin form,
    /// so this is the constructor most call sites use.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use resto_core::money::Money;
    ///
    /// let naan = Money::from_major(60);
    /// assert_eq!(naan.multiply_quantity(2).major(), 120);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `₹470` for whole amounts and `₹470.50` otherwise.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let major = self.major().abs();
        if self.minor_part() == 0 {
            write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, major)
        } else {
            write!(
                f,
                "{}{}{}.{:02}",
                sign,
                CURRENCY_SYMBOL,
                major,
                self.minor_part()
            )
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(350);
        assert_eq!(money.minor(), 35000);
        assert_eq!(money.major(), 350);
        assert_eq!(money.minor_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(470).to_string(), "₹470");
        assert_eq!(Money::from_minor(47050).to_string(), "₹470.50");
        assert_eq!(Money::from_minor(5).to_string(), "₹0.05");
        assert_eq!(Money::from_minor(-6000).to_string(), "-₹60");
        assert_eq!(Money::zero().to_string(), "₹0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(350);
        let b = Money::from_major(60);

        assert_eq!((a + b).major(), 410);
        assert_eq!((a - b).major(), 290);
        assert_eq!((b * 2).major(), 120);

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_major(350), Money::from_major(60), Money::from_major(60)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.major(), 470);
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_major(280)).unwrap();
        assert_eq!(json, "28000");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.major(), 280);

        let rupees_shaped: Money = serde_json::from_str("350").unwrap();
        assert_eq!(rupees_shaped.to_string(), "₹3.50");
    }
}
