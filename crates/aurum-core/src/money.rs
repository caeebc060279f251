//! # Money Module
//!
//! Provides the `Money` and `Rate` types for handling monetary values and
//! percentages safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004                                  │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paise                                        │
//! │    Every amount is an i64 count of the smallest currency unit.      │
//! │    Line totals, subtotals, tax and discount amounts are exact;      │
//! │    rounding happens in exactly one place (`apply_rate`).            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::{Money, Rate};
//!
//! let price = Money::from_paise(10_000); // ₹100.00
//! let line = price.multiply_quantity(2); // ₹200.00
//!
//! let gst = Rate::from_percentage(18.0);
//! assert_eq!(line.apply_rate(gst).paise(), 3_600); // ₹36.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design
/// - **i64 (signed)**: discounts and corrections can be negative
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a bare integer**: wire values are minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
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
    /// Line totals are `unit_price.multiply_quantity(qty)`; the result is
    /// exact, no rounding is involved.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let unit_price = Money::from_paise(10_000); // ₹100.00
    /// assert_eq!(unit_price.multiply_quantity(2).paise(), 20_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage rate and returns the resulting amount,
    /// rounded half-up to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math in basis points: `(amount * bps + 5000) / 10000`.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::{Money, Rate};
    ///
    /// let subtotal = Money::from_paise(20_000);     // ₹200.00
    /// let tax = subtotal.apply_rate(Rate::from_percentage(18.0));
    /// assert_eq!(tax.paise(), 3_600);               // ₹36.00
    ///
    /// // ₹10.00 at 8.25% = ₹0.825 → rounds to ₹0.83
    /// let odd = Money::from_paise(1000).apply_rate(Rate::from_bps(825));
    /// assert_eq!(odd.paise(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(amount as i64)
    }
}

/// Display implementation shows money in a human-readable format.
///
/// For debugging and logs; callers format wire values themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate in basis points (bps), used for both tax and discount.
///
/// 1 basis point = 0.01% = 1/10000. 1800 bps = 18% (standard GST on gold
/// making charges territory); 825 bps = 8.25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Rate;
    ///
    /// assert_eq!(Rate::from_percentage(18.0).bps(), 1800);
    /// assert_eq!(Rate::from_percentage(8.25).bps(), 825);
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.paise(), 1500);
        c -= b;
        assert_eq!(c.paise(), 1000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_paise(299);
        assert_eq!(unit_price.multiply_quantity(3).paise(), 897);
    }

    #[test]
    fn test_apply_rate_basic() {
        // ₹200.00 at 18% = ₹36.00
        let subtotal = Money::from_paise(20_000);
        let tax = subtotal.apply_rate(Rate::from_percentage(18.0));
        assert_eq!(tax.paise(), 3_600);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // ₹10.00 at 8.25% = ₹0.825 → ₹0.83
        let amount = Money::from_paise(1000);
        assert_eq!(amount.apply_rate(Rate::from_bps(825)).paise(), 83);

        // ₹10.00 at 8.24% = ₹0.824 → ₹0.82
        assert_eq!(amount.apply_rate(Rate::from_bps(824)).paise(), 82);
    }

    #[test]
    fn test_apply_zero_rate() {
        let amount = Money::from_paise(12_345);
        assert_eq!(amount.apply_rate(Rate::zero()).paise(), 0);
    }

    #[test]
    fn test_rate_from_percentage() {
        assert_eq!(Rate::from_percentage(18.0).bps(), 1800);
        assert_eq!(Rate::from_percentage(8.25).bps(), 825);
        assert_eq!(Rate::from_percentage(0.0).bps(), 0);
        assert!((Rate::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_paise(-1).is_negative());
        assert_eq!(Money::default().paise(), 0);
        assert!(Rate::default().is_zero());
    }
}
