//! # Totals Calculator
//!
//! Pure computation of invoice aggregates from draft line items.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  items: [{quantity, unit_price}, ...]                               │
//! │       │                                                             │
//! │       ▼  line_total = unit_price × quantity  (exact, per item)      │
//! │  subtotal = Σ line_totals                                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  tax_amount      = subtotal × tax_rate       (half-up to paisa)     │
//! │  discount_amount = subtotal × discount_rate  (half-up to paisa)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  final_amount = subtotal + tax_amount - discount_amount             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same function backs both the caller's draft preview and the amounts
//! the transaction engine persists, so the two can never drift apart.

use serde::{Deserialize, Serialize};

use crate::money::{Money, Rate};
use crate::types::NewInvoiceItem;

/// The derived amounts of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of item line totals.
    pub total_amount: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    /// `total_amount + tax_amount - discount_amount`.
    pub final_amount: Money,
}

impl InvoiceTotals {
    /// An all-zero result, produced for an empty item list.
    pub const fn zero() -> Self {
        InvoiceTotals {
            total_amount: Money::zero(),
            tax_amount: Money::zero(),
            discount_amount: Money::zero(),
            final_amount: Money::zero(),
        }
    }
}

/// Computes invoice totals from draft items and percentage rates.
///
/// Line totals are summed per item in exact minor units; tax and discount
/// are each taken on the subtotal and rounded half-up to the nearest paisa.
/// An empty item list yields an all-zero result — rejecting empty drafts is
/// the transaction engine's job, not this function's.
///
/// ## Example
/// ```rust
/// use aurum_core::money::{Money, Rate};
/// use aurum_core::totals::compute_totals;
/// use aurum_core::types::NewInvoiceItem;
///
/// let items = vec![NewInvoiceItem {
///     product_id: 1,
///     quantity: 2,
///     unit_price: Money::from_paise(10_000), // ₹100.00
/// }];
/// let totals = compute_totals(&items, Rate::from_percentage(18.0), Rate::zero());
///
/// assert_eq!(totals.total_amount.paise(), 20_000);    // ₹200.00
/// assert_eq!(totals.tax_amount.paise(), 3_600);       // ₹36.00
/// assert_eq!(totals.discount_amount.paise(), 0);
/// assert_eq!(totals.final_amount.paise(), 23_600);    // ₹236.00
/// ```
pub fn compute_totals(items: &[NewInvoiceItem], tax_rate: Rate, discount_rate: Rate) -> InvoiceTotals {
    let mut subtotal = Money::zero();
    for item in items {
        subtotal += item.line_total();
    }

    let tax_amount = subtotal.apply_rate(tax_rate);
    let discount_amount = subtotal.apply_rate(discount_rate);

    InvoiceTotals {
        total_amount: subtotal,
        tax_amount,
        discount_amount,
        final_amount: subtotal + tax_amount - discount_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, unit_price: i64) -> NewInvoiceItem {
        NewInvoiceItem {
            product_id: 1,
            quantity,
            unit_price: Money::from_paise(unit_price),
        }
    }

    #[test]
    fn test_round_trip_example() {
        // 2 × ₹100.00 at 18% tax, 0% discount.
        let totals = compute_totals(&[item(2, 10_000)], Rate::from_percentage(18.0), Rate::zero());
        assert_eq!(totals.total_amount.paise(), 20_000);
        assert_eq!(totals.tax_amount.paise(), 3_600);
        assert_eq!(totals.discount_amount.paise(), 0);
        assert_eq!(totals.final_amount.paise(), 23_600);
    }

    #[test]
    fn test_empty_items_all_zero() {
        let totals = compute_totals(&[], Rate::from_percentage(18.0), Rate::from_percentage(5.0));
        assert_eq!(totals, InvoiceTotals::zero());
    }

    #[test]
    fn test_final_amount_identity() {
        let items = [item(3, 4_999), item(1, 123_456), item(7, 250)];
        let totals = compute_totals(&items, Rate::from_percentage(12.5), Rate::from_percentage(3.0));
        assert_eq!(
            totals.final_amount,
            totals.total_amount + totals.tax_amount - totals.discount_amount
        );
    }

    #[test]
    fn test_subtotal_is_sum_of_line_totals() {
        let items = [item(3, 4_999), item(2, 75_000)];
        let totals = compute_totals(&items, Rate::zero(), Rate::zero());
        let expected: i64 = items.iter().map(|i| i.line_total().paise()).sum();
        assert_eq!(totals.total_amount.paise(), expected);
        assert_eq!(totals.final_amount.paise(), expected);
    }

    #[test]
    fn test_discount_reduces_final_amount() {
        // ₹1000.00 at 0% tax, 10% discount → ₹900.00 owed.
        let totals = compute_totals(&[item(1, 100_000)], Rate::zero(), Rate::from_percentage(10.0));
        assert_eq!(totals.discount_amount.paise(), 10_000);
        assert_eq!(totals.final_amount.paise(), 90_000);
    }

    #[test]
    fn test_fractional_rate_rounds_half_up() {
        // ₹10.00 at 8.25% = ₹0.825 → ₹0.83.
        let totals = compute_totals(&[item(1, 1_000)], Rate::from_bps(825), Rate::zero());
        assert_eq!(totals.tax_amount.paise(), 83);
        assert_eq!(totals.final_amount.paise(), 1_083);
    }
}
