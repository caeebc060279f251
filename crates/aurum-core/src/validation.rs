//! # Validation Module
//!
//! Input validation for catalog records and invoice drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Caller (UI / HTTP layer, out of scope here)               │
//! │  ├── Basic format checks, immediate feedback                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE, invoked by the repositories                  │
//! │  ├── Required fields, ranges, draft shape                           │
//! │  └── Rejects before any transaction is opened                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (NOT NULL, UNIQUE invoice_number)                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::{Money, Rate};
use crate::types::{NewCustomer, NewInvoice, NewProduct};
use crate::{MAX_INVOICE_ITEMS, MAX_ITEM_QUANTITY};

/// Maximum length for product and customer names.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name (product or customer).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use aurum_core::validation::validate_name;
///
/// assert!(validate_name("name", "Gold Ring 22K").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price: zero is allowed, negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates an item quantity: strictly positive, bounded to catch
/// fat-finger entries (1000 instead of 10).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    if quantity > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

/// Validates a percentage rate: 0% to 100%.
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.bps() > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates product fields before insert or update.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_name("name", &product.name)?;
    validate_price(product.price)?;
    Ok(())
}

/// Validates customer fields before insert.
pub fn validate_new_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_name("name", &customer.name)?;
    Ok(())
}

/// Validates a draft invoice before the creation transaction opens.
///
/// ## Rules
/// - customer reference present (a real id, not a placeholder)
/// - at least one item, at most `MAX_INVOICE_ITEMS`
/// - every item: positive bounded quantity, non-negative unit price
/// - tax and discount rates within 0-100%
///
/// The draft's `unit_price` values are trusted as-is (the caller resolved
/// them from the catalog); only their sign is checked here.
pub fn validate_new_invoice(draft: &NewInvoice) -> ValidationResult<()> {
    if draft.customer_id <= 0 {
        return Err(ValidationError::Required {
            field: "customer_id".to_string(),
        });
    }

    if draft.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if draft.items.len() > MAX_INVOICE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: 1,
            max: MAX_INVOICE_ITEMS as i64,
        });
    }

    for item in &draft.items {
        if item.product_id <= 0 {
            return Err(ValidationError::Required {
                field: "product_id".to_string(),
            });
        }
        validate_quantity(item.quantity)?;
        if item.unit_price.is_negative() {
            return Err(ValidationError::Negative {
                field: "unit_price".to_string(),
            });
        }
    }

    validate_rate("tax_rate", draft.tax_rate)?;
    validate_rate("discount_rate", draft.discount_rate)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewInvoiceItem;

    fn draft() -> NewInvoice {
        NewInvoice {
            customer_id: 1,
            items: vec![NewInvoiceItem {
                product_id: 1,
                quantity: 2,
                unit_price: Money::from_paise(10_000),
            }],
            tax_rate: Rate::from_percentage(18.0),
            discount_rate: Rate::zero(),
            notes: None,
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Gold Ring").is_ok());
        assert!(matches!(
            validate_name("name", "  "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_name("name", &"x".repeat(300)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_paise(100)).is_ok());
        assert!(validate_price(Money::from_paise(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_ITEM_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_rate_bounds() {
        assert!(validate_rate("tax_rate", Rate::from_percentage(100.0)).is_ok());
        assert!(validate_rate("tax_rate", Rate::from_bps(10_001)).is_err());
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_new_invoice(&draft()).is_ok());
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut d = draft();
        d.items.clear();
        let err = validate_new_invoice(&d).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "items".to_string()
            }
        );
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut d = draft();
        d.items[0].quantity = 0;
        assert!(validate_new_invoice(&d).is_err());
    }

    #[test]
    fn test_missing_customer_rejected() {
        let mut d = draft();
        d.customer_id = 0;
        assert!(matches!(
            validate_new_invoice(&d),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_negative_unit_price_rejected() {
        let mut d = draft();
        d.items[0].unit_price = Money::from_paise(-500);
        assert!(validate_new_invoice(&d).is_err());
    }
}
