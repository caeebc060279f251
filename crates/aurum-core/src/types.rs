//! # Domain Types
//!
//! Core domain types for Aurum Billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐   │
//! │  │   Product    │  │   Customer   │  │         Invoice          │   │
//! │  │ ──────────── │  │ ──────────── │  │ ──────────────────────── │   │
//! │  │ id           │  │ id           │  │ id                       │   │
//! │  │ name, price  │  │ name, gst    │  │ invoice_number (unique)  │   │
//! │  │ stock_qty    │  │ contact info │  │ totals, payment_status   │   │
//! │  └──────────────┘  └──────────────┘  └───────────┬──────────────┘   │
//! │                                                  │                  │
//! │                         ┌────────────────────────┴───────┐          │
//! │                         │                                │          │
//! │                  ┌──────┴───────┐                ┌───────┴──────┐   │
//! │                  │ InvoiceItem  │   one ledger   │ SalesRecord  │   │
//! │                  │ qty × unit   │   row per item │ (append-only)│   │
//! │                  └──────────────┘                └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Serde field names are the wire names callers see (`stock_quantity`,
//! `final_amount`, `payment_status`, ...). Monetary fields serialize as
//! integers in minor units.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::{Money, Rate};
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A catalog product (jewellery item).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Internal numeric identifier (database rowid).
    pub id: i64,

    /// Display name shown on invoices and reports.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Category, e.g. "Gold" or "Silver".
    pub category: Option<String>,

    /// Weight in grams.
    pub weight: Option<f64>,

    /// Purity marking, e.g. "24K" or "925".
    pub purity: Option<String>,

    /// Unit price in paise.
    pub price: Money,

    /// Current stock level. May go negative: sales decrement without a
    /// floor check, and oversell surfaces through the inventory report.
    pub stock_quantity: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product is below the fixed low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }
}

/// Fields for creating or fully updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub purity: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub stock_quantity: i64,
}

// =============================================================================
// Customer
// =============================================================================

/// A billing customer. Create-only: there is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub gst_number: Option<String>,
}

// =============================================================================
// Payment Status
// =============================================================================

/// The payment status of an invoice.
///
/// Initial state is `Pending`. Every transition between the four states is
/// permitted (including `Paid` back to `Pending`); there is no terminal
/// state and no automatic transition — `due_date` is stored but never acted
/// on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Cancelled,
    Overdue,
}

impl PaymentStatus {
    /// All statuses, in wire order.
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Pending,
        PaymentStatus::Paid,
        PaymentStatus::Cancelled,
        PaymentStatus::Overdue,
    ];

    /// The wire string for this status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a wire status string. Anything outside the four known values is a
/// validation error.
impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            "overdue" => Ok(PaymentStatus::Overdue),
            _ => Err(ValidationError::NotAllowed {
                field: "payment_status".to_string(),
                allowed: PaymentStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice header. Created atomically with its items; `payment_status`
/// is the only field mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i64,

    /// Human-facing unique identifier (`INV-YYYYMMDD-RRR`), distinct from
    /// the internal numeric id. Immutable after creation.
    pub invoice_number: String,

    /// Customer reference. Nullable: deleting a customer leaves historical
    /// invoices in place with a dangling reference.
    pub customer_id: Option<i64>,

    /// Subtotal: sum of item line totals.
    pub total_amount: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,

    /// Amount owed: `total_amount + tax_amount - discount_amount`.
    pub final_amount: Money,

    pub payment_status: PaymentStatus,
    pub invoice_date: DateTime<Utc>,

    /// Stored but unused by any logic.
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// A line item on an invoice.
///
/// `unit_price` is captured at sale time and never re-read from the product,
/// so later price changes do not alter historical invoices. `total_price`
/// is stored redundantly and always equals `quantity * unit_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    pub id: i64,
    pub invoice_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

/// A row in the append-only sales ledger: one per invoice item, written in
/// the same transaction, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesRecord {
    pub id: i64,
    pub invoice_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
    pub sale_date: DateTime<Utc>,
}

// =============================================================================
// Invoice Submission
// =============================================================================

/// A draft invoice submitted for creation.
///
/// Carries items and rates only — no client-computed aggregates. All
/// derived amounts are recomputed server-side from these fields, so a
/// tampered or stale client total cannot be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_id: i64,
    pub items: Vec<NewInvoiceItem>,
    pub tax_rate: Rate,
    pub discount_rate: Rate,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One draft line: the caller resolves `unit_price` from the catalog when
/// assembling the draft; the engine trusts it as the at-sale price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoiceItem {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
}

impl NewInvoiceItem {
    /// Exact line total for this draft line.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Read-Side Views
// =============================================================================
// Join shapes returned by list/detail/report queries. Product and customer
// columns are nullable because the joins are LEFT: catalog rows may have
// been deleted after the fact.

/// An invoice header with the customer's name, for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i64,
    pub invoice_number: String,
    pub customer_id: Option<i64>,
    pub total_amount: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub payment_status: PaymentStatus,
    pub invoice_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub customer_name: Option<String>,
}

/// An invoice header denormalized with the customer's contact block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceWithCustomer {
    pub id: i64,
    pub invoice_number: String,
    pub customer_id: Option<i64>,
    pub total_amount: Money,
    pub tax_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub payment_status: PaymentStatus,
    pub invoice_date: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
}

/// A line item joined with the product's display fields as they exist now.
///
/// Display fields are read live, not snapshotted: renaming a product changes
/// how historical invoices render. The amounts (`unit_price`, `total_price`)
/// are the at-sale values and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceItemDetail {
    pub id: i64,
    pub invoice_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub weight: Option<f64>,
    pub purity: Option<String>,
}

/// Full invoice view: header + customer block + itemized lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: InvoiceWithCustomer,
    pub items: Vec<InvoiceItemDetail>,
}

/// A sales-ledger row joined with display names for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesReportRow {
    pub id: i64,
    pub invoice_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
    pub sale_date: DateTime<Utc>,
    pub product_name: Option<String>,
    pub invoice_number: Option<String>,
    pub customer_name: Option<String>,
}

/// A product with its lifetime sold quantity.
///
/// `total_quantity` is the reconstructed all-time stock:
/// current `stock_quantity` plus everything ever sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryReportRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub weight: Option<f64>,
    pub purity: Option<String>,
    pub price: Money,
    pub stock_quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sold_quantity: i64,
    pub total_quantity: i64,
}

impl InventoryReportRow {
    /// Whether the product is below the fixed low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: 1,
            invoice_number: "INV-20260806-042".to_string(),
            customer_id: Some(7),
            total_amount: Money::from_paise(20_000),
            tax_amount: Money::from_paise(3_600),
            discount_amount: Money::zero(),
            final_amount: Money::from_paise(23_600),
            payment_status: PaymentStatus::default(),
            invoice_date: Utc::now(),
            due_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_payment_status_default() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_payment_status_round_trip() {
        for status in PaymentStatus::ALL {
            assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_payment_status_rejects_unknown() {
        let err = "bogus".parse::<PaymentStatus>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
        assert!(err.to_string().contains("payment_status"));
    }

    #[test]
    fn test_invoice_wire_field_names() {
        let value = serde_json::to_value(sample_invoice()).unwrap();
        assert_eq!(value["invoice_number"], "INV-20260806-042");
        assert_eq!(value["total_amount"], 20_000);
        assert_eq!(value["tax_amount"], 3_600);
        assert_eq!(value["final_amount"], 23_600);
        assert_eq!(value["payment_status"], "pending");
        assert!(value.get("due_date").is_some());
    }

    #[test]
    fn test_product_wire_field_names() {
        let product = Product {
            id: 1,
            name: "Gold Ring".to_string(),
            description: None,
            category: Some("Gold".to_string()),
            weight: Some(4.2),
            purity: Some("22K".to_string()),
            price: Money::from_paise(2_500_000),
            stock_quantity: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["stock_quantity"], 3);
        assert_eq!(value["price"], 2_500_000);
        assert_eq!(value["purity"], "22K");
    }

    #[test]
    fn test_invoice_detail_flattens_header() {
        let invoice = sample_invoice();
        let detail = InvoiceDetail {
            invoice: InvoiceWithCustomer {
                id: invoice.id,
                invoice_number: invoice.invoice_number.clone(),
                customer_id: invoice.customer_id,
                total_amount: invoice.total_amount,
                tax_amount: invoice.tax_amount,
                discount_amount: invoice.discount_amount,
                final_amount: invoice.final_amount,
                payment_status: invoice.payment_status,
                invoice_date: invoice.invoice_date,
                due_date: invoice.due_date,
                notes: invoice.notes.clone(),
                customer_name: Some("Asha Verma".to_string()),
                email: None,
                phone: None,
                address: None,
                gst_number: None,
            },
            items: vec![],
        };

        // Header fields sit at the top level next to `items`, matching the
        // original wire shape.
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["invoice_number"], invoice.invoice_number);
        assert_eq!(value["customer_name"], "Asha Verma");
        assert!(value["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_low_stock_threshold() {
        let mut row = InventoryReportRow {
            id: 1,
            name: "Silver Chain".to_string(),
            description: None,
            category: Some("Silver".to_string()),
            weight: None,
            purity: None,
            price: Money::from_paise(120_000),
            stock_quantity: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            sold_quantity: 6,
            total_quantity: 10,
        };
        assert!(row.is_low_stock());
        row.stock_quantity = 5;
        assert!(!row.is_low_stock());
    }

    #[test]
    fn test_draft_line_total() {
        let item = NewInvoiceItem {
            product_id: 1,
            quantity: 2,
            unit_price: Money::from_paise(10_000),
        };
        assert_eq!(item.line_total().paise(), 20_000);
    }
}
