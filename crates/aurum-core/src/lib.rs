//! # aurum-core: Pure Business Logic for Aurum Billing
//!
//! This crate is the heart of the billing engine: all business rules as
//! pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Aurum Billing Architecture                      │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │           Callers (HTTP / CLI / UI — out of scope)          │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │              ★ aurum-core (THIS CRATE) ★                    │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐ ┌───────┐  │    │
//! │  │  │  types  │ │  money  │ │ totals │ │numbering │ │ valid │  │    │
//! │  │  │ Product │ │  Money  │ │ sub/tax│ │ INV-...  │ │ ation │  │    │
//! │  │  │ Invoice │ │  Rate   │ │ /final │ │  format  │ │ rules │  │    │
//! │  │  └─────────┘ └─────────┘ └────────┘ └──────────┘ └───────┘  │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO DATABASE • NO NETWORK                          │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │                aurum-db (Database Layer)                    │    │
//! │  │        SQLite queries, migrations, repositories             │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Invoice, ...)
//! - [`money`] - Money and Rate with integer arithmetic (no floating point!)
//! - [`totals`] - Invoice totals calculator
//! - [`numbering`] - Invoice number generation
//! - [`validation`] - Input validation rules
//! - [`error`] - Typed validation errors
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::money::{Money, Rate};
//! use aurum_core::totals::compute_totals;
//! use aurum_core::types::NewInvoiceItem;
//!
//! let items = vec![NewInvoiceItem {
//!     product_id: 1,
//!     quantity: 2,
//!     unit_price: Money::from_paise(10_000),
//! }];
//! let totals = compute_totals(&items, Rate::from_percentage(18.0), Rate::zero());
//! assert_eq!(totals.final_amount.paise(), 23_600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod numbering;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::{Money, Rate};
pub use totals::{compute_totals, InvoiceTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which a product counts as "low stock" on dashboards
/// and the inventory report. Fixed, not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Maximum line items on a single invoice.
///
/// Keeps transaction sizes reasonable; a jewellery invoice never comes
/// close in practice.
pub const MAX_INVOICE_ITEMS: usize = 100;

/// Maximum quantity for a single line item. Catches fat-finger entries
/// (1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
