//! # Invoice Numbering
//!
//! Generates human-facing invoice identifiers.
//!
//! ## Format
//! `INV-YYYYMMDD-RRR` — current UTC date plus a zero-padded random value in
//! [0, 999]. Example: `INV-20260806-042`.
//!
//! The 1000-value daily keyspace is NOT collision-free (birthday risk well
//! within a busy day). The UNIQUE index on `invoice_number` is the actual
//! safety net: the transaction engine regenerates once on a duplicate, then
//! surfaces the violation.

use chrono::Utc;
use rand::Rng;

/// Generates a new invoice number.
///
/// ## Example
/// ```rust
/// let number = aurum_core::numbering::generate_invoice_number();
/// assert!(number.starts_with("INV-"));
/// assert_eq!(number.len(), "INV-YYYYMMDD-RRR".len());
/// ```
pub fn generate_invoice_number() -> String {
    let date_part = Utc::now().format("%Y%m%d");
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("INV-{date_part}-{suffix:03}")
}

// =============================================================================
// Unit Tests
// =============================================================================
