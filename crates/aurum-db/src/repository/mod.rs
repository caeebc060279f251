//! # Repository Module
//!
//! Database repository implementations for Aurum Billing.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Caller                                                             │
//! │       │  db.invoices().create(&draft)                               │
//! │       ▼                                                             │
//! │  InvoiceRepository                                                  │
//! │  ├── create(&self, draft)       ← the one multi-write transaction   │
//! │  ├── get_detail(&self, id)                                          │
//! │  └── update_status(&self, ...)                                      │
//! │       │  SQL                                                        │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product catalog CRUD
//! - [`customer::CustomerRepository`] - Customer records (create-only)
//! - [`invoice::InvoiceRepository`] - Invoice creation transaction, detail,
//!   listing, status updates
//! - [`report::ReportRepository`] - Read-only sales and inventory reports

pub mod customer;
pub mod invoice;
pub mod product;
pub mod report;
