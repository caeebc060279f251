//! # aurum-db: Database Layer for Aurum Billing
//!
//! This crate provides database access for the billing engine.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Aurum Billing Data Flow                        │
//! │                                                                     │
//! │  Caller (HTTP / CLI / UI — out of scope)                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌──────────────────────────────────────────────────────────────┐   │
//! │  │                   aurum-db (THIS CRATE)                      │   │
//! │  │                                                              │   │
//! │  │  ┌─────────────┐   ┌────────────────┐   ┌───────────────┐    │   │
//! │  │  │  Database   │   │  Repositories  │   │  Migrations   │    │   │
//! │  │  │  (pool.rs)  │   │ product        │   │  (embedded)   │    │   │
//! │  │  │             │   │ customer       │   │               │    │   │
//! │  │  │ SqlitePool  │◄──│ invoice        │   │ 001_init.sql  │    │   │
//! │  │  │ WAL mode    │   │ report         │   │ 002_idx.sql   │    │   │
//! │  │  └─────────────┘   └────────────────┘   └───────────────┘    │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (five tables: products, customers, invoices,       │
//! │                   invoice_items, sales)                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/aurum.db")).await?;
//!
//! let products = db.products().list().await?;
//! let invoice = db.invoices().create(&draft).await?;
//! let inventory = db.reports().inventory_report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
