//! # Invoice Repository
//!
//! The invoice transaction engine: atomic creation, detail reads, listing,
//! and payment status updates.
//!
//! ## Creation Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Invoice Creation (all-or-nothing)                 │
//! │                                                                     │
//! │  validate draft ──► compute totals ──► generate invoice number      │
//! │                                              │                      │
//! │  ┌───────────────── BEGIN TRANSACTION ───────▼──────────────────┐   │
//! │  │ 1. INSERT invoice header (status = pending)                  │   │
//! │  │ 2. For each item:                                            │   │
//! │  │    a. INSERT invoice_items row                               │   │
//! │  │    b. UPDATE products stock_quantity -= qty (no floor check) │   │
//! │  │    c. INSERT sales ledger row                                │   │
//! │  │ 3. COMMIT                                                    │   │
//! │  └──────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  Any failure inside the block rolls everything back: no partial     │
//! │  invoice, no partial stock mutation, no orphan ledger rows.         │
//! │                                                                     │
//! │  An invoice_number UNIQUE violation regenerates the number and      │
//! │  retries the whole transaction once, then surfaces.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use aurum_core::numbering::generate_invoice_number;
use aurum_core::totals::{compute_totals, InvoiceTotals};
use aurum_core::validation::validate_new_invoice;
use aurum_core::{
    Invoice, InvoiceDetail, InvoiceItemDetail, InvoiceSummary, InvoiceWithCustomer, NewInvoice,
    PaymentStatus,
};

/// Repository for invoice operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Creates an invoice atomically from a draft.
    ///
    /// Aggregates are recomputed here from the draft's items and rates —
    /// never taken from the caller — so the persisted totals always satisfy
    /// `final_amount = total_amount + tax_amount - discount_amount` and
    /// `total_amount = Σ line totals`.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty items, missing customer reference,
    ///   non-positive quantity, negative unit price, out-of-range rate;
    ///   nothing is written
    /// * `DbError::UniqueViolation` - invoice number collided twice
    /// * `DbError::InvoiceCreation` - a write inside the transaction failed;
    ///   everything was rolled back
    pub async fn create(&self, draft: &NewInvoice) -> DbResult<Invoice> {
        validate_new_invoice(draft)?;

        let totals = compute_totals(&draft.items, draft.tax_rate, draft.discount_rate);

        // The 1000-value daily keyspace makes collisions a real possibility;
        // the UNIQUE index catches them and we regenerate exactly once.
        let number = generate_invoice_number();
        match self.create_with_number(&number, draft, totals).await {
            Err(err) if err.is_invoice_number_collision() => {
                let retry = generate_invoice_number();
                debug!(collided = %number, retry = %retry, "Invoice number collision, regenerating");
                self.create_with_number(&retry, draft, totals).await
            }
            other => other,
        }
    }

    /// Runs the creation transaction with a fixed invoice number.
    ///
    /// Every early return drops the open transaction, which rolls back all
    /// writes made so far. An `invoice_number` unique violation is returned
    /// unwrapped so `create` can detect it; every other failure is wrapped
    /// in `InvoiceCreation`.
    pub(crate) async fn create_with_number(
        &self,
        invoice_number: &str,
        draft: &NewInvoice,
        totals: InvoiceTotals,
    ) -> DbResult<Invoice> {
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO invoices (
                invoice_number, customer_id,
                total_amount, tax_amount, discount_amount, final_amount,
                payment_status, invoice_date, due_date, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(invoice_number)
        .bind(draft.customer_id)
        .bind(totals.total_amount)
        .bind(totals.tax_amount)
        .bind(totals.discount_amount)
        .bind(totals.final_amount)
        .bind(PaymentStatus::Pending)
        .bind(now)
        .bind(Option::<chrono::DateTime<Utc>>::None)
        .bind(&draft.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            let err = DbError::from(e);
            if err.is_invoice_number_collision() {
                err
            } else {
                DbError::invoice_creation(err)
            }
        })?;

        let invoice_id = result.last_insert_rowid();

        for item in &draft.items {
            let line_total = item.line_total();

            sqlx::query(
                r#"
                INSERT INTO invoice_items (invoice_id, product_id, quantity, unit_price, total_price)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(invoice_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(line_total)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::invoice_creation(e.into()))?;

            // Stock may go negative: the decrement has no floor check.
            // Zero rows affected means the product does not exist at all,
            // which aborts the whole creation.
            let stock_update = sqlx::query(
                r#"
                UPDATE products
                SET stock_quantity = stock_quantity - ?2, updated_at = ?3
                WHERE id = ?1
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::invoice_creation(e.into()))?;

            if stock_update.rows_affected() == 0 {
                return Err(DbError::invoice_creation(DbError::not_found(
                    "Product",
                    item.product_id,
                )));
            }

            sqlx::query(
                r#"
                INSERT INTO sales (invoice_id, product_id, quantity, unit_price, total_price, sale_date)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(invoice_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(line_total)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::invoice_creation(e.into()))?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::invoice_creation(e.into()))?;

        info!(
            invoice_id,
            invoice_number,
            final_amount = %totals.final_amount,
            items = draft.items.len(),
            "Invoice created"
        );

        Ok(Invoice {
            id: invoice_id,
            invoice_number: invoice_number.to_string(),
            customer_id: Some(draft.customer_id),
            total_amount: totals.total_amount,
            tax_amount: totals.tax_amount,
            discount_amount: totals.discount_amount,
            final_amount: totals.final_amount,
            payment_status: PaymentStatus::Pending,
            invoice_date: now,
            due_date: None,
            notes: draft.notes.clone(),
        })
    }

    /// Fetches an invoice with its customer block and itemized lines.
    ///
    /// Product display fields on the items are joined live, so they reflect
    /// the catalog as it exists now; the amounts are the at-sale values.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no invoice with this id
    pub async fn get_detail(&self, id: i64) -> DbResult<InvoiceDetail> {
        let invoice = sqlx::query_as::<_, InvoiceWithCustomer>(
            r#"
            SELECT i.id, i.invoice_number, i.customer_id,
                   i.total_amount, i.tax_amount, i.discount_amount, i.final_amount,
                   i.payment_status, i.invoice_date, i.due_date, i.notes,
                   c.name AS customer_name, c.email, c.phone, c.address, c.gst_number
            FROM invoices i
            LEFT JOIN customers c ON i.customer_id = c.id
            WHERE i.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Invoice", id))?;

        let items = sqlx::query_as::<_, InvoiceItemDetail>(
            r#"
            SELECT ii.id, ii.invoice_id, ii.product_id,
                   ii.quantity, ii.unit_price, ii.total_price,
                   p.name AS product_name, p.description, p.category, p.weight, p.purity
            FROM invoice_items ii
            LEFT JOIN products p ON ii.product_id = p.id
            WHERE ii.invoice_id = ?1
            ORDER BY ii.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(InvoiceDetail { invoice, items })
    }

    /// Lists invoice headers with customer names, newest first.
    pub async fn list(&self) -> DbResult<Vec<InvoiceSummary>> {
        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT i.id, i.invoice_number, i.customer_id,
                   i.total_amount, i.tax_amount, i.discount_amount, i.final_amount,
                   i.payment_status, i.invoice_date, i.due_date, i.notes,
                   c.name AS customer_name
            FROM invoices i
            LEFT JOIN customers c ON i.customer_id = c.id
            ORDER BY i.invoice_date DESC, i.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    /// Sets the payment status of an invoice.
    ///
    /// Every transition between the four statuses is permitted, including
    /// moving paid invoices back to pending.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no row with this id (zero rows affected)
    pub async fn update_status(&self, id: i64, status: PaymentStatus) -> DbResult<()> {
        debug!(id, status = %status, "Updating payment status");

        let result = sqlx::query("UPDATE invoices SET payment_status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }

    /// Counts invoices (for diagnostics and dashboard tiles).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
