//! # Report Repository
//!
//! Read-only aggregations over the sales ledger and the catalog. Nothing
//! here writes; both reports read committed state only.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aurum_core::{InventoryReportRow, SalesReportRow};

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Period-bounded sales report, newest sale first.
    ///
    /// Ledger rows are joined with product, invoice, and customer names.
    /// The date filter applies only when **both** bounds are given, and is
    /// inclusive on both ends; otherwise the full ledger is returned.
    pub async fn sales_report(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> DbResult<Vec<SalesReportRow>> {
        debug!(?start_date, ?end_date, "Running sales report");

        const BASE: &str = r#"
            SELECT s.id, s.invoice_id, s.product_id,
                   s.quantity, s.unit_price, s.total_price, s.sale_date,
                   p.name AS product_name, i.invoice_number, c.name AS customer_name
            FROM sales s
            LEFT JOIN products p ON s.product_id = p.id
            LEFT JOIN invoices i ON s.invoice_id = i.id
            LEFT JOIN customers c ON i.customer_id = c.id
        "#;

        let rows = match (start_date, end_date) {
            (Some(start), Some(end)) => {
                sqlx::query_as::<_, SalesReportRow>(&format!(
                    "{BASE} WHERE s.sale_date BETWEEN ?1 AND ?2 ORDER BY s.sale_date DESC, s.id DESC"
                ))
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await?
            }
            _ => {
                sqlx::query_as::<_, SalesReportRow>(&format!(
                    "{BASE} ORDER BY s.sale_date DESC, s.id DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Inventory report: every product with its lifetime sold quantity and
    /// reconstructed total, ordered by ascending current stock so the
    /// lowest-stock items surface first.
    pub async fn inventory_report(&self) -> DbResult<Vec<InventoryReportRow>> {
        debug!("Running inventory report");

        let rows = sqlx::query_as::<_, InventoryReportRow>(
            r#"
            SELECT p.id, p.name, p.description, p.category, p.weight, p.purity,
                   p.price, p.stock_quantity, p.created_at, p.updated_at,
                   COALESCE(SUM(s.quantity), 0) AS sold_quantity,
                   p.stock_quantity + COALESCE(SUM(s.quantity), 0) AS total_quantity
            FROM products p
            LEFT JOIN sales s ON p.id = s.product_id
            GROUP BY p.id
            ORDER BY p.stock_quantity ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::Duration;

    use aurum_core::{Money, NewCustomer, NewInvoice, NewInvoiceItem, NewProduct, Rate};

    async fn seeded_db() -> (Database, i64, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let customer_id = db
            .customers()
            .create(&NewCustomer {
                name: "Asha Verma".to_string(),
                email: None,
                phone: None,
                address: None,
                gst_number: None,
            })
            .await
            .unwrap();

        let product_id = db
            .products()
            .create(&NewProduct {
                name: "Gold Bangle".to_string(),
                description: None,
                category: Some("Gold".to_string()),
                weight: Some(18.5),
                purity: Some("22K".to_string()),
                price: Money::from_paise(80_000),
                stock_quantity: 10,
            })
            .await
            .unwrap();

        (db, customer_id, product_id)
    }

    async fn sell(db: &Database, customer_id: i64, product_id: i64, quantity: i64) {
        db.invoices()
            .create(&NewInvoice {
                customer_id,
                items: vec![NewInvoiceItem {
                    product_id,
                    quantity,
                    unit_price: Money::from_paise(80_000),
                }],
                tax_rate: Rate::zero(),
                discount_rate: Rate::zero(),
                notes: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_sales_report_joins_names() {
        let (db, customer_id, product_id) = seeded_db().await;
        sell(&db, customer_id, product_id, 2).await;

        let rows = db.reports().sales_report(None, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 2);
        assert_eq!(rows[0].total_price.paise(), 160_000);
        assert_eq!(rows[0].product_name.as_deref(), Some("Gold Bangle"));
        assert_eq!(rows[0].customer_name.as_deref(), Some("Asha Verma"));
        assert!(rows[0]
            .invoice_number
            .as_deref()
            .unwrap()
            .starts_with("INV-"));
    }

    #[tokio::test]
    async fn test_sales_report_inclusive_date_window() {
        let (db, customer_id, product_id) = seeded_db().await;
        sell(&db, customer_id, product_id, 1).await;

        let now = Utc::now();

        // A window around now includes the sale.
        let rows = db
            .reports()
            .sales_report(Some(now - Duration::hours(1)), Some(now + Duration::hours(1)))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);

        // A window entirely in the past excludes it.
        let rows = db
            .reports()
            .sales_report(Some(now - Duration::days(2)), Some(now - Duration::days(1)))
            .await
            .unwrap();
        assert!(rows.is_empty());

        // A single bound is ignored: the full ledger comes back.
        let rows = db
            .reports()
            .sales_report(Some(now - Duration::days(2)), None)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_sales_report_newest_first() {
        let (db, customer_id, product_id) = seeded_db().await;
        sell(&db, customer_id, product_id, 1).await;
        sell(&db, customer_id, product_id, 2).await;

        let rows = db.reports().sales_report(None, None).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].sale_date >= rows[1].sale_date);
        assert_eq!(rows[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_inventory_report_sold_and_total_quantities() {
        let (db, customer_id, product_id) = seeded_db().await;

        // Stock starts at 10: two sales of 2 and 5 leave 3 on hand.
        sell(&db, customer_id, product_id, 2).await;
        sell(&db, customer_id, product_id, 5).await;

        let rows = db.reports().inventory_report().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stock_quantity, 3);
        assert_eq!(rows[0].sold_quantity, 7);
        assert_eq!(rows[0].total_quantity, 10);
        assert!(rows[0].is_low_stock());
    }

    #[tokio::test]
    async fn test_inventory_report_unsold_product_has_zero_sold() {
        let (db, ..) = seeded_db().await;

        let rows = db.reports().inventory_report().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sold_quantity, 0);
        assert_eq!(rows[0].total_quantity, rows[0].stock_quantity);
        assert!(!rows[0].is_low_stock());
    }

    #[tokio::test]
    async fn test_inventory_report_lowest_stock_first() {
        let (db, customer_id, product_id) = seeded_db().await;

        let scarce_id = db
            .products()
            .create(&NewProduct {
                name: "Diamond Stud".to_string(),
                description: None,
                category: Some("Diamond".to_string()),
                weight: Some(1.1),
                purity: None,
                price: Money::from_paise(4_000_000),
                stock_quantity: 1,
            })
            .await
            .unwrap();

        sell(&db, customer_id, product_id, 2).await;

        let rows = db.reports().inventory_report().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, scarce_id);
        assert_eq!(rows[1].id, product_id);
    }
}
