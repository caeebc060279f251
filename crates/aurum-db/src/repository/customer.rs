//! # Customer Repository
//!
//! Catalog operations for customers. Deliberately create-only: customers
//! are contact records attached to invoices at creation time, and there is
//! no update or delete operation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aurum_core::validation::validate_new_customer;
use aurum_core::{Customer, NewCustomer};

/// Repository for customer records.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists all customers, newest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, gst_number, created_at
            FROM customers
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Gets a customer by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, phone, address, gst_number, created_at
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a new customer and returns its generated id.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty name
    pub async fn create(&self, customer: &NewCustomer) -> DbResult<i64> {
        validate_new_customer(customer)?;

        debug!(name = %customer.name, "Inserting customer");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone, address, gst_number, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(&customer.gst_number)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Counts customers (for diagnostics and dashboard tiles).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: Some("asha@example.com".to_string()),
            phone: Some("98200 00000".to_string()),
            address: Some("12 MG Road, Pune".to_string()),
            gst_number: Some("27AAAPA1234A1Z5".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_db().await;
        let repo = db.customers();

        let id = repo.create(&customer("Asha Verma")).await.unwrap();
        let found = repo.get_by_id(id).await.unwrap().unwrap();

        assert_eq!(found.name, "Asha Verma");
        assert_eq!(found.gst_number.as_deref(), Some("27AAAPA1234A1Z5"));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = test_db().await;
        let repo = db.customers();

        repo.create(&customer("First")).await.unwrap();
        repo.create(&customer("Second")).await.unwrap();

        let customers = repo.list().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Second");
        assert_eq!(customers[1].name, "First");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let db = test_db().await;
        let err = db.customers().create(&customer(" ")).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }
}
