//! # Product Repository
//!
//! Catalog operations for products.
//!
//! Stock is mutated here only through full-record updates; the per-sale
//! stock decrement happens inside the invoice creation transaction
//! (`repository::invoice`), never through this repository.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use aurum_core::validation::validate_new_product;
use aurum_core::{NewProduct, Product};

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let id = repo.create(&new_product).await?;
/// let products = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products, newest first.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, category, weight, purity,
                   price, stock_quantity, created_at, updated_at
            FROM products
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - no such product
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, category, weight, purity,
                   price, stock_quantity, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns its generated id.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty name or negative price
    pub async fn create(&self, product: &NewProduct) -> DbResult<i64> {
        validate_new_product(product)?;

        debug!(name = %product.name, "Inserting product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                name, description, category, weight, purity,
                price, stock_quantity, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.weight)
        .bind(&product.purity)
        .bind(product.price)
        .bind(product.stock_quantity)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Updates all fields of an existing product and bumps `updated_at`.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty name or negative price
    /// * `DbError::NotFound` - no row with this id (zero rows affected)
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        validate_new_product(product)?;

        debug!(id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                category = ?4,
                weight = ?5,
                purity = ?6,
                price = ?7,
                stock_quantity = ?8,
                updated_at = ?9
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.weight)
        .bind(&product.purity)
        .bind(product.price)
        .bind(product.stock_quantity)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// Hard delete: historical invoice items and sales rows keep their
    /// (now dangling) product reference and simply render without product
    /// display fields.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts products (for diagnostics and dashboard tiles).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
