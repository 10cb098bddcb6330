use crate::error::{DatabaseError, Result};
use qms_models::{NewProduct, Product, UpdateProduct};
use sqlx::PgPool;

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_product: &NewProduct) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, unit_price, company_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.unit_price)
        .bind(new_product.company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    pub async fn list(&self, company_id: i32, limit: i64, offset: i64) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE company_id = $1 LIMIT $2 OFFSET $3",
        )
        .bind(company_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn count(&self, company_id: i32) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products WHERE company_id = $1")
            .bind(company_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    pub async fn find(&self, id: i32, company_id: i32) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Product not found"))?;

        Ok(product)
    }

    pub async fn update(&self, id: i32, update: &UpdateProduct) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, description = $2, unit_price = $3, updated_at = NOW()
            WHERE id = $4 AND company_id = $5
            RETURNING *
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.unit_price)
        .bind(id)
        .bind(update.company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Product not found or does not belong to the specified company",
            )
        })?;

        Ok(product)
    }

    pub async fn delete(&self, id: i32, company_id: i32) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            "DELETE FROM products WHERE id = $1 AND company_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Product not found or does not belong to the specified company",
            )
        })?;

        Ok(product)
    }
}
