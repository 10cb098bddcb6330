use crate::error::{DatabaseError, Result};
use qms_models::{Customer, NewCustomer, UpdateCustomer};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new customer and return the stored row.
    pub async fn create(&self, new_customer: &NewCustomer) -> Result<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, phone, address, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new_customer.name)
        .bind(&new_customer.email)
        .bind(&new_customer.phone)
        .bind(&new_customer.address)
        .bind(new_customer.company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    /// List one page of a company's customers, newest first.
    pub async fn list(&self, company_id: i32, limit: i64, offset: i64) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE company_id = $1
            ORDER BY id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Count a company's customers.
    pub async fn count(&self, company_id: i32) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM customers WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Find a customer scoped by id and company.
    pub async fn find(&self, id: i32, company_id: i32) -> Result<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Customer not found"))?;

        Ok(customer)
    }

    /// Overwrite every editable column, scoped by id and company. The
    /// company filter doubles as the cross-tenant guard.
    pub async fn update(&self, id: i32, update: &UpdateCustomer) -> Result<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $1, email = $2, phone = $3, address = $4, updated_at = NOW()
            WHERE id = $5 AND company_id = $6
            RETURNING *
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(&update.address)
        .bind(id)
        .bind(update.company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Customer not found or does not belong to the specified company",
            )
        })?;

        Ok(customer)
    }

    /// Delete scoped by id and company, returning the deleted row.
    pub async fn delete(&self, id: i32, company_id: i32) -> Result<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            "DELETE FROM customers WHERE id = $1 AND company_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Customer not found or does not belong to the specified company",
            )
        })?;

        Ok(customer)
    }
}
