use crate::error::{DatabaseError, Result};
use qms_models::{
    NewQuotation, Quotation, QuotationDetail, QuotationSummary, UpdateQuotation,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuotationRepository {
    pool: PgPool,
}

impl QuotationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a quotation. `quote_number` comes from the server-side
    /// generator, never from the client.
    pub async fn create(&self, new_quotation: &NewQuotation) -> Result<Quotation> {
        let quotation = sqlx::query_as::<_, Quotation>(
            r#"
            INSERT INTO quotations (quote_number, customer_id, quote_date, status, company_id)
            VALUES (generate_quote_number(), $1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new_quotation.customer_id)
        .bind(new_quotation.quote_date)
        .bind(&new_quotation.status)
        .bind(new_quotation.company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(quotation)
    }

    /// One page of a company's quotations joined to the customer name,
    /// newest first.
    pub async fn list(
        &self,
        company_id: i32,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuotationSummary>> {
        let quotations = sqlx::query_as::<_, QuotationSummary>(
            r#"
            SELECT q.id AS quotation_id, q.quote_number, q.quote_date, q.status,
                   c.name AS customer_name
            FROM quotations q
            JOIN customers c ON q.customer_id = c.id
            WHERE q.company_id = $1
            ORDER BY q.id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(company_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotations)
    }

    pub async fn count(&self, company_id: i32) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM quotations WHERE company_id = $1")
                .bind(company_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Single quotation joined to the customer's contact columns.
    pub async fn find(&self, id: i32, company_id: i32) -> Result<QuotationDetail> {
        let quotation = sqlx::query_as::<_, QuotationDetail>(
            r#"
            SELECT q.id AS quotation_id, q.quote_number, q.quote_date, q.status,
                   c.name AS customer_name, c.email, c.phone, c.address
            FROM quotations q
            JOIN customers c ON q.customer_id = c.id
            WHERE q.id = $1 AND q.company_id = $2
            "#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Quotation not found"))?;

        Ok(quotation)
    }

    /// Full overwrite. Unlike create, the client supplies `quote_number`
    /// here; no uniqueness check is made.
    pub async fn update(&self, id: i32, update: &UpdateQuotation) -> Result<Quotation> {
        let quotation = sqlx::query_as::<_, Quotation>(
            r#"
            UPDATE quotations
            SET quote_number = $1, customer_id = $2, quote_date = $3, status = $4,
                updated_at = NOW()
            WHERE id = $5 AND company_id = $6
            RETURNING *
            "#,
        )
        .bind(&update.quote_number)
        .bind(update.customer_id)
        .bind(update.quote_date)
        .bind(&update.status)
        .bind(id)
        .bind(update.company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Quotation not found or does not belong to the specified company",
            )
        })?;

        Ok(quotation)
    }

    pub async fn delete(&self, id: i32, company_id: i32) -> Result<Quotation> {
        let quotation = sqlx::query_as::<_, Quotation>(
            "DELETE FROM quotations WHERE id = $1 AND company_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Quotation not found or does not belong to the specified company",
            )
        })?;

        Ok(quotation)
    }
}
