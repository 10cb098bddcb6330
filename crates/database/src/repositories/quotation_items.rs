use crate::error::{DatabaseError, Result};
use qms_models::{NewQuotationItem, QuotationItem, QuotationItemLine, UpdateQuotationItem};
use sqlx::PgPool;

#[derive(Clone)]
pub struct QuotationItemRepository {
    pool: PgPool,
}

impl QuotationItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_item: &NewQuotationItem) -> Result<QuotationItem> {
        let item = sqlx::query_as::<_, QuotationItem>(
            r#"
            INSERT INTO quotation_items
                (quotation_id, name, quantity, description, unit_price, company_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new_item.quotation_id)
        .bind(&new_item.name)
        .bind(new_item.quantity)
        .bind(&new_item.description)
        .bind(new_item.unit_price)
        .bind(new_item.company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    /// Every line of a quotation with its computed total. Not paginated;
    /// storage order.
    pub async fn list_for_quotation(
        &self,
        quotation_id: i32,
        company_id: i32,
    ) -> Result<Vec<QuotationItemLine>> {
        let lines = sqlx::query_as::<_, QuotationItemLine>(
            r#"
            SELECT
                qi.id AS item_id,
                qi.quantity,
                qi.name AS product_name,
                qi.unit_price,
                qi.description,
                (qi.quantity * qi.unit_price) AS total_price
            FROM quotation_items qi
            WHERE qi.quotation_id = $1 AND qi.company_id = $2
            "#,
        )
        .bind(quotation_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    pub async fn find(&self, id: i32, company_id: i32) -> Result<QuotationItem> {
        let item = sqlx::query_as::<_, QuotationItem>(
            "SELECT * FROM quotation_items WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Quotation item not found"))?;

        Ok(item)
    }

    pub async fn update(&self, id: i32, update: &UpdateQuotationItem) -> Result<QuotationItem> {
        let item = sqlx::query_as::<_, QuotationItem>(
            r#"
            UPDATE quotation_items
            SET quotation_id = $1, name = $2, quantity = $3, description = $4,
                unit_price = $5, updated_at = NOW()
            WHERE id = $6 AND company_id = $7
            RETURNING *
            "#,
        )
        .bind(update.quotation_id)
        .bind(&update.name)
        .bind(update.quantity)
        .bind(&update.description)
        .bind(update.unit_price)
        .bind(id)
        .bind(update.company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Quotation item not found or does not belong to the specified company",
            )
        })?;

        Ok(item)
    }

    pub async fn delete(&self, id: i32, company_id: i32) -> Result<QuotationItem> {
        let item = sqlx::query_as::<_, QuotationItem>(
            "DELETE FROM quotation_items WHERE id = $1 AND company_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::not_found(
                "Quotation item not found or does not belong to the specified company",
            )
        })?;

        Ok(item)
    }
}
