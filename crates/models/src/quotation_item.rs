use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuotationItem {
    pub id: i32,
    pub quotation_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuotationItem {
    pub quotation_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub company_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuotationItem {
    pub quotation_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub unit_price: f64,
    pub company_id: i32,
}

/// Read model for listing the lines of a quotation. `total_price` is
/// computed in SQL (`quantity * unit_price`), never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuotationItemLine {
    pub item_id: i32,
    pub quantity: i32,
    pub product_name: String,
    pub unit_price: f64,
    pub description: Option<String>,
    pub total_price: f64,
}

impl QuotationItemLine {
    pub fn line_total(quantity: i32, unit_price: f64) -> f64 {
        f64::from(quantity) * unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_quantity_by_unit_price() {
        assert_eq!(QuotationItemLine::line_total(5, 100.0), 500.0);
    }

    #[test]
    fn line_total_zero_quantity() {
        assert_eq!(QuotationItemLine::line_total(0, 99.5), 0.0);
    }
}
