use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Quotation {
    pub id: i32,
    pub quote_number: String,
    pub customer_id: i32,
    pub quote_date: NaiveDate,
    pub status: String,
    pub company_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `quote_number` is generated server-side at insert time and is not
/// client-suppliable on create (it is on update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuotation {
    pub customer_id: i32,
    pub quote_date: NaiveDate,
    pub status: String,
    pub company_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuotation {
    pub quote_number: String,
    pub customer_id: i32,
    pub quote_date: NaiveDate,
    pub status: String,
    pub company_id: i32,
}

/// List row: quotation joined to its customer for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuotationSummary {
    pub quotation_id: i32,
    pub quote_number: String,
    pub quote_date: NaiveDate,
    pub status: String,
    pub customer_name: String,
}

/// Detail row: summary plus the customer's contact columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuotationDetail {
    pub quotation_id: i32,
    pub quote_number: String,
    pub quote_date: NaiveDate,
    pub status: String,
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
