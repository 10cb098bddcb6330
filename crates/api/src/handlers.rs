pub mod customers;
pub mod health;
pub mod logo;
pub mod products;
pub mod quotation_items;
pub mod quotations;

use crate::error::ApiError;
use serde::Deserialize;

/// Query parameters shared by the paginated list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub company_id: Option<i32>,
    pub page: Option<i64>,
}

/// Query parameters for scoped single-row endpoints (get/delete).
#[derive(Debug, Deserialize)]
pub struct ScopeQuery {
    pub company_id: Option<i32>,
}

/// Presence-only check on the tenant key; every route requires it.
pub fn require_company_id(company_id: Option<i32>) -> Result<i32, ApiError> {
    company_id.ok_or_else(ApiError::company_id_required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_company_id_is_rejected() {
        assert!(require_company_id(None).is_err());
        assert_eq!(require_company_id(Some(7)).unwrap(), 7);
    }
}
