use crate::error::ApiError;
use crate::handlers::{require_company_id, ListQuery, ScopeQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use qms_models::{Customer, NewCustomer, Page, PageParams, UpdateCustomer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body accepted by POST and PUT. `company_id` is checked for presence
/// before anything touches storage.
#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeletedCustomer {
    pub message: String,
    pub customer: Customer,
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let customer = state
        .customers
        .create(&NewCustomer {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            company_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers?company_id=1&page=1
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Customer>>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let params = PageParams::new(query.page);

    let total_records = state.customers.count(company_id).await?;
    let customers = state
        .customers
        .list(company_id, params.limit(), params.offset())
        .await?;

    Ok(Json(Page::new(customers, params.page, total_records)))
}

/// GET /api/customers/:id?company_id=1
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Customer>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let customer = state.customers.find(id, company_id).await?;
    Ok(Json(customer))
}

/// PUT /api/customers/:id
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<Customer>, ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let customer = state
        .customers
        .update(
            id,
            &UpdateCustomer {
                name: payload.name,
                email: payload.email,
                phone: payload.phone,
                address: payload.address,
                company_id,
            },
        )
        .await?;

    Ok(Json(customer))
}

/// DELETE /api/customers/:id?company_id=1
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DeletedCustomer>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let customer = state.customers.delete(id, company_id).await?;

    Ok(Json(DeletedCustomer {
        message: "Customer deleted".to_string(),
        customer,
    }))
}
