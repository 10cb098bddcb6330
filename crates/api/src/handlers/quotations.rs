use crate::error::ApiError;
use crate::handlers::{require_company_id, ListQuery, ScopeQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use qms_models::{
    NewQuotation, Page, PageParams, Quotation, QuotationDetail, QuotationSummary,
    UpdateQuotation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create body. `quote_number` is never accepted here; the server
/// generates it at insert time.
#[derive(Debug, Deserialize)]
pub struct CreateQuotationPayload {
    pub customer_id: i32,
    pub quote_date: NaiveDate,
    pub status: String,
    pub company_id: Option<i32>,
}

/// Update body. Unlike create, the client supplies `quote_number`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuotationPayload {
    pub quote_number: String,
    pub customer_id: i32,
    pub quote_date: NaiveDate,
    pub status: String,
    pub company_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuotation {
    pub message: String,
    pub quotation: Quotation,
}

/// POST /api/quotations
pub async fn create_quotation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateQuotationPayload>,
) -> Result<(StatusCode, Json<Quotation>), ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let quotation = state
        .quotations
        .create(&NewQuotation {
            customer_id: payload.customer_id,
            quote_date: payload.quote_date,
            status: payload.status,
            company_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(quotation)))
}

/// GET /api/quotations?company_id=1&page=1
pub async fn list_quotations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<QuotationSummary>>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let params = PageParams::new(query.page);

    let total_records = state.quotations.count(company_id).await?;
    let quotations = state
        .quotations
        .list(company_id, params.limit(), params.offset())
        .await?;

    Ok(Json(Page::new(quotations, params.page, total_records)))
}

/// GET /api/quotations/:id?company_id=1
pub async fn get_quotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<QuotationDetail>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let quotation = state.quotations.find(id, company_id).await?;
    Ok(Json(quotation))
}

/// PUT /api/quotations/:id
pub async fn update_quotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuotationPayload>,
) -> Result<Json<Quotation>, ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let quotation = state
        .quotations
        .update(
            id,
            &UpdateQuotation {
                quote_number: payload.quote_number,
                customer_id: payload.customer_id,
                quote_date: payload.quote_date,
                status: payload.status,
                company_id,
            },
        )
        .await?;

    Ok(Json(quotation))
}

/// DELETE /api/quotations/:id?company_id=1
pub async fn delete_quotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DeletedQuotation>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let quotation = state.quotations.delete(id, company_id).await?;

    Ok(Json(DeletedQuotation {
        message: "Quotation deleted".to_string(),
        quotation,
    }))
}
