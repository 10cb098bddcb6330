use crate::error::ApiError;
use crate::handlers::{require_company_id, ScopeQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use qms_models::{
    NewQuotationItem, QuotationItem, QuotationItemLine, UpdateQuotationItem,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct QuotationItemPayload {
    pub quotation_id: i32,
    pub name: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub unit_price: f64,
    pub company_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuotationItem {
    pub message: String,
    pub item: QuotationItem,
}

/// POST /api/quotation_items
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QuotationItemPayload>,
) -> Result<(StatusCode, Json<QuotationItem>), ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let item = state
        .quotation_items
        .create(&NewQuotationItem {
            quotation_id: payload.quotation_id,
            name: payload.name,
            quantity: payload.quantity,
            description: payload.description,
            unit_price: payload.unit_price,
            company_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/quotation_items/:quotation_id?company_id=1
///
/// Every line for the quotation with its computed `total_price`. Not
/// paginated; the path parameter is the quotation id, not an item id.
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Path(quotation_id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Vec<QuotationItemLine>>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let lines = state
        .quotation_items
        .list_for_quotation(quotation_id, company_id)
        .await?;
    Ok(Json(lines))
}

/// GET /api/quotation_items/item/:id?company_id=1
///
/// Single item by its own id. Lives under `/item` because the bare
/// `GET /:id` position is taken by the per-quotation listing.
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<QuotationItem>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let item = state.quotation_items.find(id, company_id).await?;
    Ok(Json(item))
}

/// PUT /api/quotation_items/:id
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<QuotationItemPayload>,
) -> Result<Json<QuotationItem>, ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let item = state
        .quotation_items
        .update(
            id,
            &UpdateQuotationItem {
                quotation_id: payload.quotation_id,
                name: payload.name,
                quantity: payload.quantity,
                description: payload.description,
                unit_price: payload.unit_price,
                company_id,
            },
        )
        .await?;

    Ok(Json(item))
}

/// DELETE /api/quotation_items/:id?company_id=1
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DeletedQuotationItem>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let item = state.quotation_items.delete(id, company_id).await?;

    Ok(Json(DeletedQuotationItem {
        message: "Quotation item deleted".to_string(),
        item,
    }))
}
