use crate::error::ApiError;
use crate::handlers::{require_company_id, ListQuery, ScopeQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use qms_models::{NewProduct, Page, PageParams, Product, UpdateProduct};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub unit_price: f64,
    pub company_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct DeletedProduct {
    pub message: String,
    pub product: Product,
}

/// POST /api/products
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let product = state
        .products
        .create(&NewProduct {
            name: payload.name,
            description: payload.description,
            unit_price: payload.unit_price,
            company_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products?company_id=1&page=1
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let params = PageParams::new(query.page);

    let total_records = state.products.count(company_id).await?;
    let products = state
        .products
        .list(company_id, params.limit(), params.offset())
        .await?;

    Ok(Json(Page::new(products, params.page, total_records)))
}

/// GET /api/products/:id?company_id=1
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<Product>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let product = state.products.find(id, company_id).await?;
    Ok(Json(product))
}

/// PUT /api/products/:id
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, ApiError> {
    let company_id = require_company_id(payload.company_id)?;

    let product = state
        .products
        .update(
            id,
            &UpdateProduct {
                name: payload.name,
                description: payload.description,
                unit_price: payload.unit_price,
                company_id,
            },
        )
        .await?;

    Ok(Json(product))
}

/// DELETE /api/products/:id?company_id=1
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<DeletedProduct>, ApiError> {
    let company_id = require_company_id(query.company_id)?;
    let product = state.products.delete(id, company_id).await?;

    Ok(Json(DeletedProduct {
        message: "Product deleted".to_string(),
        product,
    }))
}
