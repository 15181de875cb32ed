//! Axum route handlers for the product catalog API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use catalog_core::{Product, ProductDraft};

use crate::error::GatewayError;
use crate::middleware::{log_request, require_api_key, validate_product_body};
use crate::state::SharedState;

// ── Request / response types ──────────────────────────────────────────────────

/// Default page number when none (or an unparseable one) is supplied.
const DEFAULT_PAGE: i64 = 1;
/// Default page size when none (or an unparseable one) is supplied.
const DEFAULT_LIMIT: i64 = 5;

/// Query parameters accepted by the listing endpoint.
///
/// `page` and `limit` arrive as raw strings so malformed values can degrade
/// to the defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of catalog results.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    /// Number of records matching the filters, before pagination.
    pub total: usize,
    /// Echo of the coerced page number.
    pub page: i64,
    /// Echo of the coerced page size.
    pub limit: i64,
    /// The page slice itself.
    pub data: Vec<Product>,
}

fn coerce(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the application router with the given shared state.
///
/// Mutating routes sit behind the API-key stage; create and update
/// additionally pass through body validation. Reads are open.
pub fn create_router(state: SharedState) -> Router {
    let public = Router::new()
        .route("/", get(welcome))
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/stats/category", get(category_stats));

    let validated = Router::new()
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", put(update_product))
        .route_layer(middleware::from_fn(validate_product_body));

    let mutating = validated
        .merge(Router::new().route("/api/products/{id}", delete(delete_product)))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    public
        .merge(mutating)
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — welcome banner.
pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Visit /api/products to see all products."
}

/// `GET /api/products` — list with optional filters and pagination.
pub async fn list_products(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Json<ProductPage> {
    let page = coerce(params.page.as_deref(), DEFAULT_PAGE);
    let limit = coerce(params.limit.as_deref(), DEFAULT_LIMIT);
    let (total, data) = state.store.query(
        params.category.as_deref(),
        params.search.as_deref(),
        page,
        limit,
    );
    Json(ProductPage {
        total,
        page,
        limit,
        data,
    })
}

/// `GET /api/products/:id` — fetch a single record.
///
/// # Errors
/// Returns [`GatewayError::ProductNotFound`] if the id is not in the store.
pub async fn get_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, GatewayError> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or(GatewayError::ProductNotFound)
}

/// `POST /api/products` — create a record from a validated draft.
pub async fn create_product(
    State(state): State<SharedState>,
    Json(draft): Json<ProductDraft>,
) -> impl IntoResponse {
    let product = state.store.insert(draft);
    (StatusCode::CREATED, Json(product))
}

/// `PUT /api/products/:id` — replace a record's business fields.
///
/// # Errors
/// Returns [`GatewayError::ProductNotFound`] if the id is not in the store.
pub async fn update_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, GatewayError> {
    state
        .store
        .update(&id, draft)
        .map(Json)
        .ok_or(GatewayError::ProductNotFound)
}

/// `DELETE /api/products/:id` — remove a record.
///
/// # Errors
/// Returns [`GatewayError::ProductNotFound`] if the id is not in the store.
pub async fn delete_product(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    if !state.store.remove(&id) {
        return Err(GatewayError::ProductNotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/products/stats/category` — product counts per category.
///
/// Computed over the full store, ignoring any list filters; category names
/// are grouping keys verbatim.
pub async fn category_stats(State(state): State<SharedState>) -> Json<IndexMap<String, usize>> {
    Json(state.store.category_counts())
}
