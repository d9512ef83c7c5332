use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::{ApiJson, ApiPath, ApiResult};
use crate::main_lib::AppState;
use quoteshelf_core::quotes::{Quote, QuoteFilter, QuotePayload};

async fn list_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Quote>>> {
    let quotes = state.quote_service.get_quotes()?;
    Ok(Json(quotes))
}

async fn get_quote(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(id)?;
    Ok(Json(quote))
}

async fn count_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let count = state.quote_service.count_quotes()?;
    Ok(Json(json!({ "count": count })))
}

async fn random_quote(State(state): State<Arc<AppState>>) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.random_quote()?;
    Ok(Json(quote))
}

/// Exact-match filtering by `author`, `text`, and/or `rating` query
/// parameters; any other key is a 400.
async fn filter_quotes(
    Query(params): Query<Vec<(String, String)>>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Quote>>> {
    let pairs = params.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    let filter = QuoteFilter::from_query_pairs(pairs)?;
    let quotes = state.quote_service.filter_quotes(&filter)?;
    Ok(Json(quotes))
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<QuotePayload>,
) -> ApiResult<(StatusCode, Json<Quote>)> {
    payload.validate(false)?;
    let new_quote = payload.into_new_quote()?;
    let quote = state.quote_service.create_quote(new_quote).await?;
    Ok((StatusCode::CREATED, Json(quote)))
}

async fn update_quote(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<QuotePayload>,
) -> ApiResult<Json<Quote>> {
    payload.validate(true)?;
    // The service re-reads after writing, so unspecified fields come back
    // with their stored values rather than echoing the input
    let quote = state
        .quote_service
        .update_quote(id, payload.into_update())
        .await?;
    Ok(Json(quote))
}

async fn delete_quote(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Value>> {
    state.quote_service.delete_quote(id).await?;
    Ok(Json(json!({ "message": format!("Quote with id={id} deleted") })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/count", get(count_quotes))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/filter", get(filter_quotes))
        .route(
            "/quotes/{id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}
