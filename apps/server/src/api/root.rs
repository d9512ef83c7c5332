use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::main_lib::AppState;

/// Liveness greeting.
async fn hello() -> &'static str {
    "Hello, Students!"
}

/// Static author info. Served as-is; non-ASCII characters are not escaped.
async fn about() -> Json<Value> {
    Json(json!({
        "name": "Вадим",
        "surname": "Шиховцов",
        "email": "vshihovcov@specialist.ru",
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(hello))
        .route("/about", get(about))
}
