//! HTTP surface of the directory.
//!
//! Handlers only translate between the wire and [`UserStore`]; every store
//! call is synchronous and holds the lock for a single step.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    error::ApiError,
    store::UserStore,
    user::{User, UserId},
};

pub type SharedStore = Arc<UserStore>;

/// Builds the router with `store` injected as shared state.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/getAllUser", get(list_users))
        .route("/createUser", post(create_user))
        .route("/getUser", get(get_user))
        .route("/updateUser", post(update_user).put(update_user))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Query pairs in request order.
type QueryPairs = Vec<(String, String)>;

async fn list_users(State(store): State<SharedStore>) -> Json<Vec<User>> {
    Json(store.list_all())
}

async fn create_user(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let candidate = decode_user(&body)?;
    let user = store.create(candidate);
    info!(id = user.id, "created user");
    Ok(Json(user))
}

async fn get_user(
    State(store): State<SharedStore>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(query)?;
    Ok(Json(store.get(id)?))
}

async fn update_user(
    State(store): State<SharedStore>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(query)?;
    let candidate = decode_user(&body)?;
    let user = store.update(id, candidate)?;
    info!(id, "updated user");
    Ok(Json(user))
}

/// Reads the first `id` pair and parses it exactly as sent, surrounding
/// whitespace included.
fn parse_id(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<UserId, ApiError> {
    let Query(pairs) = query.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    let raw = pairs
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
        .ok_or_else(|| ApiError::BadRequest("missing query parameter 'id'".into()))?;
    raw.parse()
        .map_err(|err| ApiError::BadRequest(format!("invalid id '{raw}': {err}")))
}

/// Decodes a request body as a JSON user. The `Content-Type` header is not
/// consulted.
fn decode_user(body: &[u8]) -> Result<User, ApiError> {
    serde_json::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}
