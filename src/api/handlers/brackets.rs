use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{BracketRequest, BracketResponse};
use crate::domain::DivisionSnapshot;

/// Builds a bracket from a match list supplied by the caller
pub async fn post_bracket(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BracketRequest>,
) -> impl IntoResponse {
    let division = DivisionSnapshot::new("request", request.matches);
    let bracket = state
        .brackets
        .build(&division, request.mode, request.allow_date_order_fallback);

    Json(BracketResponse::from(bracket)).into_response()
}
