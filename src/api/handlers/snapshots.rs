use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use super::AppState;
use crate::api::models::{BracketParams, BracketResponse};
use crate::domain::{DivisionCollection, TournamentSnapshot};

pub async fn list_snapshots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.keys() {
        Ok(keys) => Json(keys).into_response(),
        Err(e) => {
            error!("Failed to list snapshots: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Store Error").into_response()
        }
    }
}

pub async fn list_divisions(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let snapshot = match load_snapshot(&state, &key) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let collection = DivisionCollection::from(snapshot);
    Json(state.brackets.summarize(&collection)).into_response()
}

pub async fn get_division_bracket(
    State(state): State<Arc<AppState>>,
    Path((key, division)): Path<(String, String)>,
    Query(params): Query<BracketParams>,
) -> impl IntoResponse {
    let snapshot = match load_snapshot(&state, &key) {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let collection = DivisionCollection::from(snapshot);
    let Some(division) = collection.get(&division) else {
        return (StatusCode::NOT_FOUND, format!("Unknown division: {}", division)).into_response();
    };

    let bracket = state
        .brackets
        .build(division, params.mode.unwrap_or_default(), params.lenient);

    Json(BracketResponse::from(bracket)).into_response()
}

fn load_snapshot(state: &AppState, key: &str) -> Result<TournamentSnapshot, Response> {
    match state.store.load(key) {
        Ok(Some(snapshot)) => Ok(snapshot),
        Ok(None) => {
            Err((StatusCode::NOT_FOUND, format!("Unknown snapshot: {}", key)).into_response())
        }
        Err(e) => {
            error!("Failed to load snapshot {}: {:?}", key, e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Store Error").into_response())
        }
    }
}
