use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    brackets::post_bracket,
    snapshots::{get_division_bracket, list_divisions, list_snapshots},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/bracket", post(post_bracket))
        .route("/api/snapshots", get(list_snapshots))
        .route("/api/snapshots/:key/divisions", get(list_divisions))
        .route("/api/snapshots/:key/divisions/:division/bracket", get(get_division_bracket))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::settings::AppConfig;
    use crate::domain::{DivisionSnapshot, Match, TournamentSnapshot};
    use crate::services::bracket::BracketService;
    use crate::store::SnapshotStore;

    fn test_state(name: &str) -> (Arc<AppState>, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "fight_bracket_api_{}_{}",
            name,
            std::process::id()
        ));
        let store = SnapshotStore::new(&dir).unwrap();
        let state = Arc::new(AppState {
            store,
            brackets: BracketService::new(AppConfig::new()),
        });
        (state, dir)
    }

    fn seeded(red: u32, blue: u32, is_final: bool) -> Match {
        let mut m = Match {
            is_final,
            ..Default::default()
        };
        m.red.seed = Some(red);
        m.blue.seed = Some(blue);
        m
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_bracket() {
        let (state, dir) = test_state("post");
        let body = r#"{
            "matches": [
                {"final": true, "red": {"seed": 1}, "blue": {"seed": 2}},
                {"red": {"seed": 1}, "blue": {"seed": 3}},
                {"red": {"seed": "2"}, "blue": {"seed": 4}}
            ]
        }"#;

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bracket")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["order"], "earliestFirst");
        assert_eq!(json["resolvable"], true);
        assert_eq!(json["levels"].as_array().unwrap().len(), 2);
        assert_eq!(json["levels"][1][0]["final"], true);
        assert_eq!(json["stats"]["byes"], 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_stored_division_bracket() {
        let (state, dir) = test_state("stored");
        let snapshot = TournamentSnapshot {
            name: "Spring Open".to_string(),
            divisions: vec![DivisionSnapshot::new(
                "adult-black",
                vec![seeded(1, 2, true), seeded(1, 3, false), seeded(2, 4, false)],
            )],
        };
        state.store.save("spring", &snapshot).unwrap();
        let app = create_router(state);

        let divisions = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/snapshots/spring/divisions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(divisions.status(), StatusCode::OK);
        let json = body_json(divisions).await;
        assert_eq!(json[0]["name"], "adult-black");
        assert_eq!(json[0]["mode"], "heuristic");

        let bracket = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/snapshots/spring/divisions/adult-black/bracket?lenient=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(bracket.status(), StatusCode::OK);
        assert_eq!(body_json(bracket).await["stats"]["matches"], 3);

        let missing = app
            .oneshot(
                Request::builder()
                    .uri("/api/snapshots/spring/divisions/juvenile/bracket")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_unknown_snapshot() {
        let (state, dir) = test_state("unknown");

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/snapshots/nothing/divisions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
