//! Operational routes kept outside the bookstore prefixes.

use crate::store::Store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

impl Readiness {
    async fn of(store: &Store) -> (StatusCode, Self) {
        if store.ping().await {
            (StatusCode::OK, Readiness { status: "ok", database: "ok" })
        } else {
            tracing::warn!("readiness check failed: store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness {
                    status: "degraded",
                    database: "unavailable",
                },
            )
        }
    }
}

#[derive(Serialize)]
struct Build {
    name: &'static str,
    version: &'static str,
}

async fn ready(State(store): State<Store>) -> (StatusCode, Json<Readiness>) {
    let (status, body) = Readiness::of(&store).await;
    (status, Json(body))
}

/// GET /health, GET /ready (store ping, 503 when unreachable), GET /version.
pub fn common_routes(store: Store) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({ "status": "ok" })) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json(Build {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                })
            }),
        )
        .with_state(store)
}
