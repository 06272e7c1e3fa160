//! HTTP routes for the Courtside API.
//!
//! Thin plumbing over [`LookupOrchestrator`]: parameter binding, status-code
//! mapping, and a health probe. All lookup semantics live in the library.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use courtside::telemetry::MetricsSnapshot;
use courtside::{LookupError, LookupOrchestrator, SearchResponse};

/// Shared application state: the lookup pipeline.
pub type SharedLookup = Arc<LookupOrchestrator>;

/// Build the API router.
pub fn router(lookup: SharedLookup) -> Router {
    Router::new()
        .route("/api/tennismap/tenniscourts", get(nearby_tennis_courts))
        .route("/api/tennismap/metrics", get(metrics))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(lookup)
}

/// Query parameters for the nearby-courts endpoint.
///
/// Extra parameters (e.g. map bounding-box corners sent by the front end)
/// are accepted and ignored.
#[derive(Debug, Deserialize)]
struct NearbyQuery {
    lat: f64,
    lng: f64,
}

async fn nearby_tennis_courts(
    State(lookup): State<SharedLookup>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = lookup.find_nearby(query.lat, query.lng).await?;
    Ok(Json(response))
}

async fn metrics(State(lookup): State<SharedLookup>) -> Json<MetricsSnapshot> {
    Json(lookup.metrics_snapshot().unwrap_or_default())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Maps [`LookupError`] onto HTTP status codes.
///
/// Empty results is a 200 with an empty `results` array, never an error.
struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            LookupError::InvalidCoordinate { .. } => StatusCode::BAD_REQUEST,
            LookupError::Provider(_) => StatusCode::BAD_GATEWAY,
            LookupError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Lookup failed");
        }

        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use courtside::cache::MemoryCacheProvider;
    use courtside::provider::{
        BoxFuture, NearbySearch, ProviderError, SearchOutcome,
    };
    use courtside::store::MemoryPoiStore;
    use courtside::LookupConfig;

    struct NoopProvider;

    impl NearbySearch for NoopProvider {
        fn search(
            &self,
            _lat: f64,
            _lng: f64,
        ) -> BoxFuture<'_, Result<SearchOutcome, ProviderError>> {
            Box::pin(async { Err(ProviderError::Http("noop".to_string())) })
        }

        fn name(&self) -> &str {
            "noop"
        }
    }

    #[test]
    fn test_router_builds() {
        let lookup = Arc::new(LookupOrchestrator::new(
            LookupConfig::new("test-key"),
            Arc::new(MemoryPoiStore::new()),
            Arc::new(MemoryCacheProvider::new(1024, None)),
            Arc::new(NoopProvider),
        ));

        let _router = router(lookup);
    }

    #[test]
    fn test_invalid_coordinate_maps_to_bad_request() {
        let response =
            ApiError(LookupError::InvalidCoordinate { lat: 999.0, lng: 0.0 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_provider_error_maps_to_bad_gateway() {
        let response =
            ApiError(LookupError::Provider(ProviderError::Status { status: 503 })).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
