use axum::{
    extract::{multipart::MultipartError, Multipart, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};

use crate::graph::Cost;
use crate::report::PathReport;
use crate::service::RouteService;
use crate::web::models::*;

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub service: RouteService,
}

impl AppState {
    pub fn new(service: RouteService) -> Self {
        Self { service }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/custo", post(compute_costs))
        .route("/custo/", post(compute_costs))
        .route("/api/health", get(health_check))
}

/// Compute the cheapest path from `verticeInicial` to every vertex of the uploaded graph
pub async fn compute_costs(
    State(state): State<AppState>,
    Query(query): Query<CostQuery>,
    multipart: Option<Multipart>,
) -> Result<Json<PathReport<Cost>>, ApiError> {
    // A request that is not multipart at all counts as a missing upload.
    let upload = match multipart {
        Some(multipart) => read_graph_upload(multipart).await?,
        None => None,
    };
    let start = query.start.unwrap_or_default();
    let service = state.service;

    info!(
        "POST /custo: start={:?}, upload={}",
        start,
        upload.as_ref().map_or("none".to_string(), |bytes| format!("{} bytes", bytes.len()))
    );

    // Decoding and search are CPU-bound; keep them off the async workers.
    let outcome =
        tokio::task::spawn_blocking(move || service.find_routes(upload.as_deref(), &start)).await;

    let result = match outcome {
        Ok(done) => done,
        Err(err) => {
            warn!("route computation task failed: {}", err);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", "Route computation failed")),
            ));
        }
    };

    // Clients render every listed path, so unreachable targets are left out.
    result
        .map(|report| Json(report.reachable_only()))
        .map_err(|err| ErrorResponse::from_error(&err))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Pulls the graph file out of the multipart body; `None` if no such field was sent
async fn read_graph_upload(mut multipart: Multipart) -> Result<Option<Vec<u8>>, ApiError> {
    let bad_upload = |err: MultipartError| {
        let status = err.status();
        let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "payload_too_large"
        } else {
            "invalid_upload"
        };
        (
            status,
            Json(ErrorResponse::new(
                code,
                format!("Could not read uploaded graph file: {}", err.body_text()),
            )),
        )
    };

    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        let is_graph = matches!(field.name(), Some(GRAPH_FIELD) | Some(GRAPH_FIELD_ALIAS));
        if is_graph {
            let bytes = field.bytes().await.map_err(bad_upload)?;
            return Ok(Some(bytes.to_vec()));
        }
    }

    Ok(None)
}
