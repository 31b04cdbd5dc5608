use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::graph::ParseDiagnostic;
use crate::Error;

/// Multipart field that carries the graph file
pub const GRAPH_FIELD: &str = "arquivoGrafo";
/// Alternative field name accepted for the graph file
pub const GRAPH_FIELD_ALIAS: &str = "file";

/// Query parameters of the cost endpoint
#[derive(Debug, Deserialize)]
pub struct CostQuery {
    #[serde(rename = "verticeInicial", default)]
    pub start: Option<String>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Vec<ParseDiagnostic>>,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn new(error: &str, detail: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            detail: detail.into(),
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<ParseDiagnostic>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Maps a library error to its status code and payload
    pub fn from_error(err: &Error) -> ApiError {
        let (status, code) = match err {
            Error::MissingInput => (StatusCode::BAD_REQUEST, "missing_input"),
            Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
            Error::MalformedInput { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "malformed_input"),
            Error::SourceNotFound(_) => (StatusCode::NOT_FOUND, "source_not_found"),
        };
        let body = ErrorResponse::new(code, err.to_string());
        let body = match err {
            Error::MalformedInput { diagnostics } => body.with_diagnostics(diagnostics.clone()),
            _ => body,
        };
        (status, Json(body))
    }
}
