use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use route_cost::config::ServerConfig;
use route_cost::web::build_app;
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "route-cost-test-boundary";

fn app() -> Router {
    build_app(&ServerConfig::default())
}

fn multipart_body(field: &str, contents: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"grafo.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n{contents}\r\n--{b}--\r\n",
        b = BOUNDARY,
        field = field,
        contents = contents
    )
}

fn upload(uri: &str, field: &str, contents: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, contents)))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_costs_for_uploaded_graph() {
    let request = upload(
        "/custo?verticeInicial=A",
        "arquivoGrafo",
        "A: B1, C4\nB: C2, D5\nC: D1\nD:\nE:",
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "startNode": "A",
            "paths": [
                { "target": "B", "path": ["A", "B"], "cost": 1 },
                { "target": "C", "path": ["A", "B", "C"], "cost": 3 },
                { "target": "D", "path": ["A", "B", "C", "D"], "cost": 4 }
            ]
        })
    );
}

#[tokio::test]
async fn test_trailing_slash_and_file_alias() {
    let request = upload("/custo/?verticeInicial=B", "file", "A: B1\nB: A2");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["startNode"], "B");
    assert_eq!(body["paths"][0]["cost"], 2);
}

#[tokio::test]
async fn test_missing_file_field() {
    let request = upload("/custo?verticeInicial=A", "somethingElse", "A: B1");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing_input");
}

#[tokio::test]
async fn test_request_without_multipart_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/custo?verticeInicial=A")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing_input");
}

#[tokio::test]
async fn test_invalid_start_vertex() {
    for uri in ["/custo?verticeInicial=AB", "/custo?verticeInicial=3", "/custo"] {
        let (status, body) = send(app(), upload(uri, "arquivoGrafo", "A: B1")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"], "invalid_vertex", "{}", uri);
        assert!(body["detail"].as_str().unwrap().contains("single letter"));
    }
}

#[tokio::test]
async fn test_unknown_start_vertex() {
    let request = upload("/custo?verticeInicial=Z", "arquivoGrafo", "A: B1");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "source_not_found");
}

#[tokio::test]
async fn test_malformed_lines_are_skipped_by_default() {
    let request = upload("/custo?verticeInicial=A", "arquivoGrafo", "A: Bx, C3\nXY: Z1");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paths"], json!([{ "target": "C", "path": ["A", "C"], "cost": 3 }]));
}

#[tokio::test]
async fn test_strict_parsing_reports_diagnostics() {
    let config = ServerConfig {
        strict_parsing: true,
        ..Default::default()
    };
    let request = upload("/custo?verticeInicial=A", "arquivoGrafo", "A: Bx, C3\nXY: Z1");
    let (status, body) = send(build_app(&config), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "malformed_input");
    assert_eq!(
        body["diagnostics"],
        json!([
            { "line": 1, "kind": "invalid_token", "text": "Bx" },
            { "line": 2, "kind": "invalid_origin", "text": "XY: Z1" }
        ])
    );
}

#[tokio::test]
async fn test_upload_limit() {
    let config = ServerConfig {
        max_upload_bytes: 64,
        ..Default::default()
    };
    let big = "A: B1\n".repeat(100);
    let request = upload("/custo?verticeInicial=A", "arquivoGrafo", &big);
    let (status, body) = send(build_app(&config), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let config = ServerConfig {
        cors_origins: vec!["http://localhost:3000".to_string()],
        ..Default::default()
    };
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/custo")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = build_app(&config).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}
