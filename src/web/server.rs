use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use log::{info, warn};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;
use crate::service::RouteService;
use crate::web::api::{create_router, AppState};

/// Start the web server with default configuration on the given port
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Build the application with its middleware, ready to serve
pub fn build_app(config: &ServerConfig) -> Router {
    let service = RouteService::new().with_strict(config.strict_parsing);

    let mut app = Router::new()
        .merge(create_router())
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(AppState::new(service));

    if config.enable_cors {
        app = app.layer(cors_layer(&config.cors_origins));
    }

    app
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::new(config.host, config.port);
    info!("route cost server listening on http://{}", addr);
    info!("POST /custo?verticeInicial=<letter> with multipart field 'arquivoGrafo'");
    info!(
        "CORS enabled: {}, strict parsing: {}, upload limit: {} bytes",
        config.enable_cors, config.strict_parsing, config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
