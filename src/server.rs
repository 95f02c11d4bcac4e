//! HTTP server assembly: CORS, body limit, request tracing, docs, routes.

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerSettings;
use crate::docs::ApiDoc;
use crate::routes::product_routes;
use crate::state::AppState;

/// JSON bodies above this size are rejected before parsing.
const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Build the full application router. Origins outside the configured list get
/// no CORS grant headers, so browsers reject the response.
pub fn app(state: AppState, settings: &ServerSettings) -> Router {
    let origins: Vec<_> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/products", product_routes(state))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}

/// Bind and serve until the process is stopped.
pub async fn serve(router: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await
}
