//! HTTP route handlers.
//!
//! The greeting is constant and carries a public Cache-Control header; the
//! health probe is never cached. Unrouted paths and unsupported methods
//! answer with a JSON `detail` body, except that a routed path written with
//! an extra trailing slash is redirected (307) to its canonical form. The
//! OpenAPI document is served at `/openapi.json` with a Swagger UI at `/docs`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod openapi;
pub mod root;

use axum::{
    handler::Handler,
    http::{Method, Uri},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_ROOT};
use crate::error::AppError;
use crate::middleware::request_id_layer;
use openapi::{ApiDoc, DOCS_PATH, OPENAPI_PATH};

/// Paths that answer a trailing-slash variant with a redirect.
const REDIRECTABLE_PATHS: &[&str] = &["/", "/health", OPENAPI_PATH];

/// Creates the Axum router with all routes, fallbacks and cache headers.
pub fn create_router() -> Router {
    let root_routes = Router::new()
        .route("/", get_only(root::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ROOT),
        ));

    // Health check - always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get_only(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    // Serves both the docs UI and the JSON document
    let docs_routes = SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi());

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .merge(docs_routes)
        // Must follow the merges: only routes registered so far get the 405 body
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// GET route whose implicit HEAD answers 405.
fn get_only<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    get(handler).head(method_not_allowed)
}

async fn not_found(method: Method, uri: Uri) -> Response {
    if let Some(location) = slash_redirect(&uri) {
        tracing::debug!(%method, path = %uri.path(), %location, "Redirecting trailing slash");
        return Redirect::temporary(&location).into_response();
    }
    tracing::debug!(%method, path = %uri.path(), "No route matched");
    AppError::NotFound.into_response()
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "Method not allowed");
    AppError::MethodNotAllowed
}

/// Location for a path that differs from a routed one only by a trailing
/// slash, keeping the query string.
fn slash_redirect(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path == "/" {
        return None;
    }
    let alternate = match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => format!("{path}/"),
    };
    if !REDIRECTABLE_PATHS.contains(&alternate.as_str()) {
        return None;
    }
    Some(match uri.query() {
        Some(query) => format!("{alternate}?{query}"),
        None => alternate,
    })
}
