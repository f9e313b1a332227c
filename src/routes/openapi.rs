//! OpenAPI document for the public routes.

use utoipa::OpenApi;

use super::health::{self, HealthResponse};
use super::root::{self, MessageResponse};

/// Path serving the JSON document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the interactive docs UI.
pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(root::index, health::health),
    components(schemas(MessageResponse, HealthResponse)),
    tags(
        (name = "greeting", description = "Service greeting"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
