//! Root endpoint returning the service greeting.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::greeting::say_hello;

/// Body of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = MessageResponse)
    ),
    tag = "greeting"
)]
#[instrument(name = "root::index")]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: say_hello().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_returns_greeting() {
        let Json(body) = index().await;
        assert_eq!(body.message, "Hello, World!");
    }

    #[test]
    fn serializes_single_message_key() {
        let body = MessageResponse {
            message: "hi".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "message": "hi" })
        );
    }
}
