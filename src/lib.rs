//! hello-service: a greeting and liveness HTTP service.
//!
//! `GET /` answers `{"message": "Hello, World!"}` and `GET /health` answers
//! `{"status": "ok"}`. Everything else is configuration, logging and server
//! lifecycle around those two routes.

pub mod config;
pub mod error;
pub mod greeting;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
