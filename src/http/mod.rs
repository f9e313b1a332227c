//! HTTP server module.
//!
//! Serves plain HTTP through `axum-server` so shutdown can be driven by a
//! shared [`axum_server::Handle`]:
//! - SIGTERM/SIGINT trigger a graceful shutdown with connection draining
//! - Tests hold the handle to learn the bound address and stop the server

mod server;
pub mod shutdown;

pub use server::{start_server, ServerError};
