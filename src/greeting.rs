//! Greeting provider.

/// The greeting returned by the root endpoint.
pub const GREETING: &str = "Hello, World!";

/// Returns the service greeting.
pub fn say_hello() -> &'static str {
    GREETING
}
