//! Infrastructure adapters: the HTTP client and runtime bootstrap.

pub mod api_client;
pub mod error;
pub mod telemetry;
