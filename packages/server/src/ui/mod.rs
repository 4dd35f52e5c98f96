//! UI layer: axum router, HTTP handlers, and the server runner.

pub mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
