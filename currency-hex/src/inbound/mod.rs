//! Inbound Adapters
//!
//! - `tools` - MCP tool handler driving the rate service
//! - `server` - Axum HTTP server hosting the MCP endpoint

mod handlers;
mod server;
mod tools;

pub use server::{HttpServer, MCP_PATH};
pub use tools::CurrencyTools;
