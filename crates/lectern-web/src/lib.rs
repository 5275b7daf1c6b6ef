//! HTTP surface for Lectern
//!
//! Read-only JSON endpoints over a `LookupResolver`. `build_router` is what the
//! tests drive; `start_server` binds and serves it until ctrl-c.

pub mod routes;
pub mod server;

mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{build_router, start_server, ServerConfig};
pub use state::AppState;
