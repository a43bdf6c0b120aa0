//! Web layer for the crossing closure server.
//!
//! Provides the closures API endpoint and serves the static front end.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
