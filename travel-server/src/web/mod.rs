//! Web layer for the travel time estimator.
//!
//! Provides HTTP endpoints for browsing travelers and driving route sessions.

mod dto;
mod routes;
mod sessions;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use sessions::{SessionId, SessionStore, SharedSession, calculate_shared};
pub use state::AppState;
pub use templates::*;
