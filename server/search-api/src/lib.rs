//! Search API — HTTP edge for the shopping fraud analysis pipeline.
//!
//! Routes: /api/search/{query}, /api/platforms, /api/health.

pub mod assemble;
pub mod handlers;
pub mod state;

pub use handlers::{health, platforms, search};
pub use state::AppState;
