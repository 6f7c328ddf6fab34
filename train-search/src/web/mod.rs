//! Web layer for train search.
//!
//! Serves the dashboard and results pages, plus JSON endpoints for
//! autocomplete and recent searches.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{
    API_UNAVAILABLE, AppError, INVALID_STATIONS, NO_TRAINS_FOUND, NO_TRAINS_MATCH, PageError,
    create_router,
};
pub use state::AppState;
pub use templates::*;
