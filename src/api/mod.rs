//! HTTP API module for the portal engines.
//!
//! This module provides the REST API endpoints for document pagination,
//! attendance classification, and salary statement derivation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PaginateRequest, SheetRequest, StatementRequest, UserRequest};
pub use response::{ApiError, DayCell, PaginateResponse, SheetResponse};
pub use state::AppState;
