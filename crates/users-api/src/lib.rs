//! # Users API
//! 
//! HTTP handlers, response DTOs and the router for the users service.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
