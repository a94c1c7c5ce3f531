//! # Users Infrastructure
//! 
//! MySQL adapters for the users service.

pub mod database;

pub use database::{create_pool, verify_connection, MySqlUserRepository};
