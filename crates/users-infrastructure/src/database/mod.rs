//! Database module (MySQL adapters)

pub mod connection;
pub mod mysql;

pub use connection::{create_pool, verify_connection};
pub use mysql::MySqlUserRepository;
