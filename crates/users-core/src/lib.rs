//! # Users Core
//! 
//! Domain entity, validation and the repository port for the users service.

pub mod domain;
pub mod repositories;
pub mod error;

pub use domain::*;
pub use error::DomainError;
pub use repositories::UserRepository;
