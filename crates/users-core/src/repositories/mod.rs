//! Repository traits (ports)

pub mod user_repository;

pub use user_repository::UserRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_repository::MockUserRepository;
