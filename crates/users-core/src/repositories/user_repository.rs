//! User repository trait (port)

use async_trait::async_trait;
use crate::domain::{User, UserDetails};
use crate::error::DomainError;

/// One statement per call. Ids are passed through as received so the store
/// applies its own coercion.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All rows in the store's natural order.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Returns the store-assigned id.
    async fn create(&self, details: &UserDetails) -> Result<u64, DomainError>;

    /// Overwrites all fields. Returns the affected-row count.
    async fn replace(&self, id: &str, details: &UserDetails) -> Result<u64, DomainError>;

    /// Returns the affected-row count.
    async fn delete(&self, id: &str) -> Result<u64, DomainError>;

    /// Round-trips a trivial statement to check connectivity.
    async fn ping(&self) -> Result<(), DomainError>;
}
