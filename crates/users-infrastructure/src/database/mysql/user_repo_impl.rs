// ============================================================================
// Users Infrastructure - MySQL User Repository
// File: crates/users-infrastructure/src/database/mysql/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};
use tracing::{debug, info};

use users_core::domain::{User, UserDetails};
use users_core::error::DomainError;
use users_core::repositories::UserRepository;

#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub gender: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            address: row.address,
            gender: row.gender,
        }
    }
}

fn database_error(e: sqlx::Error) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, address, gender FROM newuser"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        debug!("Fetched {} users", rows.len());
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, address, gender FROM newuser WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, details: &UserDetails) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO newuser (name, address, gender) VALUES (?, ?, ?)"
        )
        .bind(&details.name)
        .bind(&details.address)
        .bind(&details.gender)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        let id = result.last_insert_id();
        info!("User created successfully: {}", id);
        Ok(id)
    }

    async fn replace(&self, id: &str, details: &UserDetails) -> Result<u64, DomainError> {
        // sqlx negotiates CLIENT_FOUND_ROWS, so an unchanged row still counts as matched
        let result = sqlx::query(
            "UPDATE newuser SET name = ?, address = ?, gender = ? WHERE id = ?"
        )
        .bind(&details.name)
        .bind(&details.address)
        .bind(&details.gender)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM newuser WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        crate::database::connection::verify_connection(&self.pool)
            .await
            .map_err(database_error)
    }
}
