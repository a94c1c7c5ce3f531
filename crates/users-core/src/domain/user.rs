//! User domain entity

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::DomainError;

/// A stored user row. `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub gender: String,
}

/// The writable fields of a user, all guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserDetails {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub address: String,

    #[validate(length(min = 1))]
    pub gender: String,
}

/// User fields as they arrive in a request body. Any JSON value is accepted
/// here; `into_details` decides which ones count as present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    pub name: Option<Value>,
    pub address: Option<Value>,
    pub gender: Option<Value>,
}

/// Text bound for a field, or `None` when the value is falsy
/// (`null`, `""`, `0`, `false`).
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::Bool(false) => None,
        // MySQL stores TRUE as 1
        Value::Bool(true) => Some("1".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().filter(|f| *f != 0.0).map(|f| f.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

impl UserDraft {
    pub fn into_details(self) -> Result<UserDetails, DomainError> {
        let details = match (
            field_text(self.name),
            field_text(self.address),
            field_text(self.gender),
        ) {
            (Some(name), Some(address), Some(gender)) => UserDetails {
                name,
                address,
                gender,
            },
            _ => {
                return Err(DomainError::ValidationError(
                    "name, address and gender are required".to_string(),
                ))
            }
        };

        details
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(details)
    }
}

#[cfg(any(test, feature = "mocks"))]
impl User {
    pub fn from_details(id: i64, details: UserDetails) -> Self {
        Self {
            id,
            name: details.name,
            address: details.address,
            gender: details.gender,
        }
    }
}
