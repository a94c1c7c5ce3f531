//! Response bodies

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// `id` echoes the path segment verbatim, so it stays a string.
#[derive(Debug, Serialize)]
pub struct UserDeletedResponse {
    pub message: String,
    pub id: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}
