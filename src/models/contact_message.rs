use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Responded,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    /// Stamped once, on the first transition into `responded`.
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub response: String,
}

/// Public contact submission. Status, timestamps and response are forced by
/// the store, whatever the caller sends.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactMessageRequest {
    pub status: Option<MessageStatus>,
    pub response: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageStats {
    pub total: usize,
    pub pending: usize,
    pub responded: usize,
    pub closed: usize,
}
