use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{timestamp, Resource};

/// Side of a conversation a message was written by, or that is reading it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SenderType {
    Student,
    Admin,
}

impl SenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Admin => "ADMIN",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationDto {
    pub id: String,
    pub student_id: String,
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub sender_type: SenderType,
    pub sender_id: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(deserialize_with = "timestamp::required")]
    pub created_at: DateTime<Utc>,
}

impl Resource for MessageDto {
    const NAME: &'static str = "messages";
    const ENVELOPE: &'static str = "messages";
}

/// Body of `POST /api/conversations/{id}/messages`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessageDto {
    pub sender_type: SenderType,
    pub sender_id: String,
    pub content: String,
}
