use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{review::ReviewStatus, timestamp, Resource};

/// Who a student request is addressed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum RecipientType {
    #[default]
    University,
    Ngo,
}

impl RecipientType {
    pub const ALL: [RecipientType; 2] = [RecipientType::University, RecipientType::Ngo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::University => "UNIVERSITY",
            Self::Ngo => "NGO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Ngo => "NGO sponsor",
        }
    }

    /// Parse the wire representation, as used by `<select>` values.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl From<String> for RecipientType {
    fn from(value: String) -> Self {
        Self::from_wire(&value).unwrap_or_default()
    }
}

/// Support ticket filed by a student
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRequestDto {
    pub id: String,
    pub student_id: String,
    pub request_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub recipient_type: RecipientType,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for StudentRequestDto {
    const NAME: &'static str = "requests";
    const ENVELOPE: &'static str = "requests";
}

/// Body of `POST /api/student/{id}/request`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateStudentRequestDto {
    pub request_type: String,
    pub description: String,
    pub recipient_type: RecipientType,
}

/// Body of `POST /api/admin/requests/{id}/approve` and `/reject`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestReviewDto {
    pub admin_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::RecipientType;

    #[test]
    fn unknown_recipient_reads_as_university() {
        let recipients: Vec<RecipientType> =
            serde_json::from_str(r#"["NGO", "EMBASSY"]"#).unwrap();

        assert_eq!(recipients, vec![RecipientType::Ngo, RecipientType::University]);
    }
}
