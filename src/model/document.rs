use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{review::ReviewStatus, timestamp, Resource};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentDocumentDto {
    pub id: String,
    pub file_name: String,
    pub public_url: String,
    #[serde(default)]
    pub reviewed_status: Option<ReviewStatus>,
    #[serde(default)]
    pub reviewer_notes: Option<String>,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub checklist_step_id: Option<String>,
    #[serde(default)]
    pub step_title: Option<String>,
    #[serde(default)]
    pub step_category: Option<String>,
}

impl StudentDocumentDto {
    /// Review status, treating a missing value as still pending.
    pub fn status(&self) -> ReviewStatus {
        self.reviewed_status.unwrap_or_default()
    }
}

impl Resource for StudentDocumentDto {
    const NAME: &'static str = "documents";
    const ENVELOPE: &'static str = "documents";
}

/// Body of `POST /api/admin/documents/{id}/approve` and `/reject`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentReviewDto {
    pub reviewer: String,
    pub reviewer_notes: Option<String>,
}

/// File selected for `POST /api/student-documents/upload`, sent as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentUpload {
    pub student_id: String,
    pub checklist_step_id: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
