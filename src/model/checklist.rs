use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{review::ReviewStatus, timestamp, Resource};

/// Template step defined once per program
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistStepDto {
    pub id: String,
    pub program_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl Resource for ChecklistStepDto {
    const NAME: &'static str = "checklist";
    const ENVELOPE: &'static str = "steps";
}

/// Body of `POST /api/program-checklist`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateChecklistStepDto {
    pub program_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub is_required: bool,
    pub sort_order: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum ItemStatus {
    #[default]
    Pending,
    Done,
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DONE" => Self::Done,
            _ => Self::Pending,
        }
    }
}

/// A checklist step as seen by one student
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentChecklistItemDto {
    pub checklist_step_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub requires_document: bool,
    #[serde(default)]
    pub has_document: bool,
    #[serde(default)]
    pub review_status: Option<ReviewStatus>,
}

impl StudentChecklistItemDto {
    pub fn is_done(&self) -> bool {
        self.status == ItemStatus::Done
    }
}

impl Resource for StudentChecklistItemDto {
    const NAME: &'static str = "checklist";
    const ENVELOPE: &'static str = "items";
}

/// Body of `POST /api/student-checklist/mark`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkStepDto {
    pub student_id: String,
    pub checklist_step_id: String,
    pub status: ItemStatus,
}
