use serde::{Deserialize, Serialize};

use crate::model::Resource;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: String,
    pub program_id: String,
    #[serde(default)]
    pub institution_id: Option<String>,
    pub full_name: String,
    pub personal_email: String,
    #[serde(default)]
    pub status: String,
    /// `GREEN`, `YELLOW` or `RED`
    #[serde(default)]
    pub risk_level: String,
    /// Share of required checklist steps completed, computed by the backend
    #[serde(default)]
    pub progress_fraction: Option<f64>,
}

impl StudentDto {
    /// Progress rounded to a whole percentage for display.
    pub fn progress_percent(&self) -> Option<u8> {
        self.progress_fraction
            .map(|fraction| (fraction.clamp(0.0, 1.0) * 100.0).round() as u8)
    }
}

impl Resource for StudentDto {
    const NAME: &'static str = "students";
    const ENVELOPE: &'static str = "students";
}

/// One parsed line of the bulk student form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewStudentDto {
    pub full_name: String,
    pub personal_email: String,
    pub target_university: String,
}

/// Body of `POST /api/students/programs/{id}/bulk`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BulkStudentsDto {
    pub students: Vec<NewStudentDto>,
}
