use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{request::RecipientType, Resource};

/// Which kind of organization runs a program.
///
/// University programs review uploaded documents; NGO programs handle sponsor requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum ProgramType {
    #[default]
    University,
    Ngo,
}

impl ProgramType {
    pub const ALL: [ProgramType; 2] = [ProgramType::University, ProgramType::Ngo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::University => "UNIVERSITY",
            Self::Ngo => "NGO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::University => "University",
            Self::Ngo => "NGO",
        }
    }

    /// Parse the wire representation, as used by `<select>` values.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Requests addressed to this kind of organization.
    pub fn recipient(&self) -> RecipientType {
        match self {
            Self::University => RecipientType::University,
            Self::Ngo => RecipientType::Ngo,
        }
    }
}

/// Unknown program types are read as university programs.
impl From<String> for ProgramType {
    fn from(value: String) -> Self {
        Self::from_wire(&value).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgramDto {
    pub id: String,
    pub institution_id: String,
    pub name: String,
    pub term_label: String,
    #[serde(default)]
    pub term_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub program_type: ProgramType,
}

impl Resource for ProgramDto {
    const NAME: &'static str = "programs";
    const ENVELOPE: &'static str = "programs";
}

/// Body of `POST /api/programs`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateProgramDto {
    pub institution_id: String,
    pub name: String,
    pub term_label: String,
    pub term_start_date: NaiveDate,
    pub program_type: ProgramType,
}

/// Body of `POST /api/programs/{id}/apply-template`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplyTemplateDto {
    pub template: String,
}

#[cfg(test)]
mod tests {
    use super::{ProgramDto, ProgramType};

    #[test]
    fn unknown_program_type_falls_back_to_university() {
        let program: ProgramDto = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "institution_id": "1",
            "name": "Fall Cohort",
            "term_label": "Fall 2025",
            "term_start_date": "2025-09-01",
            "program_type": "EXCHANGE"
        }))
        .unwrap();

        assert_eq!(program.program_type, ProgramType::University);
    }

    #[test]
    fn ngo_program_type_is_read() {
        let program: ProgramDto = serde_json::from_value(serde_json::json!({
            "id": "p2",
            "institution_id": "1",
            "name": "Sponsored Cohort",
            "term_label": "Spring 2026",
            "program_type": "NGO"
        }))
        .unwrap();

        assert_eq!(program.program_type, ProgramType::Ngo);
        assert!(program.term_start_date.is_none());
    }
}
