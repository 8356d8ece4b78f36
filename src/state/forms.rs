//! Form inputs and the validation that turns them into request bodies.
//!
//! Validation failures are [`ApiError::Validation`]s and never reach the network.

use chrono::NaiveDate;

use crate::{
    api::ApiError,
    model::{
        checklist::CreateChecklistStepDto,
        document::DocumentReviewDto,
        program::{ApplyTemplateDto, CreateProgramDto, ProgramType},
        request::{CreateStudentRequestDto, RecipientType, RequestReviewDto},
    },
};

/// Reviewer name recorded on document reviews
pub const REVIEWER: &str = "Admin";

fn blank_to_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn required(value: &str, message: &str) -> Result<String, ApiError> {
    blank_to_none(value).ok_or_else(|| ApiError::validation(message))
}

/// "Add a new checklist step"
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepForm {
    pub title: String,
    pub category: String,
    pub description: String,
}

impl StepForm {
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// New steps are required and appended after the `existing_steps` already defined.
    pub fn build(
        &self,
        program_id: &str,
        existing_steps: usize,
    ) -> Result<CreateChecklistStepDto, ApiError> {
        Ok(CreateChecklistStepDto {
            program_id: program_id.to_string(),
            title: required(&self.title, "Step title is required")?,
            description: blank_to_none(&self.description),
            category: blank_to_none(&self.category),
            is_required: true,
            sort_order: existing_steps as i32 + 1,
        })
    }
}

/// "Create a program"
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramForm {
    pub name: String,
    pub term_label: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub term_start_date: String,
    pub program_type: ProgramType,
}

impl ProgramForm {
    pub fn build(&self, institution_id: &str) -> Result<CreateProgramDto, ApiError> {
        let name = required(&self.name, "Program name is required")?;
        let term_label = required(&self.term_label, "Term label is required")?;
        let term_start_date =
            NaiveDate::parse_from_str(self.term_start_date.trim(), "%Y-%m-%d").map_err(|_| {
                ApiError::validation("Term start date must be a valid date (YYYY-MM-DD)")
            })?;

        Ok(CreateProgramDto {
            institution_id: institution_id.to_string(),
            name,
            term_label,
            term_start_date,
            program_type: self.program_type,
        })
    }
}

pub fn template_request(template: &str) -> Result<ApplyTemplateDto, ApiError> {
    Ok(ApplyTemplateDto {
        template: required(template, "Choose a template to apply")?,
    })
}

pub fn document_review(notes: &str) -> DocumentReviewDto {
    DocumentReviewDto {
        reviewer: REVIEWER.to_string(),
        reviewer_notes: blank_to_none(notes),
    }
}

pub fn request_review(notes: &str) -> RequestReviewDto {
    RequestReviewDto {
        admin_notes: blank_to_none(notes),
    }
}

/// Student "Submit a request"
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub request_type: String,
    pub description: String,
    pub recipient_type: RecipientType,
}

impl RequestForm {
    pub fn build(&self) -> Result<CreateStudentRequestDto, ApiError> {
        Ok(CreateStudentRequestDto {
            request_type: required(&self.request_type, "Request type is required")?,
            description: required(&self.description, "Describe what you need")?,
            recipient_type: self.recipient_type,
        })
    }
}
