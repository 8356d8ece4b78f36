mod admin_mutations;

use serde_json::json;

use crate::{
    api::ApiError,
    model::{
        checklist::{ChecklistStepDto, StudentChecklistItemDto},
        document::StudentDocumentDto,
        institution::InstitutionDto,
        message::{ConversationDto, MessageDto},
        program::ProgramDto,
        request::StudentRequestDto,
        student::StudentDto,
    },
};

fn institution(id: &str, name: &str) -> InstitutionDto {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

fn program(id: &str, institution_id: &str, program_type: &str) -> ProgramDto {
    serde_json::from_value(json!({
        "id": id,
        "institution_id": institution_id,
        "name": format!("Program {}", id),
        "term_label": "Fall 2025",
        "term_start_date": "2025-09-01",
        "program_type": program_type,
    }))
    .unwrap()
}

fn student(id: &str, program_id: &str) -> StudentDto {
    serde_json::from_value(json!({
        "id": id,
        "program_id": program_id,
        "full_name": format!("Student {}", id),
        "personal_email": format!("{}@example.com", id),
        "status": "ACTIVE",
        "risk_level": "GREEN",
    }))
    .unwrap()
}

fn step(id: &str, program_id: &str, sort_order: i32) -> ChecklistStepDto {
    serde_json::from_value(json!({
        "id": id,
        "program_id": program_id,
        "title": format!("Step {}", id),
        "is_required": true,
        "sort_order": sort_order,
    }))
    .unwrap()
}

fn document(id: &str, reviewed_status: &str) -> StudentDocumentDto {
    serde_json::from_value(json!({
        "id": id,
        "file_name": "passport.pdf",
        "public_url": format!("https://files.example.com/{}", id),
        "reviewed_status": reviewed_status,
    }))
    .unwrap()
}

fn request(id: &str, status: &str, recipient_type: &str) -> StudentRequestDto {
    serde_json::from_value(json!({
        "id": id,
        "student_id": "s1",
        "request_type": "Housing",
        "description": "Need a room closer to campus",
        "status": status,
        "recipient_type": recipient_type,
    }))
    .unwrap()
}

/// Checklist item; `review_status` only applies when `has_document` is set.
fn item(
    step_id: &str,
    status: &str,
    requires_document: bool,
    has_document: bool,
    review_status: Option<&str>,
) -> StudentChecklistItemDto {
    serde_json::from_value(json!({
        "checklist_step_id": step_id,
        "title": format!("Step {}", step_id),
        "is_required": true,
        "sort_order": 1,
        "status": status,
        "requires_document": requires_document,
        "has_document": has_document,
        "review_status": review_status,
    }))
    .unwrap()
}

fn conversation(id: &str, student_id: &str) -> ConversationDto {
    serde_json::from_value(json!({ "id": id, "student_id": student_id, "unread_count": 2 }))
        .unwrap()
}

fn message(id: &str, sender_type: &str, content: &str) -> MessageDto {
    serde_json::from_value(json!({
        "id": id,
        "conversation_id": "c1",
        "sender_type": sender_type,
        "sender_id": "s1",
        "content": content,
        "is_read": false,
        "created_at": "2025-09-02T10:00:00Z",
    }))
    .unwrap()
}

fn server_error(action: &'static str, detail: Option<&str>) -> ApiError {
    ApiError::Status {
        action,
        status: 400,
        detail: detail.map(str::to_string),
    }
}
