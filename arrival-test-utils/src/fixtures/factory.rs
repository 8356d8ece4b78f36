//! JSON bodies shaped like the Arrival backend's responses.
//!
//! Every factory fills the required fields with plausible values derived from the ids passed in.

use serde_json::{json, Value};

pub fn institution(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "country": "US" })
}

/// `program_type` is the wire value, `"UNIVERSITY"` or `"NGO"`.
pub fn program(id: &str, institution_id: &str, program_type: &str) -> Value {
    json!({
        "id": id,
        "institution_id": institution_id,
        "name": format!("Program {}", id),
        "term_label": "Fall 2025",
        "term_start_date": "2025-09-01",
        "program_type": program_type,
    })
}

pub fn student(id: &str, program_id: &str) -> Value {
    json!({
        "id": id,
        "program_id": program_id,
        "full_name": format!("Student {}", id),
        "personal_email": format!("{}@example.com", id),
        "status": "ACTIVE",
        "risk_level": "GREEN",
        "progress_fraction": 0.5,
    })
}

pub fn checklist_step(id: &str, program_id: &str, sort_order: i32) -> Value {
    json!({
        "id": id,
        "program_id": program_id,
        "title": format!("Step {}", id),
        "category": "Arrival",
        "is_required": true,
        "sort_order": sort_order,
    })
}

/// Checklist item of a student. `review_status` is sent as `null` when absent.
pub fn checklist_item(
    step_id: &str,
    status: &str,
    requires_document: bool,
    has_document: bool,
    review_status: Option<&str>,
) -> Value {
    json!({
        "checklist_step_id": step_id,
        "title": format!("Step {}", step_id),
        "is_required": true,
        "sort_order": 1,
        "status": status,
        "completed_at": null,
        "requires_document": requires_document,
        "has_document": has_document,
        "review_status": review_status,
    })
}

pub fn document(id: &str, reviewed_status: &str) -> Value {
    json!({
        "id": id,
        "file_name": "passport.pdf",
        "public_url": format!("https://files.example.com/{}", id),
        "reviewed_status": reviewed_status,
        "uploaded_at": "2025-09-01T08:30:00Z",
        "checklist_step_id": "c1",
        "step_title": "Upload passport",
    })
}

pub fn request(id: &str, student_id: &str, status: &str, recipient_type: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "request_type": "Housing",
        "description": "Need a room closer to campus",
        "status": status,
        "admin_notes": null,
        "recipient_type": recipient_type,
        "created_at": "2025-09-01T09:00:00Z",
    })
}

pub fn conversation(id: &str, student_id: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "unread_count": 1,
        "created_at": "2025-09-01T09:00:00Z",
    })
}

/// `sender_type` is the wire value, `"STUDENT"` or `"ADMIN"`.
pub fn message(id: &str, conversation_id: &str, sender_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "conversation_id": conversation_id,
        "sender_type": sender_type,
        "sender_id": "s1",
        "content": content,
        "is_read": false,
        "created_at": "2025-09-02T10:00:00Z",
    })
}

/// Object holding `items` under `key`, as some backend collection endpoints return them.
pub fn envelope(key: &str, items: Vec<Value>) -> Value {
    let mut body = serde_json::Map::new();
    body.insert("status".to_string(), json!("ok"));
    body.insert(key.to_string(), Value::Array(items));

    Value::Object(body)
}

/// Backend error body carrying `detail`.
pub fn error_detail(detail: &str) -> Value {
    json!({ "detail": detail })
}
