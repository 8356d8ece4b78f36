//! Parsing of the bulk student form.
//!
//! One student per line as `Name, email, target_university`. Lines missing any of the three
//! fields are skipped; only the surviving records are submitted, as a single batch.

use crate::{
    api::ApiError,
    model::student::{BulkStudentsDto, NewStudentDto},
};

/// Placeholder shown in the bulk input
pub const BULK_FORMAT_HINT: &str = "Jane Doe, jane@example.com, Target University";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkParse {
    pub students: Vec<NewStudentDto>,
    /// 1-based numbers of non-blank lines that were skipped
    pub skipped_lines: Vec<usize>,
}

/// Split the form text into student records.
pub fn parse_bulk_students(input: &str) -> BulkParse {
    let mut parse = BulkParse::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, ',').map(str::trim);
        let full_name = fields.next().unwrap_or_default();
        let personal_email = fields.next().unwrap_or_default();
        let target_university = fields.next().unwrap_or_default();

        if full_name.is_empty() || personal_email.is_empty() || target_university.is_empty() {
            parse.skipped_lines.push(index + 1);
            continue;
        }

        parse.students.push(NewStudentDto {
            full_name: full_name.to_string(),
            personal_email: personal_email.to_string(),
            target_university: target_university.to_string(),
        });
    }

    parse
}

/// Build the batch request body, rejecting input without a single valid line.
pub fn bulk_request(input: &str) -> Result<BulkStudentsDto, ApiError> {
    let parse = parse_bulk_students(input);

    if parse.students.is_empty() {
        return Err(ApiError::validation(format!(
            "No valid student lines found. Use one student per line: {}",
            BULK_FORMAT_HINT
        )));
    }

    Ok(BulkStudentsDto {
        students: parse.students,
    })
}
