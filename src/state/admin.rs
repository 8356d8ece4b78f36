//! Admin dashboard state: the Institution → Program → Student selection chain, the collections
//! hanging off each level, and the admin's mutations.
//!
//! Transitions consume the dashboard and return the next one together with the fetches the view
//! has to dispatch. Changing the selection at one level resets every collection below it, which
//! also invalidates their in-flight fetches. Mutations are write-through: a successful mutation
//! is followed by a read of the collection it touched, and that read replaces local state.

use dioxus_logger::tracing;

use crate::{
    api::{write_through, ApiError, ArrivalApi, Transport},
    model::{
        checklist::{ChecklistStepDto, CreateChecklistStepDto},
        document::{DocumentReviewDto, StudentDocumentDto},
        institution::InstitutionDto,
        program::{ApplyTemplateDto, CreateProgramDto, ProgramDto},
        request::{RecipientType, RequestReviewDto, StudentRequestDto},
        review::ReviewDecision,
        student::{BulkStudentsDto, StudentDto},
    },
    state::{
        bulk::bulk_request,
        collection::{Collection, Ticket},
        forms::{self, ProgramForm, StepForm},
        requests::RequestQueue,
    },
};

pub const SELECT_INSTITUTION_PROMPT: &str = "Select an institution to see its programs.";
pub const SELECT_PROGRAM_PROMPT: &str = "Select a program to see its students and checklist.";
pub const SELECT_STUDENT_PROMPT: &str = "Select a student to view their documents and messages.";

/// Dashboard areas that depend on a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Programs,
    Students,
    Checklist,
    Documents,
    Requests,
    Messages,
}

/// Read the view has to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminFetch {
    Institutions {
        ticket: Ticket,
    },
    Programs {
        institution_id: String,
        ticket: Ticket,
    },
    Students {
        program_id: String,
        ticket: Ticket,
    },
    Checklist {
        program_id: String,
        ticket: Ticket,
    },
    Documents {
        student_id: String,
        ticket: Ticket,
    },
    Requests {
        recipient: RecipientType,
        ticket: Ticket,
    },
}

/// Outcome of an [`AdminFetch`], or of the re-read following an [`AdminMutation`].
#[derive(Clone, Debug, PartialEq)]
pub enum AdminFetched {
    Institutions(Ticket, Result<Vec<InstitutionDto>, ApiError>),
    Programs(Ticket, Result<Vec<ProgramDto>, ApiError>),
    Students(Ticket, Result<Vec<StudentDto>, ApiError>),
    Checklist(Ticket, Result<Vec<ChecklistStepDto>, ApiError>),
    Documents(Ticket, Result<Vec<StudentDocumentDto>, ApiError>),
    Requests(Ticket, Result<Vec<StudentRequestDto>, ApiError>),
}

impl AdminFetched {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Institutions(_, result) => result.as_ref().err(),
            Self::Programs(_, result) => result.as_ref().err(),
            Self::Students(_, result) => result.as_ref().err(),
            Self::Checklist(_, result) => result.as_ref().err(),
            Self::Documents(_, result) => result.as_ref().err(),
            Self::Requests(_, result) => result.as_ref().err(),
        }
    }
}

impl AdminFetch {
    pub async fn run<T: Transport>(self, api: &ArrivalApi<T>) -> AdminFetched {
        match self {
            Self::Institutions { ticket } => {
                AdminFetched::Institutions(ticket, api.list_institutions().await)
            }
            Self::Programs {
                institution_id,
                ticket,
            } => AdminFetched::Programs(ticket, api.list_programs(&institution_id).await),
            Self::Students { program_id, ticket } => {
                AdminFetched::Students(ticket, api.list_students(&program_id).await)
            }
            Self::Checklist { program_id, ticket } => {
                AdminFetched::Checklist(ticket, api.list_checklist_steps(&program_id).await)
            }
            Self::Documents { student_id, ticket } => {
                AdminFetched::Documents(ticket, api.list_student_documents(&student_id).await)
            }
            Self::Requests { recipient, ticket } => {
                AdminFetched::Requests(ticket, api.list_requests(recipient).await)
            }
        }
    }
}

/// Mutation in flight, used to disable and relabel its button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminAction {
    CreateStep,
    CreateProgram,
    AddStudents,
    ApplyTemplate,
    ReviewDocument {
        document_id: String,
        decision: ReviewDecision,
    },
    ReviewRequest {
        request_id: String,
        decision: ReviewDecision,
    },
}

/// Validated mutation plus the ticket of the collection it re-reads afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminMutation {
    CreateStep {
        body: CreateChecklistStepDto,
        ticket: Ticket,
    },
    CreateProgram {
        body: CreateProgramDto,
        ticket: Ticket,
    },
    AddStudents {
        program_id: String,
        body: BulkStudentsDto,
        ticket: Ticket,
    },
    ApplyTemplate {
        program_id: String,
        body: ApplyTemplateDto,
        ticket: Ticket,
    },
    ReviewDocument {
        document_id: String,
        student_id: String,
        decision: ReviewDecision,
        body: DocumentReviewDto,
        ticket: Ticket,
    },
    ReviewRequest {
        request_id: String,
        recipient: RecipientType,
        decision: ReviewDecision,
        body: RequestReviewDto,
        ticket: Ticket,
    },
}

impl AdminMutation {
    /// Send the mutation and, if it succeeds, re-read the collection it affects.
    pub async fn commit<T: Transport>(self, api: &ArrivalApi<T>) -> AdminFetched {
        match self {
            Self::CreateStep { body, ticket } => AdminFetched::Checklist(
                ticket,
                write_through(
                    api.create_checklist_step(&body),
                    api.list_checklist_steps(&body.program_id),
                )
                .await,
            ),
            Self::CreateProgram { body, ticket } => AdminFetched::Programs(
                ticket,
                write_through(
                    api.create_program(&body),
                    api.list_programs(&body.institution_id),
                )
                .await,
            ),
            Self::AddStudents {
                program_id,
                body,
                ticket,
            } => AdminFetched::Students(
                ticket,
                write_through(
                    api.bulk_add_students(&program_id, &body),
                    api.list_students(&program_id),
                )
                .await,
            ),
            Self::ApplyTemplate {
                program_id,
                body,
                ticket,
            } => AdminFetched::Checklist(
                ticket,
                write_through(
                    api.apply_template(&program_id, &body),
                    api.list_checklist_steps(&program_id),
                )
                .await,
            ),
            Self::ReviewDocument {
                document_id,
                student_id,
                decision,
                body,
                ticket,
            } => AdminFetched::Documents(
                ticket,
                write_through(
                    api.review_document(&document_id, decision, &body),
                    api.list_student_documents(&student_id),
                )
                .await,
            ),
            Self::ReviewRequest {
                request_id,
                recipient,
                decision,
                body,
                ticket,
            } => AdminFetched::Requests(
                ticket,
                write_through(
                    api.review_request(&request_id, decision, &body),
                    api.list_requests(recipient),
                )
                .await,
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminDashboard {
    pub institutions: Collection<InstitutionDto>,
    pub programs: Collection<ProgramDto>,
    pub students: Collection<StudentDto>,
    pub checklist: Collection<ChecklistStepDto>,
    pub documents: Collection<StudentDocumentDto>,
    pub requests: RequestQueue,

    selected_institution: Option<String>,
    selected_program: Option<String>,
    selected_student: Option<String>,

    pending: Option<AdminAction>,
    /// Message shown in the error banner
    pub error: Option<String>,

    pub step_form: StepForm,
    pub program_form: ProgramForm,
    pub bulk_input: String,
    pub template: String,
}

impl AdminDashboard {
    pub fn selected_institution(&self) -> Option<&str> {
        self.selected_institution.as_deref()
    }

    pub fn selected_program(&self) -> Option<&str> {
        self.selected_program.as_deref()
    }

    pub fn selected_student(&self) -> Option<&str> {
        self.selected_student.as_deref()
    }

    pub fn selected_program_dto(&self) -> Option<&ProgramDto> {
        let id = self.selected_program.as_deref()?;
        self.programs.items().iter().find(|program| program.id == id)
    }

    pub fn selected_student_dto(&self) -> Option<&StudentDto> {
        let id = self.selected_student.as_deref()?;
        self.students.items().iter().find(|student| student.id == id)
    }

    pub fn pending(&self) -> Option<&AdminAction> {
        self.pending.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Prompt shown instead of `section` while the selection it depends on is missing.
    pub fn prompt(&self, section: Section) -> Option<&'static str> {
        match section {
            Section::Programs if self.selected_institution.is_none() => {
                Some(SELECT_INSTITUTION_PROMPT)
            }
            Section::Students | Section::Checklist | Section::Requests
                if self.selected_program.is_none() =>
            {
                Some(SELECT_PROGRAM_PROMPT)
            }
            Section::Documents | Section::Messages if self.selected_student.is_none() => {
                Some(SELECT_STUDENT_PROMPT)
            }
            _ => None,
        }
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        self.prompt(section).is_none()
    }

    /// Initial load of the institution list.
    pub fn load(self) -> (Self, Vec<AdminFetch>) {
        let (institutions, ticket) = self.institutions.begin_load();
        let next = Self {
            institutions,
            error: None,
            ..self
        };

        (next, vec![AdminFetch::Institutions { ticket }])
    }

    /// Select an institution, clearing programs, students and everything below them.
    ///
    /// Selecting the current institution again reloads its programs.
    pub fn select_institution(self, institution_id: String) -> (Self, Vec<AdminFetch>) {
        let next = self.clear_below_institution();
        let (programs, ticket) = next.programs.begin_load();
        let next = Self {
            selected_institution: Some(institution_id.clone()),
            programs,
            error: None,
            ..next
        };

        (
            next,
            vec![AdminFetch::Programs {
                institution_id,
                ticket,
            }],
        )
    }

    /// Select a program, clearing students and their documents, and load the program's students,
    /// checklist and request queue.
    pub fn select_program(self, program_id: String) -> (Self, Vec<AdminFetch>) {
        let recipient = self
            .programs
            .items()
            .iter()
            .find(|program| program.id == program_id)
            .map(|program| program.program_type.recipient())
            .unwrap_or_default();

        let next = self.clear_below_program();
        let (students, students_ticket) = next.students.begin_load();
        let (checklist, checklist_ticket) = next.checklist.begin_load();
        let (requests, requests_ticket) = next.requests.begin_load(recipient);

        let next = Self {
            selected_program: Some(program_id.clone()),
            students,
            checklist,
            requests,
            error: None,
            ..next
        };

        (
            next,
            vec![
                AdminFetch::Students {
                    program_id: program_id.clone(),
                    ticket: students_ticket,
                },
                AdminFetch::Checklist {
                    program_id,
                    ticket: checklist_ticket,
                },
                AdminFetch::Requests {
                    recipient,
                    ticket: requests_ticket,
                },
            ],
        )
    }

    /// Select a student and load their documents.
    pub fn select_student(self, student_id: String) -> (Self, Vec<AdminFetch>) {
        let (documents, ticket) = self.documents.begin_load();
        let next = Self {
            selected_student: Some(student_id.clone()),
            documents,
            error: None,
            ..self
        };

        (next, vec![AdminFetch::Documents { student_id, ticket }])
    }

    /// Show requests addressed to `recipient` instead of the program's default.
    pub fn switch_request_recipient(self, recipient: RecipientType) -> (Self, Vec<AdminFetch>) {
        if self.selected_program.is_none() {
            return (self, Vec::new());
        }

        let (requests, ticket) = self.requests.begin_load(recipient);
        let next = Self {
            requests,
            error: None,
            ..self
        };

        (next, vec![AdminFetch::Requests { recipient, ticket }])
    }

    fn clear_below_institution(self) -> Self {
        let next = self.clear_below_program();
        Self {
            programs: next.programs.reset(),
            selected_program: None,
            ..next
        }
    }

    fn clear_below_program(self) -> Self {
        let next = self.clear_below_student();
        Self {
            students: next.students.reset(),
            checklist: next.checklist.reset(),
            requests: next.requests.reset(),
            selected_student: None,
            step_form: StepForm::default(),
            bulk_input: String::new(),
            template: String::new(),
            ..next
        }
    }

    fn clear_below_student(self) -> Self {
        Self {
            documents: self.documents.reset(),
            ..self
        }
    }

    fn report(mut self, err: &ApiError) -> Self {
        tracing::error!("{}", err);
        self.error = Some(err.to_string());
        self
    }

    /// Apply the result of a fetch. Results carrying a stale ticket are dropped.
    pub fn fetched(self, fetched: AdminFetched) -> (Self, Vec<AdminFetch>) {
        match fetched {
            AdminFetched::Institutions(ticket, result) => {
                if !self.institutions.is_current(ticket) {
                    tracing::debug!("Dropping stale institutions response");
                    return (self, Vec::new());
                }

                match result {
                    Ok(items) => {
                        let first = items.first().map(|institution| institution.id.clone());
                        let next = Self {
                            institutions: self.institutions.accept(ticket, items),
                            ..self
                        };

                        match first {
                            Some(id) if next.selected_institution.is_none() => {
                                next.select_institution(id)
                            }
                            _ => (next, Vec::new()),
                        }
                    }
                    Err(err) => (
                        Self {
                            institutions: self.institutions.fail(ticket),
                            ..self
                        }
                        .report(&err),
                        Vec::new(),
                    ),
                }
            }
            AdminFetched::Programs(ticket, result) => {
                if !self.programs.is_current(ticket) {
                    tracing::debug!("Dropping stale programs response");
                    return (self, Vec::new());
                }

                match result {
                    Ok(items) => {
                        let first = items.first().map(|program| program.id.clone());
                        let next = Self {
                            programs: self.programs.accept(ticket, items),
                            ..self
                        };

                        match first {
                            Some(id) if next.selected_program.is_none() => next.select_program(id),
                            _ => (next, Vec::new()),
                        }
                    }
                    Err(err) => (
                        Self {
                            programs: self.programs.fail(ticket),
                            ..self
                        }
                        .report(&err),
                        Vec::new(),
                    ),
                }
            }
            AdminFetched::Students(ticket, result) => {
                if !self.students.is_current(ticket) {
                    tracing::debug!("Dropping stale students response");
                    return (self, Vec::new());
                }

                match result {
                    Ok(items) => {
                        let first = items.first().map(|student| student.id.clone());
                        let next = Self {
                            students: self.students.accept(ticket, items),
                            ..self
                        };

                        match first {
                            Some(id) if next.selected_student.is_none() => next.select_student(id),
                            _ => (next, Vec::new()),
                        }
                    }
                    Err(err) => (
                        Self {
                            students: self.students.fail(ticket),
                            ..self
                        }
                        .report(&err),
                        Vec::new(),
                    ),
                }
            }
            AdminFetched::Checklist(ticket, result) => {
                if !self.checklist.is_current(ticket) {
                    tracing::debug!("Dropping stale checklist response");
                    return (self, Vec::new());
                }

                let next = match result {
                    Ok(items) => Self {
                        checklist: self.checklist.accept(ticket, items),
                        ..self
                    },
                    Err(err) => Self {
                        checklist: self.checklist.fail(ticket),
                        ..self
                    }
                    .report(&err),
                };
                (next, Vec::new())
            }
            AdminFetched::Documents(ticket, result) => {
                if !self.documents.is_current(ticket) {
                    tracing::debug!("Dropping stale documents response");
                    return (self, Vec::new());
                }

                let next = match result {
                    Ok(items) => Self {
                        documents: self.documents.accept(ticket, items),
                        ..self
                    },
                    Err(err) => Self {
                        documents: self.documents.fail(ticket),
                        ..self
                    }
                    .report(&err),
                };
                (next, Vec::new())
            }
            AdminFetched::Requests(ticket, result) => {
                if !self.requests.requests.is_current(ticket) {
                    tracing::debug!("Dropping stale requests response");
                    return (self, Vec::new());
                }

                let next = match result {
                    Ok(items) => Self {
                        requests: self.requests.accept(ticket, items),
                        ..self
                    },
                    Err(err) => Self {
                        requests: self.requests.fail(ticket),
                        ..self
                    }
                    .report(&err),
                };
                (next, Vec::new())
            }
        }
    }

    /// Reject an action locally without contacting the backend.
    pub fn reject(self, err: ApiError) -> Self {
        self.report(&err)
    }

    pub fn dismiss_error(self) -> Self {
        Self {
            error: None,
            ..self
        }
    }

    fn begin(self, action: AdminAction) -> Self {
        Self {
            pending: Some(action),
            error: None,
            ..self
        }
    }

    /// Validate the new step form and start creating the step.
    pub fn create_step(self) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let Some(program_id) = self.selected_program.clone() else {
            return (self.reject(ApiError::validation(SELECT_PROGRAM_PROMPT)), None);
        };

        match self.step_form.build(&program_id, self.checklist.len()) {
            Ok(body) => {
                let (checklist, ticket) = self.checklist.begin_refresh();
                let next = Self { checklist, ..self }.begin(AdminAction::CreateStep);

                (next, Some(AdminMutation::CreateStep { body, ticket }))
            }
            Err(err) => (self.reject(err), None),
        }
    }

    /// Validate the program form and start creating the program.
    pub fn create_program(self) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let Some(institution_id) = self.selected_institution.clone() else {
            return (self.reject(ApiError::validation(SELECT_INSTITUTION_PROMPT)), None);
        };

        match self.program_form.build(&institution_id) {
            Ok(body) => {
                let (programs, ticket) = self.programs.begin_refresh();
                let next = Self { programs, ..self }.begin(AdminAction::CreateProgram);

                (next, Some(AdminMutation::CreateProgram { body, ticket }))
            }
            Err(err) => (self.reject(err), None),
        }
    }

    /// Parse the bulk input and start adding the students it holds.
    pub fn add_students(self) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let Some(program_id) = self.selected_program.clone() else {
            return (self.reject(ApiError::validation(SELECT_PROGRAM_PROMPT)), None);
        };

        match bulk_request(&self.bulk_input) {
            Ok(body) => {
                let (students, ticket) = self.students.begin_refresh();
                let next = Self { students, ..self }.begin(AdminAction::AddStudents);

                (
                    next,
                    Some(AdminMutation::AddStudents {
                        program_id,
                        body,
                        ticket,
                    }),
                )
            }
            Err(err) => (self.reject(err), None),
        }
    }

    /// Start applying the named checklist template to the selected program.
    pub fn apply_template(self) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let Some(program_id) = self.selected_program.clone() else {
            return (self.reject(ApiError::validation(SELECT_PROGRAM_PROMPT)), None);
        };

        match forms::template_request(&self.template) {
            Ok(body) => {
                let (checklist, ticket) = self.checklist.begin_refresh();
                let next = Self { checklist, ..self }.begin(AdminAction::ApplyTemplate);

                (
                    next,
                    Some(AdminMutation::ApplyTemplate {
                        program_id,
                        body,
                        ticket,
                    }),
                )
            }
            Err(err) => (self.reject(err), None),
        }
    }

    /// Start approving or rejecting a document of the selected student.
    pub fn review_document(
        self,
        document_id: String,
        decision: ReviewDecision,
        notes: &str,
    ) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let Some(student_id) = self.selected_student.clone() else {
            return (self.reject(ApiError::validation(SELECT_STUDENT_PROMPT)), None);
        };

        let (documents, ticket) = self.documents.begin_refresh();
        let next = Self { documents, ..self }.begin(AdminAction::ReviewDocument {
            document_id: document_id.clone(),
            decision,
        });

        (
            next,
            Some(AdminMutation::ReviewDocument {
                document_id,
                student_id,
                decision,
                body: forms::document_review(notes),
                ticket,
            }),
        )
    }

    /// Start approving or rejecting a student request in the queue.
    pub fn review_request(
        self,
        request_id: String,
        decision: ReviewDecision,
        notes: &str,
    ) -> (Self, Option<AdminMutation>) {
        if self.is_busy() {
            return (self, None);
        }

        let recipient = self.requests.recipient;
        let (queue, ticket) = self.requests.begin_refresh();
        let next = Self {
            requests: queue,
            ..self
        }
        .begin(AdminAction::ReviewRequest {
            request_id: request_id.clone(),
            decision,
        });

        (
            next,
            Some(AdminMutation::ReviewRequest {
                request_id,
                recipient,
                decision,
                body: forms::request_review(notes),
                ticket,
            }),
        )
    }

    /// Apply the outcome of a committed mutation.
    ///
    /// On success the form that produced it is cleared and the re-read collection replaces the
    /// local one. On failure the banner shows the error and the collection is left as it was.
    pub fn committed(self, result: AdminFetched) -> (Self, Vec<AdminFetch>) {
        let action = self.pending.clone();
        let next = Self {
            pending: None,
            ..self
        };

        if let Some(err) = result.error().cloned() {
            return (next.settle_failed(&result).report(&err), Vec::new());
        }

        let next = match action {
            Some(AdminAction::CreateStep) => Self {
                step_form: StepForm::default(),
                ..next
            },
            Some(AdminAction::CreateProgram) => Self {
                program_form: ProgramForm::default(),
                ..next
            },
            Some(AdminAction::AddStudents) => Self {
                bulk_input: String::new(),
                ..next
            },
            Some(AdminAction::ApplyTemplate) => Self {
                template: String::new(),
                ..next
            },
            _ => next,
        };

        next.fetched(result)
    }

    /// Clear the loading flag a failed mutation left behind, keeping the items shown.
    fn settle_failed(self, result: &AdminFetched) -> Self {
        match *result {
            AdminFetched::Institutions(ticket, _) => Self {
                institutions: self.institutions.fail(ticket),
                ..self
            },
            AdminFetched::Programs(ticket, _) => Self {
                programs: self.programs.fail(ticket),
                ..self
            },
            AdminFetched::Students(ticket, _) => Self {
                students: self.students.fail(ticket),
                ..self
            },
            AdminFetched::Checklist(ticket, _) => Self {
                checklist: self.checklist.fail(ticket),
                ..self
            },
            AdminFetched::Documents(ticket, _) => Self {
                documents: self.documents.fail(ticket),
                ..self
            },
            AdminFetched::Requests(ticket, _) => Self {
                requests: self.requests.fail(ticket),
                ..self
            },
        }
    }
}
