//! Student checklist page: the student's checklist items, their requests, and the actions taken
//! on them.

use std::collections::BTreeSet;

use dioxus_logger::tracing;

use crate::{
    api::{write_through, ApiError, ArrivalApi, Transport},
    model::{
        checklist::{ItemStatus, MarkStepDto, StudentChecklistItemDto},
        document::DocumentUpload,
        request::{CreateStudentRequestDto, StudentRequestDto},
    },
    state::{
        collection::{Collection, Ticket},
        forms::RequestForm,
        gate,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum StudentFetch {
    Checklist { student_id: String, ticket: Ticket },
    Requests { student_id: String, ticket: Ticket },
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudentFetched {
    Checklist(Ticket, Result<Vec<StudentChecklistItemDto>, ApiError>),
    Requests(Ticket, Result<Vec<StudentRequestDto>, ApiError>),
}

impl StudentFetch {
    pub async fn run<T: Transport>(self, api: &ArrivalApi<T>) -> StudentFetched {
        match self {
            Self::Checklist { student_id, ticket } => {
                StudentFetched::Checklist(ticket, api.student_checklist(&student_id).await)
            }
            Self::Requests { student_id, ticket } => {
                StudentFetched::Requests(ticket, api.student_requests(&student_id).await)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudentMutation {
    MarkDone {
        body: MarkStepDto,
        ticket: Ticket,
    },
    Upload {
        upload: DocumentUpload,
        ticket: Ticket,
    },
    SubmitRequest {
        student_id: String,
        body: CreateStudentRequestDto,
        ticket: Ticket,
    },
}

/// Outcome of a [`StudentMutation`] and the re-read that followed it.
#[derive(Clone, Debug, PartialEq)]
pub enum StudentCommitted {
    Step {
        step_id: String,
        ticket: Ticket,
        result: Result<Vec<StudentChecklistItemDto>, ApiError>,
    },
    Request {
        ticket: Ticket,
        result: Result<Vec<StudentRequestDto>, ApiError>,
    },
}

impl StudentMutation {
    pub async fn commit<T: Transport>(self, api: &ArrivalApi<T>) -> StudentCommitted {
        match self {
            Self::MarkDone { body, ticket } => StudentCommitted::Step {
                result: write_through(
                    api.mark_step(&body),
                    api.student_checklist(&body.student_id),
                )
                .await,
                step_id: body.checklist_step_id,
                ticket,
            },
            Self::Upload { upload, ticket } => {
                let student_id = upload.student_id.clone();
                let step_id = upload.checklist_step_id.clone();

                StudentCommitted::Step {
                    result: write_through(
                        api.upload_document(upload),
                        api.student_checklist(&student_id),
                    )
                    .await,
                    step_id,
                    ticket,
                }
            }
            Self::SubmitRequest {
                student_id,
                body,
                ticket,
            } => StudentCommitted::Request {
                result: write_through(
                    api.submit_request(&student_id, &body),
                    api.student_requests(&student_id),
                )
                .await,
                ticket,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentChecklist {
    student_id: String,
    pub items: Collection<StudentChecklistItemDto>,
    pub requests: Collection<StudentRequestDto>,
    /// Steps with a save in flight
    saving: BTreeSet<String>,
    /// A step save succeeded but its re-read was superseded before it arrived
    missed_refresh: bool,
    submitting_request: bool,
    pub request_form: RequestForm,
    pub error: Option<String>,
}

impl StudentChecklist {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            ..Self::default()
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn is_saving(&self, step_id: &str) -> bool {
        self.saving.contains(step_id)
    }

    pub fn is_submitting_request(&self) -> bool {
        self.submitting_request
    }

    pub fn item(&self, step_id: &str) -> Option<&StudentChecklistItemDto> {
        self.items
            .items()
            .iter()
            .find(|item| item.checklist_step_id == step_id)
    }

    /// Completed and total item counts.
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.items().iter().filter(|item| item.is_done()).count();
        (done, self.items.len())
    }

    pub fn load(self) -> (Self, Vec<StudentFetch>) {
        let (items, items_ticket) = self.items.begin_load();
        let (requests, requests_ticket) = self.requests.begin_load();
        let student_id = self.student_id.clone();

        let next = Self {
            items,
            requests,
            missed_refresh: false,
            error: None,
            ..self
        };

        (
            next,
            vec![
                StudentFetch::Checklist {
                    student_id: student_id.clone(),
                    ticket: items_ticket,
                },
                StudentFetch::Requests {
                    student_id,
                    ticket: requests_ticket,
                },
            ],
        )
    }

    fn report(mut self, err: &ApiError) -> Self {
        tracing::error!("{}", err);
        self.error = Some(err.to_string());
        self
    }

    pub fn reject(self, err: ApiError) -> Self {
        self.report(&err)
    }

    pub fn dismiss_error(self) -> Self {
        Self {
            error: None,
            ..self
        }
    }

    pub fn fetched(self, fetched: StudentFetched) -> Self {
        match fetched {
            StudentFetched::Checklist(ticket, result) => self.checklist_read(ticket, result),
            StudentFetched::Requests(ticket, result) => self.requests_read(ticket, result),
        }
    }

    fn checklist_read(
        self,
        ticket: Ticket,
        result: Result<Vec<StudentChecklistItemDto>, ApiError>,
    ) -> Self {
        if !self.items.is_current(ticket) {
            tracing::debug!("Dropping stale checklist response");
            return self;
        }

        match result {
            Ok(items) => Self {
                items: self.items.accept(ticket, items),
                ..self
            },
            Err(err) => Self {
                items: self.items.fail(ticket),
                ..self
            }
            .report(&err),
        }
    }

    fn requests_read(
        self,
        ticket: Ticket,
        result: Result<Vec<StudentRequestDto>, ApiError>,
    ) -> Self {
        if !self.requests.is_current(ticket) {
            tracing::debug!("Dropping stale requests response");
            return self;
        }

        match result {
            Ok(requests) => Self {
                requests: self.requests.accept(ticket, requests),
                ..self
            },
            Err(err) => Self {
                requests: self.requests.fail(ticket),
                ..self
            }
            .report(&err),
        }
    }

    /// Mark a step done, unless its document gate blocks it.
    ///
    /// A blocked attempt is reported as a validation error and produces no mutation.
    pub fn mark_done(self, step_id: &str) -> (Self, Option<StudentMutation>) {
        if self.is_saving(step_id) {
            return (self, None);
        }

        let Some(item) = self.item(step_id) else {
            return (self.reject(ApiError::validation("Unknown checklist step")), None);
        };

        if let Some(reason) = gate::completion_blocker(item) {
            return (self.reject(ApiError::validation(reason)), None);
        }

        let body = MarkStepDto {
            student_id: self.student_id.clone(),
            checklist_step_id: step_id.to_string(),
            status: ItemStatus::Done,
        };

        let mut next = self;
        let ticket = next.begin_step(step_id);

        (next, Some(StudentMutation::MarkDone { body, ticket }))
    }

    /// Upload a document for a step that accepts one.
    pub fn upload(
        self,
        step_id: &str,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> (Self, Option<StudentMutation>) {
        if self.is_saving(step_id) {
            return (self, None);
        }

        let Some(item) = self.item(step_id) else {
            return (self.reject(ApiError::validation("Unknown checklist step")), None);
        };

        if !gate::can_upload(item) {
            return (
                self.reject(ApiError::validation(
                    "This step does not accept a document right now",
                )),
                None,
            );
        }

        if bytes.is_empty() {
            return (self.reject(ApiError::validation("Choose a file to upload")), None);
        }

        let upload = DocumentUpload {
            student_id: self.student_id.clone(),
            checklist_step_id: step_id.to_string(),
            file_name,
            content_type,
            bytes,
        };

        let mut next = self;
        let ticket = next.begin_step(step_id);

        (next, Some(StudentMutation::Upload { upload, ticket }))
    }

    fn begin_step(&mut self, step_id: &str) -> Ticket {
        let (items, ticket) = std::mem::take(&mut self.items).begin_refresh();
        self.items = items;
        self.saving.insert(step_id.to_string());
        self.error = None;
        ticket
    }

    /// Validate the request form and start submitting it.
    pub fn submit_request(self) -> (Self, Option<StudentMutation>) {
        if self.submitting_request {
            return (self, None);
        }

        match self.request_form.build() {
            Ok(body) => {
                let student_id = self.student_id.clone();
                let (requests, ticket) = self.requests.begin_refresh();
                let next = Self {
                    requests,
                    submitting_request: true,
                    error: None,
                    ..self
                };

                (
                    next,
                    Some(StudentMutation::SubmitRequest {
                        student_id,
                        body,
                        ticket,
                    }),
                )
            }
            Err(err) => (self.reject(err), None),
        }
    }

    /// Apply the outcome of a mutation.
    ///
    /// Saves on different steps share the checklist generation, so only the newest re-read is
    /// accepted. When an older save succeeded but its re-read was dropped, the checklist is
    /// read again once every save has settled.
    pub fn committed(self, committed: StudentCommitted) -> (Self, Vec<StudentFetch>) {
        match committed {
            StudentCommitted::Step {
                step_id,
                ticket,
                result,
            } => {
                let mut next = self;
                next.saving.remove(&step_id);

                let next = match result {
                    Ok(items) => {
                        if !next.items.is_current(ticket) {
                            next.missed_refresh = true;
                        }
                        next.checklist_read(ticket, Ok(items))
                    }
                    Err(err) => Self {
                        items: next.items.fail(ticket),
                        ..next
                    }
                    .report(&err),
                };

                next.refresh_missed()
            }
            StudentCommitted::Request { ticket, result } => {
                let next = Self {
                    submitting_request: false,
                    ..self
                };

                let next = match result {
                    Ok(requests) => Self {
                        request_form: RequestForm::default(),
                        ..next
                    }
                    .requests_read(ticket, Ok(requests)),
                    Err(err) => Self {
                        requests: next.requests.fail(ticket),
                        ..next
                    }
                    .report(&err),
                };

                (next, Vec::new())
            }
        }
    }

    fn refresh_missed(self) -> (Self, Vec<StudentFetch>) {
        if !self.missed_refresh || !self.saving.is_empty() {
            return (self, Vec::new());
        }

        tracing::debug!("Re-reading checklist after a superseded save");
        let (items, ticket) = self.items.begin_refresh();
        let student_id = self.student_id.clone();
        let next = Self {
            items,
            missed_refresh: false,
            ..self
        };

        (next, vec![StudentFetch::Checklist { student_id, ticket }])
    }
}
