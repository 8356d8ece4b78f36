use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use dioxus_logger::tracing;

use crate::{
    api::{
        envelope::parse_collection,
        error::ApiError,
        transport::{ApiRequest, RawResponse, Transport},
    },
    model::{
        checklist::{ChecklistStepDto, CreateChecklistStepDto, MarkStepDto, StudentChecklistItemDto},
        document::{DocumentReviewDto, DocumentUpload, StudentDocumentDto},
        institution::InstitutionDto,
        message::{ConversationDto, MessageDto, SendMessageDto, SenderType},
        program::{ApplyTemplateDto, CreateProgramDto, ProgramDto},
        request::{CreateStudentRequestDto, RecipientType, RequestReviewDto, StudentRequestDto},
        review::ReviewDecision,
        student::{BulkStudentsDto, StudentDto},
        Resource,
    },
};

/// Page size requested when loading a conversation's messages
pub const MESSAGE_PAGE_SIZE: u32 = 50;

/// Typed client for the Arrival backend REST API.
///
/// Reads check the content type before the status so an HTML error page is reported as
/// [`ApiError::NotJson`]. Mutations only report success or failure: their response bodies are
/// never handed back, callers re-read the affected collection instead.
#[derive(Clone, Debug)]
pub struct ArrivalApi<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ArrivalApi<T> {
    /// Create a client for the backend at `base_url`.
    ///
    /// A trailing slash is trimmed. An empty base URL targets the page's own origin, which is
    /// how the browser reaches the health proxy.
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        action: &'static str,
        request: ApiRequest,
    ) -> Result<RawResponse, ApiError> {
        self.transport
            .send(&self.base_url, request)
            .await
            .map_err(|message| {
                tracing::error!("Failed to {}: {}", action, message);

                ApiError::Transport { action, message }
            })
    }

    async fn read_json(
        &self,
        action: &'static str,
        resource: &'static str,
        request: ApiRequest,
    ) -> Result<Value, ApiError> {
        let response = self.send(action, request).await?;

        if !response.is_json() {
            tracing::error!(
                status = response.status,
                "{} response is not JSON, raw body: {}",
                resource,
                response.body
            );

            return Err(ApiError::NotJson { resource });
        }

        if !response.is_success() {
            return Err(ApiError::from_status(action, response.status, &response.body));
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            resource,
            message: e.to_string(),
        })
    }

    async fn read_collection<R: Resource>(
        &self,
        action: &'static str,
        request: ApiRequest,
    ) -> Result<Vec<R>, ApiError> {
        let value = self.read_json(action, R::NAME, request).await?;
        let items = parse_collection::<R>(value)?;

        tracing::debug!("Loaded {} {}", items.len(), R::NAME);

        Ok(items)
    }

    async fn read_object<R: DeserializeOwned>(
        &self,
        action: &'static str,
        resource: &'static str,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let value = self.read_json(action, resource, request).await?;

        serde_json::from_value(value).map_err(|e| ApiError::Decode {
            resource,
            message: e.to_string(),
        })
    }

    async fn mutate(&self, action: &'static str, request: ApiRequest) -> Result<(), ApiError> {
        let response = self.send(action, request).await?;

        if response.is_success() {
            return Ok(());
        }

        let err = ApiError::from_status(action, response.status, &response.body);
        tracing::error!(status = response.status, "Failed to {}: {}", action, err);

        Err(err)
    }

    fn json_body(body: &impl Serialize) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Validation(e.to_string()))
    }

    /// `GET /api/institutions`
    pub async fn list_institutions(&self) -> Result<Vec<InstitutionDto>, ApiError> {
        self.read_collection("load institutions", ApiRequest::get("/api/institutions"))
            .await
    }

    /// `GET /api/programs?institution_id=`
    pub async fn list_programs(&self, institution_id: &str) -> Result<Vec<ProgramDto>, ApiError> {
        self.read_collection(
            "load programs",
            ApiRequest::get("/api/programs").query("institution_id", institution_id),
        )
        .await
    }

    /// `POST /api/programs`
    pub async fn create_program(&self, program: &CreateProgramDto) -> Result<(), ApiError> {
        self.mutate(
            "create program",
            ApiRequest::post("/api/programs").json(Self::json_body(program)?),
        )
        .await
    }

    /// `POST /api/programs/{id}/apply-template`
    pub async fn apply_template(
        &self,
        program_id: &str,
        template: &ApplyTemplateDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "apply template",
            ApiRequest::post(format!("/api/programs/{}/apply-template", program_id))
                .json(Self::json_body(template)?),
        )
        .await
    }

    /// `GET /api/students?program_id=`
    pub async fn list_students(&self, program_id: &str) -> Result<Vec<StudentDto>, ApiError> {
        self.read_collection(
            "load students",
            ApiRequest::get("/api/students").query("program_id", program_id),
        )
        .await
    }

    /// `POST /api/students/programs/{id}/bulk`
    pub async fn bulk_add_students(
        &self,
        program_id: &str,
        students: &BulkStudentsDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "add students",
            ApiRequest::post(format!("/api/students/programs/{}/bulk", program_id))
                .json(Self::json_body(students)?),
        )
        .await
    }

    /// `GET /api/program-checklist?program_id=`
    pub async fn list_checklist_steps(
        &self,
        program_id: &str,
    ) -> Result<Vec<ChecklistStepDto>, ApiError> {
        self.read_collection(
            "load checklist",
            ApiRequest::get("/api/program-checklist").query("program_id", program_id),
        )
        .await
    }

    /// `POST /api/program-checklist`
    pub async fn create_checklist_step(
        &self,
        step: &CreateChecklistStepDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "create step",
            ApiRequest::post("/api/program-checklist").json(Self::json_body(step)?),
        )
        .await
    }

    /// `GET /api/student-checklist?student_id=`
    pub async fn student_checklist(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentChecklistItemDto>, ApiError> {
        self.read_collection(
            "load checklist",
            ApiRequest::get("/api/student-checklist").query("student_id", student_id),
        )
        .await
    }

    /// `POST /api/student-checklist/mark`
    pub async fn mark_step(&self, mark: &MarkStepDto) -> Result<(), ApiError> {
        self.mutate(
            "update step",
            ApiRequest::post("/api/student-checklist/mark").json(Self::json_body(mark)?),
        )
        .await
    }

    /// `POST /api/student-documents/upload` as multipart form data
    pub async fn upload_document(&self, upload: DocumentUpload) -> Result<(), ApiError> {
        self.mutate(
            "upload document",
            ApiRequest::post("/api/student-documents/upload").multipart(upload),
        )
        .await
    }

    /// `GET /api/admin/documents/student/{id}`
    pub async fn list_student_documents(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentDocumentDto>, ApiError> {
        self.read_collection(
            "load documents",
            ApiRequest::get(format!("/api/admin/documents/student/{}", student_id)),
        )
        .await
    }

    /// `POST /api/admin/documents/{id}/approve` or `/reject`
    pub async fn review_document(
        &self,
        document_id: &str,
        decision: ReviewDecision,
        review: &DocumentReviewDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "review document",
            ApiRequest::post(format!(
                "/api/admin/documents/{}/{}",
                document_id,
                decision.path()
            ))
            .json(Self::json_body(review)?),
        )
        .await
    }

    /// `GET /api/admin/requests?recipient_type=`
    pub async fn list_requests(
        &self,
        recipient: RecipientType,
    ) -> Result<Vec<StudentRequestDto>, ApiError> {
        self.read_collection(
            "load requests",
            ApiRequest::get("/api/admin/requests").query("recipient_type", recipient.as_str()),
        )
        .await
    }

    /// `POST /api/admin/requests/{id}/approve` or `/reject`
    pub async fn review_request(
        &self,
        request_id: &str,
        decision: ReviewDecision,
        review: &RequestReviewDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "review request",
            ApiRequest::post(format!("/api/admin/requests/{}/{}", request_id, decision.path()))
                .json(Self::json_body(review)?),
        )
        .await
    }

    /// `POST /api/student/{id}/request`
    pub async fn submit_request(
        &self,
        student_id: &str,
        request: &CreateStudentRequestDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "submit request",
            ApiRequest::post(format!("/api/student/{}/request", student_id))
                .json(Self::json_body(request)?),
        )
        .await
    }

    /// `GET /api/student/{id}/requests`
    pub async fn student_requests(
        &self,
        student_id: &str,
    ) -> Result<Vec<StudentRequestDto>, ApiError> {
        self.read_collection(
            "load requests",
            ApiRequest::get(format!("/api/student/{}/requests", student_id)),
        )
        .await
    }

    /// `GET /api/students/{id}/conversation`, which creates the conversation on first use
    pub async fn conversation(&self, student_id: &str) -> Result<ConversationDto, ApiError> {
        self.read_object(
            "load conversation",
            "conversation",
            ApiRequest::get(format!("/api/students/{}/conversation", student_id)),
        )
        .await
    }

    /// `GET /api/conversations/{id}/messages?limit=50&offset=0`
    pub async fn list_messages(&self, conversation_id: &str) -> Result<Vec<MessageDto>, ApiError> {
        self.read_collection(
            "load messages",
            ApiRequest::get(format!("/api/conversations/{}/messages", conversation_id))
                .query("limit", MESSAGE_PAGE_SIZE.to_string())
                .query("offset", "0"),
        )
        .await
    }

    /// `POST /api/conversations/{id}/messages`
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &SendMessageDto,
    ) -> Result<(), ApiError> {
        self.mutate(
            "send message",
            ApiRequest::post(format!("/api/conversations/{}/messages", conversation_id))
                .json(Self::json_body(message)?),
        )
        .await
    }

    /// `POST /api/conversations/{id}/mark-read?reader_type=`
    pub async fn mark_read(
        &self,
        conversation_id: &str,
        reader: SenderType,
    ) -> Result<(), ApiError> {
        self.mutate(
            "mark messages read",
            ApiRequest::post(format!("/api/conversations/{}/mark-read", conversation_id))
                .query("reader_type", reader.as_str()),
        )
        .await
    }

    /// `GET /api/backend-health` on the frontend server, which proxies the backend check.
    ///
    /// The JSON body is returned whatever the status, since the proxy reports upstream
    /// failures as `{"status": "error", ...}` bodies.
    pub async fn backend_health(&self) -> Result<Value, ApiError> {
        let response = self
            .send("check backend health", ApiRequest::get("/api/backend-health"))
            .await?;

        if !response.is_json() {
            return Err(ApiError::NotJson { resource: "health" });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode {
            resource: "health",
            message: e.to_string(),
        })
    }
}
