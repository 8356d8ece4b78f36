//! Messaging panel shared by the student page and the admin dashboard.
//!
//! Opening the panel resolves the student's conversation (the backend creates it on first use),
//! then reads its newest messages. Every accepted message read is followed by one mark-read call
//! for the viewer's side. Sending re-reads the list instead of appending locally.

use dioxus_logger::tracing;

use crate::{
    api::{write_through, ApiError, ArrivalApi, Transport},
    model::message::{ConversationDto, MessageDto, SendMessageDto, SenderType},
    state::collection::{Collection, Generation, Ticket},
};

/// Sender id the admin dashboard posts messages with
pub const ADMIN_SENDER_ID: &str = "admin";

#[derive(Clone, Debug, PartialEq)]
pub enum MessagingFetch {
    Conversation {
        student_id: String,
        ticket: Ticket,
    },
    Messages {
        conversation_id: String,
        ticket: Ticket,
    },
    MarkRead {
        conversation_id: String,
        reader: SenderType,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessagingFetched {
    Conversation(Ticket, Result<ConversationDto, ApiError>),
    Messages(Ticket, Result<Vec<MessageDto>, ApiError>),
    MarkedRead(Result<(), ApiError>),
}

impl MessagingFetch {
    pub async fn run<T: Transport>(self, api: &ArrivalApi<T>) -> MessagingFetched {
        match self {
            Self::Conversation { student_id, ticket } => {
                MessagingFetched::Conversation(ticket, api.conversation(&student_id).await)
            }
            Self::Messages {
                conversation_id,
                ticket,
            } => MessagingFetched::Messages(ticket, api.list_messages(&conversation_id).await),
            Self::MarkRead {
                conversation_id,
                reader,
            } => MessagingFetched::MarkedRead(api.mark_read(&conversation_id, reader).await),
        }
    }
}

/// A message ready to be posted, with the ticket of the re-read that follows it.
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessage {
    pub conversation_id: String,
    pub body: SendMessageDto,
    pub ticket: Ticket,
}

impl SendMessage {
    pub async fn commit<T: Transport>(self, api: &ArrivalApi<T>) -> MessagingFetched {
        MessagingFetched::Messages(
            self.ticket,
            write_through(
                api.send_message(&self.conversation_id, &self.body),
                api.list_messages(&self.conversation_id),
            )
            .await,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessagingPanel {
    viewer: SenderType,
    sender_id: String,
    student_id: Option<String>,
    conversation: Option<ConversationDto>,
    conversation_generation: Generation,
    conversation_loading: bool,
    pub messages: Collection<MessageDto>,
    pub draft: String,
    sending: bool,
    pub error: Option<String>,
}

impl MessagingPanel {
    /// Panel for `viewer`, posting messages as `sender_id`.
    pub fn new(viewer: SenderType, sender_id: impl Into<String>) -> Self {
        Self {
            viewer,
            sender_id: sender_id.into(),
            student_id: None,
            conversation: None,
            conversation_generation: Generation::default(),
            conversation_loading: false,
            messages: Collection::default(),
            draft: String::new(),
            sending: false,
            error: None,
        }
    }

    /// Panel of a student reading their own conversation.
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self::new(SenderType::Student, student_id)
    }

    pub fn for_admin() -> Self {
        Self::new(SenderType::Admin, ADMIN_SENDER_ID)
    }

    pub fn viewer(&self) -> SenderType {
        self.viewer
    }

    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    pub fn conversation(&self) -> Option<&ConversationDto> {
        self.conversation.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.conversation_loading || self.messages.is_loading()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether a message was written by the viewer's side.
    pub fn is_own(&self, message: &MessageDto) -> bool {
        message.sender_type == self.viewer
    }

    pub fn can_send(&self) -> bool {
        self.conversation.is_some() && !self.sending && !self.draft.trim().is_empty()
    }

    /// Open the conversation of `student_id`, dropping whatever was shown before.
    pub fn open(mut self, student_id: String) -> (Self, Vec<MessagingFetch>) {
        let ticket = self.conversation_generation.advance();
        let next = Self {
            student_id: Some(student_id.clone()),
            conversation: None,
            conversation_loading: true,
            messages: self.messages.reset(),
            draft: String::new(),
            sending: false,
            error: None,
            ..self
        };

        (next, vec![MessagingFetch::Conversation { student_id, ticket }])
    }

    /// Re-read the messages of the open conversation.
    pub fn refresh(self) -> (Self, Vec<MessagingFetch>) {
        let Some(conversation_id) = self.conversation.as_ref().map(|c| c.id.clone()) else {
            return (self, Vec::new());
        };

        let (messages, ticket) = self.messages.begin_refresh();
        (
            Self { messages, ..self },
            vec![MessagingFetch::Messages {
                conversation_id,
                ticket,
            }],
        )
    }

    fn report(mut self, err: &ApiError) -> Self {
        tracing::error!("{}", err);
        self.error = Some(err.to_string());
        self
    }

    pub fn fetched(self, fetched: MessagingFetched) -> (Self, Vec<MessagingFetch>) {
        match fetched {
            MessagingFetched::Conversation(ticket, result) => {
                if !self.conversation_generation.is_current(ticket) {
                    tracing::debug!("Dropping stale conversation response");
                    return (self, Vec::new());
                }

                let next = Self {
                    conversation_loading: false,
                    ..self
                };

                match result {
                    Ok(conversation) => {
                        let conversation_id = conversation.id.clone();
                        let (messages, ticket) = next.messages.begin_load();
                        let next = Self {
                            conversation: Some(conversation),
                            messages,
                            ..next
                        };

                        (
                            next,
                            vec![MessagingFetch::Messages {
                                conversation_id,
                                ticket,
                            }],
                        )
                    }
                    Err(err) => (next.report(&err), Vec::new()),
                }
            }
            MessagingFetched::Messages(ticket, result) => self.messages_read(ticket, result),
            MessagingFetched::MarkedRead(result) => {
                if let Err(err) = result {
                    tracing::warn!("Failed to mark messages read: {}", err);
                }
                (self, Vec::new())
            }
        }
    }

    fn messages_read(
        self,
        ticket: Ticket,
        result: Result<Vec<MessageDto>, ApiError>,
    ) -> (Self, Vec<MessagingFetch>) {
        if !self.messages.is_current(ticket) {
            tracing::debug!("Dropping stale messages response");
            return (self, Vec::new());
        }

        match result {
            Ok(items) => {
                let mark_read = self.conversation.as_ref().map(|conversation| {
                    MessagingFetch::MarkRead {
                        conversation_id: conversation.id.clone(),
                        reader: self.viewer,
                    }
                });
                let next = Self {
                    messages: self.messages.accept(ticket, items),
                    ..self
                };

                (next, mark_read.into_iter().collect())
            }
            Err(err) => (
                Self {
                    messages: self.messages.fail(ticket),
                    ..self
                }
                .report(&err),
                Vec::new(),
            ),
        }
    }

    /// Validate the draft and start sending it.
    pub fn send(self) -> (Self, Option<SendMessage>) {
        if self.sending {
            return (self, None);
        }

        let Some(conversation_id) = self.conversation.as_ref().map(|c| c.id.clone()) else {
            return (
                self.report(&ApiError::validation("Conversation is not loaded yet")),
                None,
            );
        };

        let content = self.draft.trim();
        if content.is_empty() {
            return (self.report(&ApiError::validation("Message cannot be empty")), None);
        }

        let body = SendMessageDto {
            sender_type: self.viewer,
            sender_id: self.sender_id.clone(),
            content: content.to_string(),
        };
        let (messages, ticket) = self.messages.begin_refresh();
        let next = Self {
            messages,
            sending: true,
            error: None,
            ..self
        };

        (
            next,
            Some(SendMessage {
                conversation_id,
                body,
                ticket,
            }),
        )
    }

    /// Apply the outcome of a send. The draft is kept when sending failed.
    pub fn sent(self, result: MessagingFetched) -> (Self, Vec<MessagingFetch>) {
        let next = Self {
            sending: false,
            ..self
        };

        match result {
            MessagingFetched::Messages(ticket, Ok(items)) => Self {
                draft: String::new(),
                ..next
            }
            .messages_read(ticket, Ok(items)),
            MessagingFetched::Messages(ticket, Err(err)) => (
                Self {
                    messages: next.messages.fail(ticket),
                    ..next
                }
                .report(&err),
                Vec::new(),
            ),
            other => next.fetched(other),
        }
    }
}

impl Default for MessagingPanel {
    fn default() -> Self {
        Self::new(SenderType::Student, String::new())
    }
}
