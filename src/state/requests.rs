use crate::{
    model::{
        request::{RecipientType, StudentRequestDto},
        review::ReviewStatus,
    },
    state::collection::{Collection, Ticket},
};

/// Admin queue of student requests addressed to one kind of recipient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestQueue {
    pub recipient: RecipientType,
    pub requests: Collection<StudentRequestDto>,
}

impl RequestQueue {
    /// Switch the recipient filter and reload.
    pub fn begin_load(self, recipient: RecipientType) -> (Self, Ticket) {
        let (requests, ticket) = self.requests.begin_load();
        (
            Self {
                recipient,
                requests,
            },
            ticket,
        )
    }

    /// Reload the queue for the same recipient, keeping current requests visible.
    pub fn begin_refresh(self) -> (Self, Ticket) {
        let (requests, ticket) = self.requests.begin_refresh();
        (Self { requests, ..self }, ticket)
    }

    pub fn accept(self, ticket: Ticket, items: Vec<StudentRequestDto>) -> Self {
        Self {
            requests: self.requests.accept(ticket, items),
            ..self
        }
    }

    pub fn fail(self, ticket: Ticket) -> Self {
        Self {
            requests: self.requests.fail(ticket),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            requests: self.requests.reset(),
            ..self
        }
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .items()
            .iter()
            .filter(|request| request.status == ReviewStatus::Pending)
            .count()
    }
}
