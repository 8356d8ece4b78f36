//! Document review state of a checklist item and the completion gate built on it.
//!
//! ```text
//! NoDocument --upload--> PendingReview --approve--> Approved
//!                              ^   \----reject----> Rejected
//!                              \------upload--------/
//! ```
//!
//! Transitions happen on the backend; the client derives the current state from each item's
//! `has_document` and `review_status` and only decides which actions are enabled.

use crate::model::{
    checklist::StudentChecklistItemDto,
    review::{ReviewDecision, ReviewStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentState {
    NoDocument,
    PendingReview,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentEvent {
    Upload,
    Review(ReviewDecision),
}

impl DocumentState {
    pub fn of(item: &StudentChecklistItemDto) -> Self {
        if !item.has_document {
            return Self::NoDocument;
        }

        match item.review_status.unwrap_or_default() {
            ReviewStatus::Pending => Self::PendingReview,
            ReviewStatus::Approved => Self::Approved,
            ReviewStatus::Rejected => Self::Rejected,
        }
    }

    /// State after `event`, or `None` when the event is not allowed from this state.
    pub fn next(self, event: DocumentEvent) -> Option<Self> {
        match (self, event) {
            (Self::NoDocument | Self::Rejected, DocumentEvent::Upload) => Some(Self::PendingReview),
            (Self::PendingReview, DocumentEvent::Review(ReviewDecision::Approve)) => {
                Some(Self::Approved)
            }
            (Self::PendingReview, DocumentEvent::Review(ReviewDecision::Reject)) => {
                Some(Self::Rejected)
            }
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoDocument => "No document",
            Self::PendingReview => "Pending review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// Why an item cannot be marked done, or `None` when it can.
pub fn completion_blocker(item: &StudentChecklistItemDto) -> Option<&'static str> {
    if item.is_done() {
        return Some("This step is already done.");
    }

    if !item.requires_document {
        return None;
    }

    match DocumentState::of(item) {
        DocumentState::Approved => None,
        DocumentState::NoDocument => {
            Some("Upload the required document before marking this step done.")
        }
        DocumentState::PendingReview => Some(
            "Your document is awaiting review. You can mark this step done once it is approved.",
        ),
        DocumentState::Rejected => {
            Some("Your document was rejected. Upload a new one before marking this step done.")
        }
    }
}

pub fn can_mark_done(item: &StudentChecklistItemDto) -> bool {
    completion_blocker(item).is_none()
}

pub fn can_upload(item: &StudentChecklistItemDto) -> bool {
    item.requires_document
        && !item.is_done()
        && DocumentState::of(item)
            .next(DocumentEvent::Upload)
            .is_some()
}
