pub mod checklist_item;
pub mod requests;

pub use checklist_item::ChecklistItemCard;
pub use requests::StudentRequests;
