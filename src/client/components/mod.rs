pub mod admin;
pub mod banner;
pub mod messages;
pub mod navbar;
pub mod page;
pub mod status;
pub mod student;

pub use banner::{ErrorBanner, SectionPrompt};
pub use messages::MessagesPanel;
pub use navbar::Navbar;
pub use page::Page;
pub use status::StatusBadge;
