pub mod admin;
pub mod home;
pub mod not_found;
pub mod student;

pub use admin::Admin;
pub use home::Home;
pub use not_found::NotFound;
pub use student::StudentPortal;
