pub mod entry;
pub mod home;
pub mod pagination;
pub mod user;
