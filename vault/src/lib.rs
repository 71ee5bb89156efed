pub mod search;
pub mod validators;
