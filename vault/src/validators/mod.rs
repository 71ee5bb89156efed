mod error;

pub use error::flatten_errors;
