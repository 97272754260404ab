pub mod domain;
pub mod error;

pub use domain::{Contact, ContactId};
pub use error::ValidationError;
