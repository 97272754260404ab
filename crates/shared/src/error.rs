use thiserror::Error;

/// Local, recoverable failure raised when the add form is submitted with a
/// required field left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and phone number are required")]
    MissingRequiredFields,
}

impl ValidationError {
    pub fn message(&self) -> String {
        self.to_string()
    }
}
