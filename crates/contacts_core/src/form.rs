use shared::{
    domain::{Contact, ContactId},
    error::ValidationError,
};
use tracing::{debug, warn};

use crate::ids::IdSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
}

/// Draft state behind the "Add Contact" panel.
///
/// The error slot is cleared by two transitions only: a successful submit, or
/// an edit that changes a field's value while at least one field is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddContactForm {
    name: String,
    phone: String,
    error: Option<ValidationError>,
}

impl AddContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.message())
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.edit(FormField::Name, value.into());
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.edit(FormField::Phone, value.into());
    }

    pub fn edit(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
        };
        if *slot == value {
            return;
        }
        *slot = value;
        debug!(?field, "form field edited");

        if self.error.is_some() && (!self.name.is_empty() || !self.phone.is_empty()) {
            self.error = None;
        }
    }

    /// Validates the draft and, when both fields are filled in, hands a new
    /// contact to `add_contact` and resets the draft. Whitespace-only values
    /// count as filled in.
    pub fn submit(
        &mut self,
        ids: &mut dyn IdSource,
        add_contact: impl FnOnce(Contact),
    ) -> Result<ContactId, ValidationError> {
        if self.name.is_empty() || self.phone.is_empty() {
            let err = ValidationError::MissingRequiredFields;
            warn!(
                name_empty = self.name.is_empty(),
                phone_empty = self.phone.is_empty(),
                "rejected contact submission: {err}"
            );
            self.error = Some(err);
            return Err(err);
        }

        self.error = None;
        let id = ids.next_id();
        let name = std::mem::take(&mut self.name);
        let phone = std::mem::take(&mut self.phone);
        add_contact(Contact::new(id, name, phone));
        Ok(id)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
