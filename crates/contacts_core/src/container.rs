use shared::{
    domain::{Contact, ContactId},
    error::ValidationError,
};
use tracing::info;

use crate::{
    form::{AddContactForm, FormField},
    ids::{IdSource, MonotonicIdSource},
    list::{ContactListView, ListAction},
    store::{ContactSnapshot, ContactStore},
};

/// The two entries every fresh window starts with.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactId(1), "Yudi Petot", "081234567890"),
        Contact::new(ContactId(2), "Iwung of Drakness", "087654321098"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ContactId),
    Rejected(ValidationError),
}

/// Top-level owner of the contact book. The form and the list never touch
/// the store directly: form edits and submits go through `edit_field` and
/// `submit_form`, and a row's delete control hands its `ListAction` to
/// `apply_list_action`.
pub struct ContactsContainer {
    store: ContactStore,
    form: AddContactForm,
    ids: Box<dyn IdSource>,
}

impl ContactsContainer {
    /// Seeded container with wall-clock ids that stay above the seed ids.
    pub fn new() -> Self {
        Self::with_contacts(seed_contacts())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let floor = contacts
            .iter()
            .map(|contact| contact.id)
            .max()
            .unwrap_or(ContactId(0));
        Self::with_id_source(contacts, MonotonicIdSource::starting_after(floor))
    }

    pub fn with_id_source(contacts: Vec<Contact>, ids: impl IdSource + 'static) -> Self {
        info!(seeded = contacts.len(), "contact book initialized");
        Self {
            store: ContactStore::new(contacts),
            form: AddContactForm::new(),
            ids: Box::new(ids),
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn form(&self) -> &AddContactForm {
        &self.form
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        self.store.snapshot()
    }

    pub fn list_view(&self) -> ContactListView {
        ContactListView::from_snapshot(&self.store.snapshot())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ContactSnapshot) + 'static) {
        self.store.subscribe(listener);
    }

    pub fn edit_field(&mut self, field: FormField, value: String) {
        self.form.edit(field, value);
    }

    pub fn edit_name(&mut self, value: impl Into<String>) {
        self.form.set_name(value);
    }

    pub fn edit_phone(&mut self, value: impl Into<String>) {
        self.form.set_phone(value);
    }

    pub fn submit_form(&mut self) -> SubmitOutcome {
        let store = &mut self.store;
        match self.form.submit(self.ids.as_mut(), |contact| {
            store.add(contact);
        }) {
            Ok(id) => SubmitOutcome::Added(id),
            Err(err) => SubmitOutcome::Rejected(err),
        }
    }

    pub fn apply_list_action(&mut self, action: ListAction) -> ContactSnapshot {
        match action {
            ListAction::Delete(id) => self.delete(id),
        }
    }

    pub fn delete(&mut self, id: ContactId) -> ContactSnapshot {
        self.store.remove(id)
    }
}

impl Default for ContactsContainer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/container_tests.rs"]
mod tests;
