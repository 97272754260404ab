use shared::domain::{Contact, ContactId};

use crate::store::ContactSnapshot;

pub const EMPTY_LIST_PLACEHOLDER: &str = "No contacts yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: ContactId,
    pub initial: String,
    pub name: String,
    pub phone: String,
}

impl ContactRow {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            initial: contact.initial(),
            name: contact.name.clone(),
            phone: contact.phone.clone(),
        }
    }

    /// What the row's delete control emits when activated.
    pub fn delete_action(&self) -> ListAction {
        ListAction::Delete(self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Delete(ContactId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListView {
    Empty { placeholder: &'static str },
    Rows(Vec<ContactRow>),
}

impl ContactListView {
    pub fn from_snapshot(snapshot: &ContactSnapshot) -> Self {
        if snapshot.is_empty() {
            return Self::Empty {
                placeholder: EMPTY_LIST_PLACEHOLDER,
            };
        }
        Self::Rows(snapshot.iter().map(ContactRow::from_contact).collect())
    }

    pub fn rows(&self) -> &[ContactRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
