//! Events emitted by the contact panels during a frame.

use contacts_core::ListAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    NameEdited(String),
    PhoneEdited(String),
    SubmitRequested,
    /// Forwarded from a contact row; see `ContactRow::delete_action`.
    List(ListAction),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::NameEdited(_) => "name_edited",
            UiEvent::PhoneEdited(_) => "phone_edited",
            UiEvent::SubmitRequested => "submit_requested",
            UiEvent::List(ListAction::Delete(_)) => "delete_requested",
        }
    }
}
