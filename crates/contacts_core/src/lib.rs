//! In-memory contact book state: the snapshot store, the add form state
//! machine, the list view model and the container that wires them together.

mod container;
mod form;
mod ids;
mod list;
mod store;

pub use container::{seed_contacts, ContactsContainer, SubmitOutcome};
pub use form::{AddContactForm, FormField};
pub use ids::{IdSource, MonotonicIdSource, SequentialIdSource};
pub use list::{ContactListView, ContactRow, ListAction, EMPTY_LIST_PLACEHOLDER};
pub use store::{ContactSnapshot, ContactStore};

pub use shared::{Contact, ContactId, ValidationError};
