//! Queueing UI events and applying them to the contact book on the UI thread.

use contacts_core::{ContactsContainer, FormField, ListAction, SubmitOutcome};
use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    let event_name = event.name();

    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = event_name, "ui event queue full; dropping event");
            *status = "UI event queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(event = event_name, "ui event queue disconnected");
            *status = "UI event processor disconnected; restart the app".to_string();
        }
    }
}

pub fn apply_ui_event(container: &mut ContactsContainer, event: UiEvent, status: &mut String) {
    match event {
        UiEvent::NameEdited(value) => container.edit_field(FormField::Name, value),
        UiEvent::PhoneEdited(value) => container.edit_field(FormField::Phone, value),
        UiEvent::SubmitRequested => match container.submit_form() {
            SubmitOutcome::Added(id) => {
                let snapshot = container.snapshot();
                if let Some(contact) = snapshot.get(id) {
                    *status = format!("Added {}", contact.name);
                }
            }
            // Shown inline by the form; the status line keeps its last message.
            SubmitOutcome::Rejected(_) => {}
        },
        UiEvent::List(action) => {
            let ListAction::Delete(id) = action;
            let removed = container.snapshot().get(id).map(|c| c.name.clone());
            container.apply_list_action(action);
            if let Some(name) = removed {
                *status = format!("Removed {name}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use contacts_core::{seed_contacts, ContactId, SequentialIdSource};
    use crossbeam_channel::bounded;

    use super::*;

    fn container() -> ContactsContainer {
        ContactsContainer::with_id_source(
            seed_contacts(),
            SequentialIdSource::starting_at(ContactId(3)),
        )
    }

    #[test]
    fn full_queue_reports_status_and_drops_event() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::SubmitRequested, &mut status);
        dispatch_ui_event(&tx, UiEvent::List(ListAction::Delete(ContactId(1))), &mut status);

        assert_eq!(status, "UI event queue is full; please retry");
        assert_eq!(rx.try_recv(), Ok(UiEvent::SubmitRequested));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn disconnected_queue_reports_status() {
        let (tx, rx) = bounded::<UiEvent>(4);
        drop(rx);
        let mut status = String::new();

        dispatch_ui_event(&tx, UiEvent::SubmitRequested, &mut status);

        assert!(status.contains("disconnected"));
    }

    #[test]
    fn edits_and_submit_add_a_contact() {
        let mut container = container();
        let mut status = String::new();

        for event in [
            UiEvent::NameEdited("Budi".to_string()),
            UiEvent::PhoneEdited("08123".to_string()),
            UiEvent::SubmitRequested,
        ] {
            apply_ui_event(&mut container, event, &mut status);
        }

        assert_eq!(status, "Added Budi");
        assert_eq!(container.snapshot().len(), 3);
        assert_eq!(container.form().name(), "");
    }

    #[test]
    fn rejected_submit_keeps_status_and_sets_form_error() {
        let mut container = container();
        let mut status = "Ready".to_string();

        apply_ui_event(
            &mut container,
            UiEvent::PhoneEdited("08123".to_string()),
            &mut status,
        );
        apply_ui_event(&mut container, UiEvent::SubmitRequested, &mut status);

        assert_eq!(status, "Ready");
        assert!(container.form().error().is_some());
        assert_eq!(container.snapshot().len(), 2);
    }

    #[test]
    fn delete_reports_removed_name_and_ignores_unknown_ids() {
        let mut container = container();
        let mut status = String::new();

        apply_ui_event(
            &mut container,
            UiEvent::List(ListAction::Delete(ContactId(1))),
            &mut status,
        );
        assert_eq!(status, "Removed Yudi Petot");

        apply_ui_event(
            &mut container,
            UiEvent::List(ListAction::Delete(ContactId(1))),
            &mut status,
        );
        assert_eq!(status, "Removed Yudi Petot");
        assert_eq!(container.snapshot().len(), 1);
    }
}
