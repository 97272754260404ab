use super::*;
use crate::ids::SequentialIdSource;

fn container() -> ContactsContainer {
    ContactsContainer::with_id_source(
        seed_contacts(),
        SequentialIdSource::starting_at(ContactId(3)),
    )
}

#[test]
fn starts_with_two_seed_contacts() {
    let container = ContactsContainer::new();
    let snapshot = container.snapshot();

    assert_eq!(snapshot.len(), 2);
    assert_eq!(
        snapshot.get(ContactId(1)).map(|c| c.phone.as_str()),
        Some("081234567890")
    );
    assert_eq!(
        snapshot.get(ContactId(2)).map(|c| c.name.as_str()),
        Some("Iwung of Drakness")
    );
}

#[test]
fn default_ids_never_collide_with_seeds() {
    let mut container = ContactsContainer::new();
    for name in ["a", "b", "c"] {
        container.edit_name(name);
        container.edit_phone("1");
        container.submit_form();
    }

    let snapshot = container.snapshot();
    let mut ids: Vec<i64> = snapshot.iter().map(|c| c.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn rejected_submit_leaves_collection_untouched() {
    let mut container = container();
    container.edit_phone("08123");

    let outcome = container.submit_form();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::MissingRequiredFields)
    );
    assert_eq!(container.snapshot().len(), 2);
    assert_eq!(container.store().revision(), 0);
    assert_eq!(container.form().phone(), "08123");
}

#[test]
fn accepted_submit_appends_to_store() {
    let mut container = container();
    container.edit_field(FormField::Name, "Budi".to_string());
    container.edit_field(FormField::Phone, "08123".to_string());

    let outcome = container.submit_form();

    assert_eq!(outcome, SubmitOutcome::Added(ContactId(3)));
    let snapshot = container.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(
        snapshot.last(),
        Some(&Contact::new(ContactId(3), "Budi", "08123"))
    );
    assert_eq!(container.form().name(), "");
    assert_eq!(container.form().phone(), "");
}

#[test]
fn list_delete_action_removes_row() {
    let mut container = container();
    let view = container.list_view();
    let action = view.rows()[0].delete_action();

    let snapshot = container.apply_list_action(action);

    assert_eq!(snapshot.len(), 1);
    assert!(!container.store().contains(ContactId(1)));
}

#[test]
fn deleting_everything_shows_placeholder() {
    let mut container = container();
    container.delete(ContactId(1));
    container.delete(ContactId(2));

    assert!(container.list_view().is_empty());
}
