use super::*;
use crate::ids::SequentialIdSource;

fn ids() -> SequentialIdSource {
    SequentialIdSource::starting_at(ContactId(100))
}

#[test]
fn submit_with_empty_name_sets_error_and_keeps_fields() {
    let mut form = AddContactForm::new();
    form.set_phone("08123");
    let mut added = Vec::new();

    let result = form.submit(&mut ids(), |contact| added.push(contact));

    assert_eq!(result, Err(ValidationError::MissingRequiredFields));
    assert_eq!(
        form.error_message().as_deref(),
        Some("Name and phone number are required")
    );
    assert!(added.is_empty());
    assert_eq!(form.name(), "");
    assert_eq!(form.phone(), "08123");
}

#[test]
fn submit_with_empty_phone_is_rejected() {
    let mut form = AddContactForm::new();
    form.set_name("Budi");

    let result = form.submit(&mut ids(), |_| panic!("must not add"));

    assert!(result.is_err());
    assert_eq!(form.name(), "Budi");
}

#[test]
fn valid_submit_forwards_contact_and_resets_fields() {
    let mut form = AddContactForm::new();
    form.set_name("Budi");
    form.set_phone("08123");
    let mut added = Vec::new();

    let id = form
        .submit(&mut ids(), |contact| added.push(contact))
        .expect("valid submit");

    assert_eq!(id, ContactId(100));
    assert_eq!(added, vec![Contact::new(ContactId(100), "Budi", "08123")]);
    assert_eq!(form.name(), "");
    assert_eq!(form.phone(), "");
    assert_eq!(form.error(), None);
}

#[test]
fn whitespace_only_fields_pass_validation() {
    let mut form = AddContactForm::new();
    form.set_name(" ");
    form.set_phone("\t");
    let mut added = Vec::new();

    form.submit(&mut ids(), |contact| added.push(contact))
        .expect("whitespace counts as filled in");

    assert_eq!(added[0].name, " ");
    assert_eq!(added[0].phone, "\t");
}

#[test]
fn typing_after_failed_submit_clears_error_without_resubmitting() {
    let mut form = AddContactForm::new();
    form.set_phone("08123");
    let _ = form.submit(&mut ids(), |_| {});
    assert!(form.error().is_some());

    form.set_name("B");

    assert_eq!(form.error(), None);
}

#[test]
fn unchanged_edit_does_not_clear_error() {
    let mut form = AddContactForm::new();
    form.set_phone("08123");
    let _ = form.submit(&mut ids(), |_| {});

    form.set_phone("08123");

    assert!(form.error().is_some());
}

#[test]
fn edit_leaving_both_fields_empty_keeps_error() {
    let mut form = AddContactForm::new();
    form.set_name("B");
    let _ = form.submit(&mut ids(), |_| {});
    assert!(form.error().is_some());

    form.edit(FormField::Name, String::new());

    assert!(form.error().is_some());
    assert_eq!(form.name(), "");
}

#[test]
fn filling_the_missing_field_clears_error() {
    let mut form = AddContactForm::new();
    form.set_name("B");
    let _ = form.submit(&mut ids(), |_| {});

    form.set_phone("0");

    assert_eq!(form.error(), None);
    assert_eq!(form.name(), "B");
}

#[test]
fn successful_submit_clears_previous_error() {
    let mut form = AddContactForm::new();
    let _ = form.submit(&mut ids(), |_| {});
    assert!(form.error().is_some());

    form.set_name("Citra");
    form.set_phone("0899");
    form.submit(&mut ids(), |_| {}).expect("valid submit");

    assert_eq!(form.error(), None);
}
