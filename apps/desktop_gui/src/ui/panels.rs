//! Header, add-contact form and contact list panels.

use contacts_core::{ContactListView, ContactRow};
use eframe::egui;

use crate::controller::events::UiEvent;
use crate::ui::app::ContactsApp;
use crate::ui::theme::lighten_color;

const AVATAR_SIZE: f32 = 40.0;

/// What the add form's widgets reported during one frame.
#[derive(Debug, Default)]
struct FormInteraction {
    name_edit: Option<String>,
    phone_edit: Option<String>,
    enter_in_field: bool,
    submit_clicked: bool,
}

impl FormInteraction {
    /// Edits come before the submit so a value typed in the same frame is
    /// part of the submission.
    fn into_events(self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(name) = self.name_edit {
            events.push(UiEvent::NameEdited(name));
        }
        if let Some(phone) = self.phone_edit {
            events.push(UiEvent::PhoneEdited(phone));
        }
        if self.submit_clicked || self.enter_in_field {
            events.push(UiEvent::SubmitRequested);
        }
        events
    }
}

fn row_event(row: &ContactRow, delete_clicked: bool) -> Option<UiEvent> {
    delete_clicked.then(|| UiEvent::List(row.delete_action()))
}

impl ContactsApp {
    fn card_frame(&self) -> egui::Frame {
        egui::Frame::NONE
            .fill(self.palette.card_background)
            .corner_radius(12.0)
            .stroke(egui::Stroke::new(1.0, self.palette.card_stroke))
            .inner_margin(egui::Margin::symmetric(20, 18))
    }

    pub(super) fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("📱 Contacts")
                    .size(30.0)
                    .strong()
                    .color(self.palette.title_text),
            );
            ui.label(
                egui::RichText::new("Manage names and phone numbers").color(self.palette.muted_text),
            );
        });
    }

    fn form_text_field(
        &self,
        ui: &mut egui::Ui,
        id: &'static str,
        hint: &str,
        value: &mut String,
    ) -> egui::Response {
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(egui::RichText::new(hint).color(self.palette.muted_text))
            .desired_width(f32::INFINITY);
        ui.add_sized([ui.available_width(), 34.0], edit)
    }

    pub(super) fn show_add_contact_form(&mut self, ui: &mut egui::Ui) {
        let mut name = self.container.form().name().to_owned();
        let mut phone = self.container.form().phone().to_owned();
        let error = self.container.form().error_message();
        let mut events = Vec::new();

        self.card_frame().show(ui, |ui| {
            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("👤").color(self.palette.accent).size(18.0));
                ui.label(
                    egui::RichText::new("Add Contact")
                        .size(20.0)
                        .strong()
                        .color(self.palette.title_text),
                );
            });

            if let Some(message) = &error {
                egui::Frame::NONE
                    .fill(self.palette.error_fill)
                    .stroke(egui::Stroke::new(1.0, self.palette.error_stroke))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    });
            }

            let name_resp = self.form_text_field(ui, "contact_name", "Name", &mut name);
            let phone_resp = self.form_text_field(ui, "contact_phone", "Phone number", &mut phone);
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));

            let button = egui::Button::new(
                egui::RichText::new("Add")
                    .strong()
                    .size(16.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(self.palette.accent_strong)
            .min_size(egui::vec2(ui.available_width(), 36.0));

            let interaction = FormInteraction {
                name_edit: name_resp.changed().then(|| name.clone()),
                phone_edit: phone_resp.changed().then(|| phone.clone()),
                enter_in_field: enter_pressed
                    && (name_resp.lost_focus() || phone_resp.lost_focus()),
                submit_clicked: ui.add(button).clicked(),
            };
            events.extend(interaction.into_events());
        });

        for event in events {
            self.dispatch(event);
        }
    }

    pub(super) fn show_contact_list(&mut self, ui: &mut egui::Ui) {
        let view = self.container.list_view();
        let mut events = Vec::new();

        self.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Contact List")
                    .size(20.0)
                    .strong()
                    .color(self.palette.title_text),
            );
            ui.add_space(8.0);

            match &view {
                ContactListView::Empty { placeholder } => {
                    ui.label(egui::RichText::new(*placeholder).color(self.palette.muted_text));
                }
                ContactListView::Rows(rows) => {
                    for row in rows {
                        ui.push_id(row.id.0, |ui| {
                            let delete_clicked = self.contact_row(ui, row);
                            events.extend(row_event(row, delete_clicked));
                        });
                        ui.add_space(6.0);
                    }
                }
            }
        });

        for event in events {
            self.dispatch(event);
        }
    }

    /// Returns true when the row's delete control was clicked.
    fn contact_row(&self, ui: &mut egui::Ui, row: &ContactRow) -> bool {
        let mut delete_clicked = false;

        egui::Frame::NONE
            .fill(self.palette.row_background)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(14, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    self.avatar(ui, &row.initial);
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&row.name)
                                    .strong()
                                    .color(self.palette.body_text),
                            )
                            .selectable(false),
                        );
                        ui.label(
                            egui::RichText::new(&row.phone)
                                .small()
                                .color(self.palette.muted_text),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new(
                            egui::RichText::new("🗑").size(18.0).color(self.palette.accent),
                        )
                        .frame(false);
                        if ui.add(delete).on_hover_text("Delete contact").clicked() {
                            delete_clicked = true;
                        }
                    });
                });
            });

        delete_clicked
    }

    fn avatar(&self, ui: &mut egui::Ui, initial: &str) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, self.palette.accent_strong);
        painter.circle_stroke(
            rect.center(),
            AVATAR_SIZE / 2.0 - 1.0,
            egui::Stroke::new(1.0, lighten_color(self.palette.accent, 0.2)),
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(18.0),
            egui::Color32::WHITE,
        );
    }
}
