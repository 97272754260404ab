use contacts_core::ContactsContainer;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{apply_ui_event, dispatch_ui_event};
use crate::ui::theme::{visuals_for_palette, ContactsPalette};

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

pub struct ContactsApp {
    pub(super) container: ContactsContainer,
    pub(super) ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,

    pub(super) status: String,
    pub(super) palette: ContactsPalette,
    theme_applied: bool,
}

impl ContactsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let container = if settings.seed_contacts {
            ContactsContainer::new()
        } else {
            ContactsContainer::with_contacts(Vec::new())
        };
        Self::with_container(container, Some(cc.egui_ctx.clone()))
    }

    pub fn with_container(mut container: ContactsContainer, repaint: Option<egui::Context>) -> Self {
        container.subscribe(move |snapshot| {
            tracing::debug!(contacts = snapshot.len(), "contact snapshot replaced");
            if let Some(ctx) = &repaint {
                ctx.request_repaint();
            }
        });

        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        Self {
            container,
            ui_tx,
            ui_rx,
            status: "Ready".to_string(),
            palette: ContactsPalette::dark_red(),
            theme_applied: false,
        }
    }

    pub fn container(&self) -> &ContactsContainer {
        &self.container
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub(super) fn dispatch(&mut self, event: UiEvent) {
        dispatch_ui_event(&self.ui_tx, event, &mut self.status);
    }

    /// Drains everything the panels queued during this frame, in order.
    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.container, event, &mut self.status);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            ctx.set_visuals(visuals_for_palette(&self.palette));
            self.theme_applied = true;
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.apply_theme_if_needed(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.label(
                egui::RichText::new(&self.status)
                    .small()
                    .color(self.palette.muted_text),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail = ui.available_width();
                    let card_width = avail.clamp(320.0, 640.0);
                    ui.vertical_centered(|ui| {
                        ui.set_width(card_width);
                        ui.add_space(18.0);
                        self.show_header(ui);
                        ui.add_space(18.0);
                        self.show_add_contact_form(ui);
                        ui.add_space(16.0);
                        self.show_contact_list(ui);
                        ui.add_space(18.0);
                    });
                });
        });

        self.process_ui_events();
    }
}

impl eframe::App for ContactsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use contacts_core::{seed_contacts, ContactId, ListAction, SequentialIdSource};

    use super::*;

    fn app() -> ContactsApp {
        ContactsApp::with_container(
            ContactsContainer::with_id_source(
                seed_contacts(),
                SequentialIdSource::starting_at(ContactId(3)),
            ),
            None,
        )
    }

    #[test]
    fn queued_events_apply_in_order_when_drained() {
        let mut app = app();
        app.dispatch(UiEvent::NameEdited("Citra".to_string()));
        app.dispatch(UiEvent::PhoneEdited("0899".to_string()));
        app.dispatch(UiEvent::SubmitRequested);
        app.dispatch(UiEvent::List(ListAction::Delete(ContactId(1))));

        assert_eq!(app.container().snapshot().len(), 2);
        app.process_ui_events();

        let names: Vec<String> = app
            .container()
            .snapshot()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["Iwung of Drakness", "Citra"]);
        assert_eq!(app.status(), "Removed Yudi Petot");
    }

    #[test]
    fn renders_a_frame_with_seeded_and_empty_books() {
        let ctx = egui::Context::default();
        let mut app = app();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));

        app.dispatch(UiEvent::List(ListAction::Delete(ContactId(1))));
        app.dispatch(UiEvent::List(ListAction::Delete(ContactId(2))));
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));

        assert!(app.container().list_view().is_empty());
    }
}
