//! UI layer: app shell, the add-contact and contact-list panels, and theme.

pub mod app;
mod panels;
pub mod theme;

pub use app::ContactsApp;
