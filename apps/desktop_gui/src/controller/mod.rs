//! Controller layer: UI events and their orchestration into the contact book.

pub mod events;
pub mod orchestration;
