//! Shared egui UI modules.
/// App state bridged between controller and renderer.
pub mod state;
/// Visual palette and widget styling.
pub mod style;
/// Controller owning the sessions and reacting to UI events.
pub mod controller;
/// The egui renderer itself.
pub mod ui;
