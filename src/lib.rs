//! Library exports for reuse in the binaries and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Keyword search over the editor buffer.
pub mod buffer_search;
/// Persisted preferences.
pub mod config;
/// Tabular data, queries and CSV I/O.
pub mod dataset;
/// The text editor's session state.
pub mod document;
/// Drag-and-drop payload parsing.
pub mod drop_payload;
/// Shared egui UI modules.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// The CSV viewer's session state.
pub mod workspace;
