//! UI state shared between the controller and the renderer.

use egui::Color32;

use crate::buffer_search::MatchMode;
use crate::egui_app::style;

/// Which workspace the main window currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// The plain-text editor.
    #[default]
    Editor,
    /// The CSV viewer.
    CsvViewer,
}

/// Status bar contents.
#[derive(Clone, Debug)]
pub struct StatusBarState {
    /// Status line text.
    pub text: String,
    /// Badge label next to the text.
    pub badge_label: String,
    /// Badge color matching the current tone.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Neutral startup status.
    pub fn idle() -> Self {
        Self {
            text: "New File".to_string(),
            badge_label: "Idle".to_string(),
            badge_color: style::palette().bg_tertiary,
        }
    }
}

/// Transient widget state for the editor workspace.
#[derive(Clone, Debug, Default)]
pub struct EditorPanelState {
    /// Comma-separated keyword entry for the buffer search.
    pub search_entry: String,
    /// Case handling for the buffer search.
    pub match_mode: MatchMode,
    /// Rendered search results, empty when cleared.
    pub results: String,
    /// Last known selection of the text widget, as character indices.
    pub selection: Option<(usize, usize)>,
    /// Last known cursor position of the text widget, as a character index.
    pub cursor: usize,
}

/// Transient widget state for the CSV workspace.
#[derive(Clone, Debug, Default)]
pub struct TablePanelState {
    /// The `col=val,col=val` search entry.
    pub search_entry: String,
    /// Highlighted row of the file list.
    pub selected_file: Option<usize>,
}

/// Aggregate UI state.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Active workspace.
    pub active: ActiveView,
    /// Status bar contents.
    pub status: StatusBarState,
    /// Editor workspace widget state.
    pub editor: EditorPanelState,
    /// CSV workspace widget state.
    pub table: TablePanelState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active: ActiveView::default(),
            status: StatusBarState::idle(),
            editor: EditorPanelState::default(),
            table: TablePanelState::default(),
        }
    }
}
