//! Controller owning the sessions and reacting to UI events.

use egui::Color32;

use crate::config::{self, AppConfig};
use crate::document::DocumentSession;
use crate::egui_app::state::{ActiveView, UiState};
use crate::workspace::CsvWorkspace;

mod editor;
mod prompts;
mod table;

/// Maintains app state and bridges core logic to the egui UI.
pub struct EguiController {
    /// State the renderer reads every frame.
    pub ui: UiState,
    /// The text editor's session.
    pub document: DocumentSession,
    /// The CSV viewer's session.
    pub workspace: CsvWorkspace,
    config: AppConfig,
}

impl EguiController {
    /// Controller booting into the given workspace.
    pub fn new(start: ActiveView) -> Self {
        let ui = UiState {
            active: start,
            ..UiState::default()
        };
        Self {
            ui,
            document: DocumentSession::new(),
            workspace: CsvWorkspace::new(),
            config: AppConfig::default(),
        }
    }

    /// Load persisted preferences.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        self.config = config::load_or_default()?;
        Ok(())
    }

    /// Whether the editor wraps long lines.
    pub fn word_wrap(&self) -> bool {
        self.config.word_wrap
    }

    /// Toggle word wrap and persist the preference.
    pub fn toggle_word_wrap(&mut self) {
        self.config.word_wrap = !self.config.word_wrap;
        self.persist_config("Could not save word wrap preference");
    }

    /// Switch the main window to the CSV viewer workspace.
    pub fn open_csv_viewer(&mut self) {
        self.ui.active = ActiveView::CsvViewer;
        self.set_status("CSV Viewer", StatusTone::Info);
    }

    /// Title for the OS window, following the open document.
    pub fn window_title(&self) -> String {
        match self.ui.active {
            ActiveView::Editor => self.document.display_name(),
            ActiveView::CsvViewer => "CSV Viewer".to_string(),
        }
    }

    /// Ask before closing, honoring the persisted preference.
    pub fn confirm_close(&self) -> bool {
        if !self.config.confirm_on_close {
            return true;
        }
        self.confirm_warning("Close?", "Do you really want to close Text Editor?")
    }

    /// Update the status line and badge.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }

    fn dialog_dir(&self) -> Option<&std::path::Path> {
        self.config.last_dialog_dir.as_deref()
    }

    fn remember_dialog_dir(&mut self, chosen: &std::path::Path) {
        let dir = chosen.parent().map(|p| p.to_path_buf());
        if dir.is_some() && dir != self.config.last_dialog_dir {
            self.config.last_dialog_dir = dir;
            self.persist_config("Could not save dialog directory");
        }
    }

    fn persist_config(&mut self, error_prefix: &str) {
        if let Err(err) = config::save(&self.config) {
            tracing::warn!("{error_prefix}: {err}");
        }
    }
}

/// Severity of a status line update.
#[derive(Clone, Copy, Debug)]
pub enum StatusTone {
    /// Nothing going on.
    Idle,
    /// Informational update after a completed action.
    Info,
    /// Something was skipped or ignored.
    Warning,
    /// An operation failed.
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}
