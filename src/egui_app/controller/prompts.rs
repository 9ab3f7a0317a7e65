//! Native dialog helpers.
//!
//! All dialogs are bypassed under `cfg!(test)` so controller flows stay
//! testable; confirmations answer Yes, file pickers answer "cancelled".

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use super::EguiController;

impl EguiController {
    pub(super) fn confirm_warning(&self, title: &str, description: &str) -> bool {
        if cfg!(test) {
            return true;
        }
        matches!(
            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(title)
                .set_description(description)
                .set_buttons(MessageButtons::YesNo)
                .show(),
            MessageDialogResult::Yes
        )
    }

    pub(super) fn show_info(&self, title: &str, description: &str) {
        if cfg!(test) {
            return;
        }
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    pub(super) fn pick_document(&self, title: &str) -> Option<PathBuf> {
        if cfg!(test) {
            return None;
        }
        self.document_dialog(title).pick_file()
    }

    pub(super) fn pick_document_save(&self, title: &str) -> Option<PathBuf> {
        if cfg!(test) {
            return None;
        }
        self.document_dialog(title).save_file()
    }

    pub(super) fn pick_csv_save(&self, title: &str) -> Option<PathBuf> {
        if cfg!(test) {
            return None;
        }
        self.csv_dialog(title).save_file()
    }

    /// Dialog with the editor's document filters, anchored at the last-used
    /// directory.
    fn document_dialog(&self, title: &str) -> FileDialog {
        let mut dialog = FileDialog::new()
            .set_title(title)
            .add_filter(".txt files", &["txt"])
            .add_filter("HTML Files", &["html"])
            .add_filter("Python Files", &["py"])
            .add_filter("All Files", &["*"]);
        if let Some(dir) = self.dialog_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    /// Dialog filtered to CSV files, anchored at the last-used directory.
    fn csv_dialog(&self, title: &str) -> FileDialog {
        let mut dialog = FileDialog::new()
            .set_title(title)
            .add_filter(".csv files", &["csv"]);
        if let Some(dir) = self.dialog_dir() {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }
}
