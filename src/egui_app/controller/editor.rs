//! Editor workspace actions: the document lifecycle, the internal
//! cut/copy/paste buffer and the keyword search panel.

use super::{EguiController, StatusTone};
use crate::buffer_search;

impl EguiController {
    /// Open a document chosen through the native open dialog.
    pub fn open_text_file(&mut self) {
        let Some(path) = self.pick_document("Open File") else {
            return;
        };
        self.remember_dialog_dir(&path);
        match self.document.open(path.clone()) {
            Ok(()) => {
                self.set_status(path.display().to_string(), StatusTone::Info);
            }
            Err(err) => {
                self.show_info("Open failed", &err.to_string());
                self.set_status(err.to_string(), StatusTone::Error);
            }
        }
    }

    /// Clear the buffer and forget the open path.
    pub fn new_file(&mut self) {
        self.document.new_file();
        self.set_status("New File", StatusTone::Idle);
    }

    /// Save to the open path, falling through to Save As for a never-saved
    /// buffer.
    pub fn save_file(&mut self) {
        let Some(path) = self.document.path().map(|p| p.to_path_buf()) else {
            self.save_file_as();
            return;
        };
        match self.document.save_to(path.clone()) {
            Ok(()) => self.set_status(format!("Saved: {}", path.display()), StatusTone::Info),
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Save to a path chosen through the native save dialog.
    pub fn save_file_as(&mut self) {
        let Some(path) = self.pick_document_save("Save File as") else {
            return;
        };
        self.remember_dialog_dir(&path);
        match self.document.save_to(path.clone()) {
            Ok(()) => self.set_status(format!("Saved: {}", path.display()), StatusTone::Info),
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Delete the open file after confirmation.
    ///
    /// With no open path, or a path that no longer exists, an informational
    /// dialog reports there is nothing to delete.
    pub fn delete_file(&mut self) {
        let Some(path) = self.document.path().map(|p| p.to_path_buf()) else {
            self.show_info(
                "File not found",
                "The file you are trying to delete does not exist",
            );
            return;
        };
        if !path.exists() {
            self.show_info(
                "File not found",
                "The file you are trying to delete does not exist",
            );
            return;
        }
        let file_name = self.document.display_name();
        let directory = path
            .parent()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        if !self.confirm_warning(
            "Delete?",
            &format!("Do you really want to delete \"{file_name}\" from {directory}?"),
        ) {
            return;
        }
        match self.document.delete_open_file() {
            Ok(_) => {
                self.set_status("New File", StatusTone::Info);
                self.show_info(
                    "Message",
                    &format!("Successfully deleted \"{file_name}\" from {directory}."),
                );
            }
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Cut the tracked selection into the internal paste buffer.
    pub fn cut_selection(&mut self) {
        if let Some((start, end)) = self.ui.editor.selection.take() {
            self.document.cut_range(start, end);
            self.ui.editor.cursor = start;
        }
    }

    /// Copy the tracked selection into the internal paste buffer.
    pub fn copy_selection(&mut self) {
        if let Some((start, end)) = self.ui.editor.selection {
            self.document.copy_range(start, end);
        }
    }

    /// Insert the internal paste buffer at the tracked cursor.
    pub fn paste_at_cursor(&mut self) {
        let cursor = self.ui.editor.cursor;
        if let Some(next) = self.document.paste_at(cursor) {
            self.ui.editor.cursor = next;
        }
    }

    /// Run the keyword search over the buffer and render the results panel.
    pub fn run_buffer_search(&mut self) {
        let entry = self.ui.editor.search_entry.clone();
        let mode = self.ui.editor.match_mode;
        match buffer_search::search(self.document.buffer(), &entry, mode) {
            Ok(report) => {
                self.set_status(
                    format!("Sentence matches: {}", report.sentence_matches()),
                    StatusTone::Info,
                );
                self.ui.editor.results = report.render();
            }
            Err(err) => self.set_status(format!("Search failed: {err}"), StatusTone::Error),
        }
    }

    /// Empty the results panel.
    pub fn clear_search_results(&mut self) {
        self.ui.editor.results.clear();
    }

    /// Export the rendered search results through the save dialog.
    pub fn export_search_results(&mut self) {
        if self.ui.editor.results.is_empty() {
            self.set_status("Nothing to export", StatusTone::Warning);
            return;
        }
        let Some(path) = self.pick_document_save("Export Search Results") else {
            return;
        };
        self.remember_dialog_dir(&path);
        match std::fs::write(&path, &self.ui.editor.results) {
            Ok(()) => self.set_status(format!("Exported: {}", path.display()), StatusTone::Info),
            Err(err) => self.set_status(
                format!("Failed to export {}: {err}", path.display()),
                StatusTone::Error,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::state::ActiveView;
    use tempfile::tempdir;

    fn controller() -> EguiController {
        EguiController::new(ActiveView::Editor)
    }

    #[test]
    fn save_without_open_path_needs_a_dialog_path() {
        // A never-saved buffer has no target; the dialog is skipped in tests,
        // so the buffer must stay unsaved.
        let mut controller = controller();
        controller.document.buffer_mut().push_str("draft");
        controller.save_file();
        assert!(controller.document.path().is_none());
    }

    #[test]
    fn delete_after_new_file_touches_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keep.txt");
        std::fs::write(&path, "keep").unwrap();
        let mut controller = controller();
        controller.document.open(path.clone()).unwrap();
        controller.new_file();
        controller.delete_file();
        assert!(path.exists());
    }

    #[test]
    fn delete_with_open_file_removes_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.txt");
        std::fs::write(&path, "bye").unwrap();
        let mut controller = controller();
        controller.document.open(path.clone()).unwrap();
        controller.delete_file();
        assert!(!path.exists());
        assert!(controller.document.path().is_none());
    }

    #[test]
    fn cut_and_paste_go_through_the_session_buffer() {
        let mut controller = controller();
        controller.document.buffer_mut().push_str("hello world");
        controller.ui.editor.selection = Some((5, 11));
        controller.cut_selection();
        assert_eq!(controller.document.buffer(), "hello");

        controller.ui.editor.cursor = 0;
        controller.paste_at_cursor();
        assert_eq!(controller.document.buffer(), " worldhello");
        assert_eq!(controller.ui.editor.cursor, 6);
    }

    #[test]
    fn buffer_search_renders_results_and_clear_empties_them() {
        let mut controller = controller();
        controller
            .document
            .buffer_mut()
            .push_str("The fox ran. Nothing here.");
        controller.ui.editor.search_entry = "fox".to_string();
        controller.run_buffer_search();
        assert!(controller.ui.editor.results.contains("The fox ran."));
        controller.clear_search_results();
        assert!(controller.ui.editor.results.is_empty());
    }
}
