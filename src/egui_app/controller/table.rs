//! CSV workspace actions: drops, loads, searches, cell edits and saving.

use std::path::Path;

use super::{EguiController, StatusTone};
use crate::dataset::ColumnScope;

impl EguiController {
    /// Feed native drops into the file list.
    ///
    /// Entries carrying a structured path are used as-is; entries carrying
    /// only a textual payload go through the drop-payload parser. Either way
    /// only `.csv` files are kept and duplicates by display name are skipped.
    pub fn handle_dropped_files(&mut self, dropped: Vec<egui::DroppedFile>) {
        let mut added = 0;
        for file in dropped {
            if let Some(path) = file.path {
                added += self.workspace.add_paths([path]);
            } else if !file.name.is_empty() {
                match self.workspace.add_payload(&file.name) {
                    Ok(count) => added += count,
                    Err(err) => {
                        self.set_status(err.to_string(), StatusTone::Error);
                        return;
                    }
                }
            }
        }
        if added > 0 {
            self.set_status(format!("Added {added} file(s)"), StatusTone::Info);
        } else {
            self.set_status("Drop .csv files onto the file list", StatusTone::Warning);
        }
    }

    /// Load the double-clicked file list entry into the table.
    pub fn load_file_at(&mut self, index: usize) {
        match self.workspace.load_index(index) {
            Ok(entry) => {
                let name = entry.name.clone();
                self.ui.table.selected_file = Some(index);
                self.ui.table.search_entry.clear();
                let rows = self
                    .workspace
                    .loaded()
                    .map(|loaded| loaded.table.row_count())
                    .unwrap_or(0);
                self.set_status(format!("Loaded {name} ({rows} rows)"), StatusTone::Info);
            }
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Apply the search entry; an empty entry resets to the unfiltered view.
    pub fn run_table_search(&mut self) {
        let entry = self.ui.table.search_entry.clone();
        match self.workspace.apply_search(&entry) {
            Ok(()) => {
                if entry.is_empty() {
                    self.set_status("Filter cleared", StatusTone::Idle);
                } else {
                    let visible = self
                        .workspace
                        .loaded()
                        .map(|loaded| loaded.view.rows.len())
                        .unwrap_or(0);
                    self.set_status(format!("{visible} row(s) match"), StatusTone::Info);
                }
            }
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Change the column scope and re-run the current search.
    pub fn set_column_scope(&mut self, scope: ColumnScope) {
        if self.workspace.scope() == scope {
            return;
        }
        self.workspace.set_scope(scope);
        if !self.ui.table.search_entry.is_empty() {
            self.run_table_search();
        }
    }

    /// Write the full backing table to a path chosen via the save dialog.
    pub fn save_table_as(&mut self) {
        if self.workspace.loaded().is_none() {
            self.set_status("Nothing to save", StatusTone::Warning);
            return;
        }
        let Some(path) = self.pick_csv_save("Save File as") else {
            return;
        };
        self.remember_dialog_dir(&path);
        match self.workspace.save_to(&path) {
            Ok(()) => self.set_status(format!("Saved: {}", path.display()), StatusTone::Info),
            Err(err) => self.set_status(err.to_string(), StatusTone::Error),
        }
    }

    /// Open the folder containing a file list entry in the OS explorer.
    pub fn reveal_in_folder(&mut self, index: usize) {
        let Some(folder) = self
            .workspace
            .files()
            .get(index)
            .and_then(|entry| entry.path.parent())
            .map(|dir| dir.to_path_buf())
        else {
            return;
        };
        if let Err(err) = open_folder(&folder) {
            self.set_status(
                format!("Could not open {}: {err}", folder.display()),
                StatusTone::Error,
            );
        }
    }
}

fn open_folder(folder: &Path) -> std::io::Result<()> {
    open::that(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::state::ActiveView;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn controller() -> EguiController {
        EguiController::new(ActiveView::CsvViewer)
    }

    fn drop_with_path(path: PathBuf) -> egui::DroppedFile {
        egui::DroppedFile {
            path: Some(path),
            ..Default::default()
        }
    }

    fn drop_with_payload(payload: &str) -> egui::DroppedFile {
        egui::DroppedFile {
            name: payload.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn structured_and_textual_drops_both_land_in_the_list() {
        let mut controller = controller();
        controller.handle_dropped_files(vec![
            drop_with_path(PathBuf::from("/tmp/a.csv")),
            drop_with_payload("{/tmp/b c.csv} /tmp/readme.txt"),
        ]);
        let names: Vec<&str> = controller
            .workspace
            .files()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["a.csv", "b c.csv"]);
    }

    #[test]
    fn load_search_and_reset_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "country,year\nPH,2020\nSE,2021\n").unwrap();
        let mut controller = controller();
        controller.handle_dropped_files(vec![drop_with_path(path)]);
        controller.load_file_at(0);

        controller.ui.table.search_entry = "country=PH".to_string();
        controller.run_table_search();
        assert_eq!(
            controller.workspace.loaded().unwrap().view.rows,
            vec![0]
        );

        controller.ui.table.search_entry.clear();
        controller.run_table_search();
        assert_eq!(
            controller.workspace.loaded().unwrap().view.rows,
            vec![0, 1]
        );
    }

    #[test]
    fn unknown_column_surfaces_in_the_status_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a\n1\n").unwrap();
        let mut controller = controller();
        controller.handle_dropped_files(vec![drop_with_path(path)]);
        controller.load_file_at(0);
        controller.ui.table.search_entry = "missing=x".to_string();
        controller.run_table_search();
        assert!(controller.ui.status.text.contains("missing"));
    }
}
