//! The CSV viewer's session state.
//!
//! Owns the droppable file list, the loaded table plus its filtered view and
//! any in-progress cell edit. Everything the GUI mutates lives here so the
//! flow is testable without a window.

use std::path::{Path, PathBuf};

use crate::dataset::{
    ColumnScope, CsvError, DataTable, FilteredView, SearchQuery, TableError, read_table,
    write_table,
};
use crate::drop_payload::{PayloadError, split_payload};

/// One row of the droppable file list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Display name, the path's file name.
    pub name: String,
    /// Full path the entry was dropped with.
    pub path: PathBuf,
}

/// A short-lived inline cell edit.
///
/// Created on double-click, consumed on commit or cancel. Positions refer to
/// the backing table, not the visible view, so a commit made while a filter
/// is active still writes through to the master data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellEdit {
    /// Backing row index in the loaded table.
    pub row: usize,
    /// Backing column index in the loaded table.
    pub column: usize,
    /// Text in progress.
    pub text: String,
    /// Whether the editor widget still needs focus and select-all.
    pub take_focus: bool,
}

/// A loaded table together with its current visible view.
#[derive(Clone, Debug, Default)]
pub struct LoadedTable {
    /// The backing table.
    pub table: DataTable,
    /// The visible subset.
    pub view: FilteredView,
}

/// Session state for the CSV viewer.
#[derive(Debug, Default)]
pub struct CsvWorkspace {
    files: Vec<FileEntry>,
    loaded: Option<LoadedTable>,
    /// In-progress inline edit, if any.
    pub edit: Option<CellEdit>,
    scope: ColumnScope,
}

impl CsvWorkspace {
    /// Fresh workspace with an empty file list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of the file list in insertion order.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// The loaded table and view, if a file has been loaded.
    pub fn loaded(&self) -> Option<&LoadedTable> {
        self.loaded.as_ref()
    }

    /// Current column scope for searches.
    pub fn scope(&self) -> ColumnScope {
        self.scope
    }

    /// Change the column scope used by subsequent searches.
    pub fn set_scope(&mut self, scope: ColumnScope) {
        self.scope = scope;
    }

    /// Add paths from a textual drop payload. Returns how many entries the
    /// file list gained.
    pub fn add_payload(&mut self, raw: &str) -> Result<usize, PayloadError> {
        let tokens = split_payload(raw)?;
        Ok(self.add_paths(tokens.into_iter().map(PathBuf::from)))
    }

    /// Add dropped paths, keeping only `.csv` files and deduplicating by
    /// display name. Returns how many entries the file list gained.
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        let mut added = 0;
        for path in paths {
            if !path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            if self.files.iter().any(|entry| entry.name == name) {
                continue;
            }
            self.files.push(FileEntry { name, path });
            added += 1;
        }
        added
    }

    /// Load the file at a list index into a fresh table with an unfiltered
    /// view. A read failure leaves any previously loaded table untouched.
    pub fn load_index(&mut self, index: usize) -> Result<&FileEntry, CsvError> {
        let Some(entry) = self.files.get(index) else {
            // Out-of-range double clicks are ignored upstream; nothing to load.
            return Err(CsvError::Read {
                path: PathBuf::new(),
                source: csv::Error::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no file list entry at that index",
                )),
            });
        };
        let table = read_table(&entry.path)?;
        let view = table.full_view();
        self.loaded = Some(LoadedTable { table, view });
        self.edit = None;
        Ok(&self.files[index])
    }

    /// Apply a search entry to the loaded table.
    ///
    /// An empty entry resets to the unfiltered view rather than matching
    /// everything. Does nothing when no table is loaded.
    pub fn apply_search(&mut self, entry: &str) -> Result<(), TableError> {
        let scope = self.scope;
        let Some(loaded) = self.loaded.as_mut() else {
            return Ok(());
        };
        let query = SearchQuery::parse(entry);
        loaded.view = if entry.is_empty() {
            loaded.table.full_view()
        } else {
            loaded.table.filter(&query, scope)?
        };
        self.edit = None;
        Ok(())
    }

    /// Begin editing the cell at a visible view position. The edit is
    /// prefilled with the current cell text and asks for focus.
    pub fn begin_edit(&mut self, visible_row: usize, visible_column: usize) {
        let Some(loaded) = self.loaded.as_ref() else {
            return;
        };
        let Some(&row) = loaded.view.rows.get(visible_row) else {
            return;
        };
        let Some(&column) = loaded.view.columns.get(visible_column) else {
            return;
        };
        let text = loaded.table.cell(row, column).unwrap_or_default().to_string();
        self.edit = Some(CellEdit {
            row,
            column,
            text,
            take_focus: true,
        });
    }

    /// Commit the in-progress edit, writing the text through to the backing
    /// table. The active view keeps its row set; filters are not re-applied.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.table.set_cell(edit.row, edit.column, edit.text);
        }
    }

    /// Abandon the in-progress edit.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Write the full backing table (not just the visible view) to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), CsvError> {
        let Some(loaded) = self.loaded.as_ref() else {
            return Ok(());
        };
        write_table(&loaded.table, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn dropped_payload_keeps_only_csv_files() {
        let mut workspace = CsvWorkspace::new();
        let added = workspace
            .add_payload("{/tmp/a b.csv} /tmp/c.csv /tmp/readme.txt")
            .unwrap();
        assert_eq!(added, 2);
        let names: Vec<&str> = workspace.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a b.csv", "c.csv"]);
    }

    #[test]
    fn duplicate_display_names_are_skipped() {
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([PathBuf::from("/tmp/data.csv")]);
        let added = workspace.add_paths([PathBuf::from("/other/data.csv")]);
        assert_eq!(added, 0);
        assert_eq!(workspace.files().len(), 1);
    }

    #[test]
    fn load_failure_keeps_previous_table() {
        let dir = tempdir().unwrap();
        let good = write_csv(dir.path(), "good.csv", "a\n1\n");
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([good, dir.path().join("missing.csv")]);
        workspace.load_index(0).unwrap();
        assert!(workspace.load_index(1).is_err());
        let loaded = workspace.loaded().unwrap();
        assert_eq!(loaded.table.columns(), ["a"]);
    }

    #[test]
    fn search_filters_and_empty_entry_resets() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", "country,year\nPH,2020\nSE,2021\n");
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([path]);
        workspace.load_index(0).unwrap();

        workspace.apply_search("country=PH").unwrap();
        assert_eq!(workspace.loaded().unwrap().view.rows, vec![0]);

        workspace.apply_search("").unwrap();
        assert_eq!(workspace.loaded().unwrap().view.rows, vec![0, 1]);
    }

    #[test]
    fn unknown_column_search_surfaces_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", "a\n1\n");
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([path]);
        workspace.load_index(0).unwrap();
        assert_eq!(
            workspace.apply_search("missing=x"),
            Err(TableError::UnknownColumn("missing".into()))
        );
    }

    #[test]
    fn edit_under_filter_writes_through_to_backing_row() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "data.csv",
            "country,year\nPH,2020\nSE,2021\nPH,2022\n",
        );
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([path]);
        workspace.load_index(0).unwrap();
        workspace.apply_search("country=PH").unwrap();

        // Second visible row is backing row 2.
        workspace.begin_edit(1, 1);
        let edit = workspace.edit.as_mut().unwrap();
        assert_eq!(edit.text, "2022");
        edit.text = "2030".to_string();
        workspace.commit_edit();

        workspace.apply_search("").unwrap();
        let loaded = workspace.loaded().unwrap();
        assert_eq!(loaded.view.rows.len(), 3);
        assert_eq!(loaded.table.cell(2, 1), Some("2030"));
        assert_eq!(loaded.table.cell(1, 1), Some("2021"));
    }

    #[test]
    fn cancel_edit_leaves_table_unchanged() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", "a\n1\n");
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([path]);
        workspace.load_index(0).unwrap();
        workspace.begin_edit(0, 0);
        workspace.edit.as_mut().unwrap().text = "changed".to_string();
        workspace.cancel_edit();
        assert_eq!(workspace.loaded().unwrap().table.cell(0, 0), Some("1"));
    }

    #[test]
    fn save_writes_all_backing_rows_even_when_filtered() {
        let dir = tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", "country,year\nPH,2020\nSE,2021\n");
        let mut workspace = CsvWorkspace::new();
        workspace.add_paths([path]);
        workspace.load_index(0).unwrap();
        workspace.apply_search("country=PH").unwrap();

        let out = dir.path().join("out.csv");
        workspace.save_to(&out).unwrap();
        let written = read_table(&out).unwrap();
        assert_eq!(written.row_count(), 2);
    }
}
