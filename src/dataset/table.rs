//! The in-memory table and filtered views over it.

use thiserror::Error;

use super::query::{ColumnScope, SearchQuery};

/// Errors raised while applying a search to a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A constraint named a column the table does not have.
    #[error("No column named '{0}' in the loaded table")]
    UnknownColumn(String),
}

/// An ordered set of named columns plus string-valued rows.
///
/// Rows may be ragged (shorter than the header); a missing cell reads as
/// absent. The table is treated as immutable except for explicit
/// write-through cell edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// The visible subset of a [`DataTable`].
///
/// Every visible row carries its index into the backing table so that cell
/// edits made through the view can be written back to the master data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Indices of the visible columns, in display order.
    pub columns: Vec<usize>,
    /// Backing row index of every visible row, in display order.
    pub rows: Vec<usize>,
}

impl DataTable {
    /// Build a table from a header and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All backing rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of backing rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell text at a backing row/column position, if present.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Write a cell through to the backing row, extending a ragged row so the
    /// target position exists.
    pub fn set_cell(&mut self, row: usize, column: usize, text: String) {
        let Some(cells) = self.rows.get_mut(row) else {
            return;
        };
        if column >= self.columns.len() {
            return;
        }
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = text;
    }

    /// View exposing every row and every column.
    pub fn full_view(&self) -> FilteredView {
        FilteredView {
            columns: (0..self.columns.len()).collect(),
            rows: (0..self.rows.len()).collect(),
        }
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Apply a search query, AND-ing constraints in their iteration order.
    ///
    /// Each constraint keeps only rows whose named cell contains the needle
    /// as a case-sensitive substring. A ragged row with no cell in the named
    /// column never matches. A constraint naming an unknown column is an
    /// error.
    pub fn filter(
        &self,
        query: &SearchQuery,
        scope: ColumnScope,
    ) -> Result<FilteredView, TableError> {
        let mut rows: Vec<usize> = (0..self.rows.len()).collect();
        let mut searched = Vec::new();
        for (column, needle) in query.constraints() {
            let index = self
                .column_index(column)
                .ok_or_else(|| TableError::UnknownColumn(column.to_string()))?;
            if !searched.contains(&index) {
                searched.push(index);
            }
            rows.retain(|&row| {
                self.rows[row]
                    .get(index)
                    .is_some_and(|cell| cell.contains(needle))
            });
        }
        let columns = match scope {
            ColumnScope::AllColumns => (0..self.columns.len()).collect(),
            ColumnScope::SearchedColumns => searched,
        };
        Ok(FilteredView { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["country".into(), "year".into(), "city".into()],
            vec![
                vec!["PH".into(), "2020".into(), "Manila".into()],
                vec!["SE".into(), "2020".into(), "Umea".into()],
                vec!["PH".into(), "2021".into(), "Cebu".into()],
            ],
        )
    }

    #[test]
    fn filter_keeps_substring_matches_only() {
        let table = sample_table();
        let query = SearchQuery::parse("country=PH");
        let view = table.filter(&query, ColumnScope::AllColumns).unwrap();
        assert_eq!(view.rows, vec![0, 2]);
        assert_eq!(view.columns, vec![0, 1, 2]);
    }

    #[test]
    fn constraints_apply_as_logical_and() {
        let table = sample_table();
        let query = SearchQuery::parse("country=PH,year=2020");
        let view = table.filter(&query, ColumnScope::AllColumns).unwrap();
        assert_eq!(view.rows, vec![0]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let table = sample_table();
        let query = SearchQuery::parse("country=ph");
        let view = table.filter(&query, ColumnScope::AllColumns).unwrap();
        assert!(view.rows.is_empty());
    }

    #[test]
    fn unknown_column_is_an_error() {
        let table = sample_table();
        let query = SearchQuery::parse("region=PH");
        assert_eq!(
            table.filter(&query, ColumnScope::AllColumns),
            Err(TableError::UnknownColumn("region".into()))
        );
    }

    #[test]
    fn ragged_row_never_matches_and_never_errors() {
        let table = DataTable::new(
            vec!["country".into(), "year".into()],
            vec![vec!["PH".into(), "2020".into()], vec!["PH".into()]],
        );
        let query = SearchQuery::parse("year=2020");
        let view = table.filter(&query, ColumnScope::AllColumns).unwrap();
        assert_eq!(view.rows, vec![0]);
    }

    #[test]
    fn searched_scope_exposes_only_named_columns() {
        let table = sample_table();
        let query = SearchQuery::parse("year=2020,country=PH");
        let view = table.filter(&query, ColumnScope::SearchedColumns).unwrap();
        assert_eq!(view.columns, vec![1, 0]);
    }

    #[test]
    fn repeated_key_filters_on_last_value() {
        let table = sample_table();
        let query = SearchQuery::parse("country=SE,country=PH");
        let view = table.filter(&query, ColumnScope::AllColumns).unwrap();
        assert_eq!(view.rows, vec![0, 2]);
    }

    #[test]
    fn set_cell_extends_ragged_rows() {
        let mut table = DataTable::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()]],
        );
        table.set_cell(0, 1, "2".into());
        assert_eq!(table.cell(0, 1), Some("2"));
    }

    #[test]
    fn set_cell_ignores_positions_outside_the_header() {
        let mut table = DataTable::new(vec!["a".into()], vec![vec!["1".into()]]);
        table.set_cell(0, 5, "x".into());
        assert_eq!(table.rows()[0].len(), 1);
    }
}
