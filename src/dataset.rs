//! In-memory tabular data and the search machinery applied to it.
/// CSV reading and writing for [`table::DataTable`].
pub mod csv_io;
/// Column/substring search queries parsed from user input.
pub mod query;
/// The table type itself plus filtered views over it.
pub mod table;

pub use csv_io::{CsvError, read_table, write_table};
pub use query::{ColumnScope, SearchQuery};
pub use table::{DataTable, FilteredView, TableError};
