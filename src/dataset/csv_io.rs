//! CSV reading and writing via the `csv` crate.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::table::DataTable;

/// Errors raised while moving tables to and from disk.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open or parse a CSV file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: csv::Error,
    },
    /// Failed to serialize or write a CSV file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: csv::Error,
    },
    /// Failed to flush buffered output to disk.
    #[error("Failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a CSV file into a [`DataTable`].
///
/// The first record becomes the column names; every cell is kept as a string
/// and ragged rows are permitted.
pub fn read_table(path: &Path) -> Result<DataTable, CsvError> {
    let read_err = |source| CsvError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;
    let columns = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(DataTable::new(columns, rows))
}

/// Write a full table (header plus all backing rows) to a CSV file.
pub fn write_table(table: &DataTable, path: &Path) -> Result<(), CsvError> {
    let write_err = |source| CsvError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(write_err)?;
    writer.write_record(table.columns()).map_err(write_err)?;
    for row in table.rows() {
        writer.write_record(row).map_err(write_err)?;
    }
    writer.flush().map_err(|source| CsvError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_headers_and_rows_as_strings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "country,year\nPH,2020\nSE,2021\n").unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.columns(), ["country", "year"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.cell(1, 0), Some("SE"));
    }

    #[test]
    fn ragged_rows_are_permitted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n4\n").unwrap();
        let table = read_table(&path).unwrap();
        assert_eq!(table.rows()[1], vec!["4".to_string()]);
    }

    #[test]
    fn written_table_reads_back_with_quoting_intact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = DataTable::new(
            vec!["name".into(), "note".into()],
            vec![vec!["a".into(), "has, comma".into()]],
        );
        write_table(&table, &path).unwrap();
        let reloaded = read_table(&path).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = read_table(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, CsvError::Read { .. }));
    }
}
