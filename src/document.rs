//! The text editor's session state.
//!
//! Replaces ad hoc "is a file open" / "is text selected" flags with one
//! explicit object: the buffer, the path it came from (if any) and the
//! internal cut/copy buffer. All file access is synchronous.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by document file operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file into the buffer.
    #[error("Failed to open {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the buffer out.
    #[error("Failed to save {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to remove the open file from disk.
    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Buffer text, the backing file path and the internal paste buffer.
#[derive(Debug, Default)]
pub struct DocumentSession {
    buffer: String,
    open_path: Option<PathBuf>,
    paste_buffer: Option<String>,
}

impl DocumentSession {
    /// Fresh session with an empty, unsaved buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Mutable buffer handle for the text widget.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Path of the open file, `None` for a never-saved buffer.
    pub fn path(&self) -> Option<&Path> {
        self.open_path.as_deref()
    }

    /// File name for the window title, or "New File" for an unsaved buffer.
    pub fn display_name(&self) -> String {
        self.open_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "New File".to_string())
    }

    /// Text currently held in the internal paste buffer.
    pub fn paste_buffer(&self) -> Option<&str> {
        self.paste_buffer.as_deref()
    }

    /// Read a file into the buffer and adopt its path.
    pub fn open(&mut self, path: PathBuf) -> Result<(), DocumentError> {
        let text = std::fs::read_to_string(&path).map_err(|source| DocumentError::Read {
            path: path.clone(),
            source,
        })?;
        self.buffer = text;
        self.open_path = Some(path);
        Ok(())
    }

    /// Clear the buffer and forget the open path, so a following delete
    /// cannot touch the previously open file.
    pub fn new_file(&mut self) {
        self.buffer.clear();
        self.open_path = None;
    }

    /// Write the buffer to `path` and adopt it as the open path.
    pub fn save_to(&mut self, path: PathBuf) -> Result<(), DocumentError> {
        std::fs::write(&path, &self.buffer).map_err(|source| DocumentError::Write {
            path: path.clone(),
            source,
        })?;
        self.open_path = Some(path);
        Ok(())
    }

    /// Remove the open file from disk and reset to a new buffer.
    ///
    /// Returns the deleted path. Callers must check beforehand that a path is
    /// open and still exists; a session without one deletes nothing.
    pub fn delete_open_file(&mut self) -> Result<Option<PathBuf>, DocumentError> {
        let Some(path) = self.open_path.clone() else {
            return Ok(None);
        };
        std::fs::remove_file(&path).map_err(|source| DocumentError::Delete {
            path: path.clone(),
            source,
        })?;
        self.new_file();
        Ok(Some(path))
    }

    /// Copy the selected character range into the internal paste buffer.
    pub fn copy_range(&mut self, start: usize, end: usize) {
        if let Some(text) = self.slice_chars(start, end) {
            self.paste_buffer = Some(text);
        }
    }

    /// Copy the selected range into the paste buffer, then remove it.
    pub fn cut_range(&mut self, start: usize, end: usize) {
        let Some(text) = self.slice_chars(start, end) else {
            return;
        };
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.buffer.replace_range(byte_start..byte_end, "");
        self.paste_buffer = Some(text);
    }

    /// Insert the paste buffer at a character position, returning the
    /// character position just past the inserted text.
    pub fn paste_at(&mut self, cursor: usize) -> Option<usize> {
        let text = self.paste_buffer.clone()?;
        let offset = self.byte_offset(cursor);
        self.buffer.insert_str(offset, &text);
        Some(cursor + text.chars().count())
    }

    fn slice_chars(&self, start: usize, end: usize) -> Option<String> {
        if start >= end {
            return None;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        (byte_start < byte_end).then(|| self.buffer[byte_start..byte_end].to_string())
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }
}
