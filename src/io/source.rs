use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::error::Result;

/// A named, readable workbook container.
///
/// The name travels with the reader so that parse failures can identify the
/// offending source. The hosting layer decides where the bytes come from: a
/// file on disk for the CLI, an in-memory buffer for embedded use and tests.
#[derive(Debug)]
pub struct WorkbookSource<R> {
    name: String,
    reader: R,
}

impl<R: Read + Seek> WorkbookSource<R> {
    /// Wraps an arbitrary reader under the given display name.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }

    /// Display name used in progress labels and error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, R) {
        (self.name, self.reader)
    }
}

impl WorkbookSource<BufReader<File>> {
    /// Opens a workbook file, naming the source after the file name.
    pub fn open(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)?;
        Ok(Self::new(name, BufReader::new(file)))
    }
}

impl WorkbookSource<Cursor<Vec<u8>>> {
    /// Wraps an in-memory workbook buffer.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, Cursor::new(bytes))
    }
}
