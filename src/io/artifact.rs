use std::io::Cursor;
use std::path::Path;

use umya_spreadsheet::Spreadsheet;

use crate::error::{ConsolidateError, Result};

/// Serializes the finished output model into an in-memory xlsx byte buffer.
pub fn artifact_bytes(workbook: &Spreadsheet) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(workbook, &mut buffer)
        .map_err(|error| ConsolidateError::ArtifactWrite(error.to_string()))?;
    Ok(buffer.into_inner())
}

/// Serializes the finished output model straight to a file.
pub fn save_artifact(workbook: &Spreadsheet, path: &Path) -> Result<()> {
    let bytes = artifact_bytes(workbook)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
