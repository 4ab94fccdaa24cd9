use std::io::{Read, Seek};

use calamine::{DataType, Range, Reader, Xlsx};
use tracing::debug;

use crate::coord;
use crate::error::{ConsolidateError, Result};
use crate::io::WorkbookSource;
use crate::model::{CellScalar, SumTable};
use crate::report::Reporter;

/// Scans the data sources in order and accumulates every numeric cell value
/// into a [`SumTable`] keyed by (sheet name, A1 coordinate).
///
/// Text, boolean, date, and empty cells never contribute. Source order does
/// not affect the result; it only drives progress reporting. Any source that
/// fails to parse aborts the whole run and discards partial sums.
pub fn aggregate<R: Read + Seek>(
    sources: Vec<WorkbookSource<R>>,
    reporter: &mut dyn Reporter,
) -> Result<SumTable> {
    let source_total = sources.len();
    let mut table = SumTable::new();

    for (index, source) in sources.into_iter().enumerate() {
        let (name, reader) = source.into_parts();
        let mut workbook: Xlsx<_> =
            Xlsx::new(reader).map_err(|error| ConsolidateError::source_read(&name, error))?;

        let sheet_names = workbook.sheet_names().to_vec();
        for sheet_name in &sheet_names {
            let range = match workbook.worksheet_range(sheet_name) {
                Some(range) => range.map_err(|error| ConsolidateError::source_read(&name, error))?,
                None => continue,
            };
            accumulate_sheet(&mut table, sheet_name, &range);
        }

        debug!(source = %name, slots = table.len(), "numeric values accumulated");
        reporter.progress(
            (index + 1) as f64 / source_total as f64,
            &format!("read {name}"),
        );
    }

    Ok(table)
}

fn accumulate_sheet(table: &mut SumTable, sheet_name: &str, range: &Range<DataType>) {
    // Empty sheets have no start position.
    let Some((start_row, start_col)) = range.start() else {
        return;
    };

    for (row_offset, row) in range.rows().enumerate() {
        for (col_offset, value) in row.iter().enumerate() {
            let Some(number) = CellScalar::from(value).as_number() else {
                continue;
            };
            // calamine positions are 0-based; A1 references are 1-based.
            let coordinate = coord::cell_name(
                start_col + col_offset as u32 + 1,
                start_row + row_offset as u32 + 1,
            );
            table.add(sheet_name, &coordinate, number);
        }
    }
}
