use std::collections::HashSet;
use std::io::{Read, Seek};

use tracing::{debug, warn};
use umya_spreadsheet::{Cell, CellRawValue, Spreadsheet, Style, Worksheet};

use crate::coord;
use crate::error::{ConsolidateError, Result};
use crate::io::WorkbookSource;
use crate::model::SumTable;
use crate::report::{CellWriteFailure, ConsolidationReport, Reporter};

/// Rebuilds the template into a brand-new output workbook and injects the
/// accumulated totals wherever a (sheet, coordinate) key matches.
///
/// The output has the template's exact sheet set and order, its merged
/// ranges, column widths, row heights, and per-cell styling. Charts, images,
/// pivot tables, defined names, and formulas are deliberately not carried
/// over. Totals for sheets missing from the template are reported as
/// warnings and dropped; an unwritable single value is skipped and recorded,
/// never fatal.
pub fn reconstruct<R: Read + Seek>(
    template: WorkbookSource<R>,
    sums: &SumTable,
    reporter: &mut dyn Reporter,
) -> Result<(Spreadsheet, ConsolidationReport)> {
    let (name, reader) = template.into_parts();
    let template_book = umya_spreadsheet::reader::xlsx::read_reader(reader, true)
        .map_err(|error| ConsolidateError::source_read(&name, error))?;

    let mut output = umya_spreadsheet::new_file_empty_worksheet();
    let sheet_total = template_book.get_sheet_count();
    for (index, sheet) in template_book.get_sheet_collection().iter().enumerate() {
        copy_sheet(sheet, &mut output)?;
        debug!(sheet = sheet.get_name(), "template sheet copied");
        reporter.progress(
            (index + 1) as f64 / sheet_total.max(1) as f64,
            &format!("copied sheet {}", sheet.get_name()),
        );
    }

    let mut report = ConsolidationReport::default();
    apply_sums(&mut output, sums, reporter, &mut report);

    Ok((output, report))
}

/// Replays one template sheet into a freshly created sheet of the output
/// model: dimensions first, then merge declarations, then cell values and
/// styles. Cells sitting inside a merged range but not at its top-left
/// anchor are not copied individually; recreating the range restores their
/// semantics.
fn copy_sheet(source: &Worksheet, output: &mut Spreadsheet) -> Result<()> {
    let target = output
        .new_sheet(source.get_name())
        .map_err(|_| ConsolidateError::DuplicateSheet(source.get_name().to_string()))?;

    for column in source.get_column_dimensions() {
        let letters = coord::column_letters(*column.get_col_num());
        let copy = target.get_column_dimension_mut(&letters);
        copy.set_width(*column.get_width());
        if *column.get_hidden() {
            copy.set_hidden(true);
        }
    }

    for row in source.get_row_dimensions() {
        let copy = target.get_row_dimension_mut(row.get_row_num());
        copy.set_height(*row.get_height());
        if *row.get_hidden() {
            copy.set_hidden(true);
        }
    }

    let mut merged_secondary: HashSet<(u32, u32)> = HashSet::new();
    for merge in source.get_merge_cells() {
        let range = merge.get_range();
        target.add_merge_cells(range.clone());
        let Some(((start_col, start_row), (end_col, end_row))) = coord::parse_range(&range) else {
            continue;
        };
        for row in start_row..=end_row {
            for col in start_col..=end_col {
                if (col, row) != (start_col, start_row) {
                    merged_secondary.insert((col, row));
                }
            }
        }
    }

    for cell in source.get_cell_collection() {
        let col = *cell.get_coordinate().get_col_num();
        let row = *cell.get_coordinate().get_row_num();
        if merged_secondary.contains(&(col, row)) {
            continue;
        }
        copy_cell(cell, target, col, row);
    }

    Ok(())
}

/// Transfers one cell's literal value and, when the source carries any
/// non-default style, its full style bundle. Formula text is dropped; a
/// formula cell contributes whatever cached value the template stored.
fn copy_cell(cell: &Cell, target: &mut Worksheet, col: u32, row: u32) {
    let style = cell.get_style();
    let styled = *style != Style::default();
    let raw_value = cell.get_raw_value();
    if matches!(raw_value, CellRawValue::Empty) && !styled {
        return;
    }

    let coordinate = coord::cell_name(col, row);
    let copy = target.get_cell_mut(coordinate.as_str());
    match raw_value {
        CellRawValue::Numeric(value) => {
            copy.set_value_number(*value);
        }
        CellRawValue::Bool(value) => {
            copy.set_value_bool(*value);
        }
        CellRawValue::Empty => {}
        _ => {
            copy.set_value_string(cell.get_value().to_string());
        }
    }
    if styled {
        copy.set_style(style.clone());
    }
}

/// Overwrites cell values from the accumulated totals. Styles placed by the
/// structural copy are left untouched; only values change.
fn apply_sums(
    output: &mut Spreadsheet,
    sums: &SumTable,
    reporter: &mut dyn Reporter,
    report: &mut ConsolidationReport,
) {
    for (sheet_name, cells) in sums.iter() {
        let Some(sheet) = output.get_sheet_by_name_mut(sheet_name) else {
            warn!(sheet = sheet_name, "summed sheet missing from template");
            reporter.warning(&format!(
                "sheet '{sheet_name}' exists in the data but not in the template and was ignored"
            ));
            report.orphaned_sheets.push(sheet_name.to_string());
            continue;
        };

        for (coordinate, total) in cells {
            if coord::parse_cell(coordinate).is_none() {
                report.skipped_cells.push(CellWriteFailure {
                    sheet: sheet_name.to_string(),
                    coordinate: coordinate.clone(),
                    reason: "coordinate cannot be addressed".to_string(),
                });
                continue;
            }
            sheet.get_cell_mut(coordinate.as_str()).set_value_number(*total);
        }
    }
}
