use std::collections::BTreeMap;

use calamine::DataType;

/// A cell value as observed at the boundary-parsing layer. Data sources are
/// dynamically typed; the aggregator pattern-matches only on [`Number`].
///
/// [`Number`]: CellScalar::Number
#[derive(Debug, Clone, PartialEq)]
pub enum CellScalar {
    /// Integer or floating point cell value.
    Number(f64),
    /// Plain text cell value.
    Text(String),
    /// Boolean cell value. Never summed.
    Boolean(bool),
    /// Empty cell, or a value kind that never contributes to totals
    /// (dates, error cells).
    Empty,
}

impl CellScalar {
    /// Returns the numeric value when the scalar is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellScalar::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&DataType> for CellScalar {
    fn from(value: &DataType) -> Self {
        match value {
            DataType::Int(value) => CellScalar::Number(*value as f64),
            DataType::Float(value) => CellScalar::Number(*value),
            DataType::String(value) => CellScalar::Text(value.clone()),
            DataType::Bool(value) => CellScalar::Boolean(*value),
            _ => CellScalar::Empty,
        }
    }
}

/// Accumulated numeric totals keyed by sheet name and A1 coordinate.
///
/// An entry exists iff at least one data source held a numeric value at that
/// exact (sheet, coordinate) slot; non-numeric values never create entries.
/// The table is fully built by one aggregation run and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SumTable {
    sheets: BTreeMap<String, BTreeMap<String, f64>>,
}

impl SumTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a numeric value to the accumulator at (sheet, coordinate),
    /// creating the slot at zero on first sight.
    pub fn add(&mut self, sheet: &str, coordinate: &str, value: f64) {
        let slot = self
            .sheets
            .entry(sheet.to_string())
            .or_default()
            .entry(coordinate.to_string())
            .or_insert(0.0);
        *slot += value;
    }

    /// Returns the accumulated total at (sheet, coordinate), if any.
    pub fn get(&self, sheet: &str, coordinate: &str) -> Option<f64> {
        self.sheets.get(sheet)?.get(coordinate).copied()
    }

    /// Number of sheets holding at least one total.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Total number of accumulated (sheet, coordinate) slots.
    pub fn len(&self) -> usize {
        self.sheets.values().map(BTreeMap::len).sum()
    }

    /// True when no numeric value was ever accumulated.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Iterates sheets and their coordinate → total maps in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, f64>)> {
        self.sheets.iter().map(|(name, cells)| (name.as_str(), cells))
    }
}
