// ABOUTME: Raw dataset table types holding the header row and untyped cell values
// ABOUTME: Cells are parsed once into numbers, text or empty markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

/// A single raw cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Parsed numeric value
    Number(f64),
    /// Any non-numeric content
    Text(String),
    /// Blank cell
    Empty,
}

impl CellValue {
    /// Classify a trimmed raw field
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::Empty;
        }
        // "nan" and "inf" parse as f64 but are never nutrient values
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(raw.to_owned()),
        }
    }

    /// Numeric value, if the cell holds one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) | Self::Empty => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => Ok(()),
        }
    }
}

/// One data row, cells in header order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    cells: Vec<CellValue>,
}

impl DatasetRow {
    /// Create a row from its cells
    #[must_use]
    pub const fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Cell at a column index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    /// All cells in header order
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

/// Header row plus data rows, read-only after load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetTable {
    headers: Vec<String>,
    rows: Vec<DatasetRow>,
}

impl DatasetTable {
    /// Create a table from headers and rows
    #[must_use]
    pub const fn new(headers: Vec<String>, rows: Vec<DatasetRow>) -> Self {
        Self { headers, rows }
    }

    /// Column headers in file order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order
    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column whose trimmed header equals `name`, ignoring case
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(wanted))
    }

    /// Split into headers and rows
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<DatasetRow>) {
        (self.headers, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_classification() {
        assert_eq!(CellValue::parse(" 12.5 "), CellValue::Number(12.5));
        assert_eq!(CellValue::parse(""), CellValue::Empty);
        assert_eq!(
            CellValue::parse("grilled chicken"),
            CellValue::Text("grilled chicken".to_owned())
        );
    }

    #[test]
    fn test_column_index_ignores_case_and_padding() {
        let table = DatasetTable::new(vec!["food".into(), " Caloric Value ".into()], Vec::new());
        assert_eq!(table.column_index("caloric value"), Some(1));
        assert_eq!(table.column_index("FOOD"), Some(0));
        assert_eq!(table.column_index("Protein"), None);
    }
}
