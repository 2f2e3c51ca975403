//! Workbook and worksheet access.
//!
//! The extractor only ever sees the [`Sheet`] trait, which hands out typed
//! cell values by 1-based coordinates. The xlsx-backed implementation sits on
//! top of calamine; [`MemorySheet`] backs tests and fixtures.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::errors::{SchemaError, SchemaResult};

/// Marker expected in cell (1, 1) of every worksheet that describes an entity.
pub const SHEET_MARKER: &str = "HOME";

/// A typed cell value as the extractor sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Any other cell kind (formula errors, durations). Never accepted where
    /// a typed value is required.
    Other,
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Read access to one worksheet by 1-based row/column coordinates.
pub trait Sheet {
    fn name(&self) -> &str;

    /// Typed value at (row, column), 1-based. Reads outside the used range
    /// are blank.
    fn cell(&self, row: u32, col: u32) -> CellValue;

    /// Last 1-based row of the used range, 0 for an empty sheet.
    fn last_row(&self) -> u32;
}

/// An xlsx workbook opened from disk.
pub struct Workbook {
    inner: Xlsx<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: &Path) -> SchemaResult<Self> {
        let inner: Xlsx<_> = open_workbook(path).map_err(|e| {
            SchemaError::Workbook(format!("failed to open '{}': {e}", path.display()))
        })?;
        Ok(Self { inner })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// Materialize one worksheet.
    pub fn sheet(&mut self, name: &str) -> SchemaResult<Worksheet> {
        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| SchemaError::Workbook(format!("failed to read sheet '{name}': {e}")))?;
        Ok(Worksheet {
            name: name.to_string(),
            range,
        })
    }

    /// Names of worksheets carrying the [`SHEET_MARKER`] in cell (1, 1) and,
    /// when `include_keywords` is non-empty, containing one of the keywords
    /// case-insensitively in their name. Sorted for stable output.
    pub fn parsable_sheets(&mut self, include_keywords: &[String]) -> SchemaResult<Vec<String>> {
        let mut sheets = Vec::new();
        for name in self.sheet_names() {
            if !include_keywords.is_empty() {
                let lower = name.to_lowercase();
                if !include_keywords
                    .iter()
                    .any(|k| lower.contains(&k.to_lowercase()))
                {
                    continue;
                }
            }
            let sheet = self.sheet(&name)?;
            if sheet.cell(1, 1).as_text() == Some(SHEET_MARKER) {
                sheets.push(name);
            }
        }
        sheets.sort();
        Ok(sheets)
    }
}

/// Worksheet backed by a materialized calamine range.
pub struct Worksheet {
    name: String,
    range: Range<Data>,
}

impl Sheet for Worksheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell(&self, row: u32, col: u32) -> CellValue {
        if row == 0 || col == 0 {
            return CellValue::Blank;
        }
        match self.range.get_value((row - 1, col - 1)) {
            Some(data) => convert(data),
            None => CellValue::Blank,
        }
    }

    fn last_row(&self) -> u32 {
        match self.range.end() {
            Some((row, _)) => row + 1,
            None => 0,
        }
    }
}

fn convert(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Blank,
        Data::String(s) if s.trim().is_empty() => CellValue::Blank,
        Data::String(s) => CellValue::Text(s.trim().to_string()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        _ => CellValue::Other,
    }
}

/// In-memory sheet. Backs unit and integration tests, and any caller that
/// builds sheet content programmatically.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, row: u32, col: u32, value: CellValue) -> &mut Self {
        self.cells.insert((row, col), value);
        self
    }

    pub fn text(&mut self, row: u32, col: u32, value: &str) -> &mut Self {
        self.set(row, col, CellValue::Text(value.to_string()))
    }

    pub fn number(&mut self, row: u32, col: u32, value: f64) -> &mut Self {
        self.set(row, col, CellValue::Number(value))
    }

    pub fn boolean(&mut self, row: u32, col: u32, value: bool) -> &mut Self {
        self.set(row, col, CellValue::Bool(value))
    }
}

impl Sheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn cell(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(&(row, col))
            .cloned()
            .unwrap_or(CellValue::Blank)
    }

    fn last_row(&self) -> u32 {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sheet_reads_back_typed_values() {
        let mut sheet = MemorySheet::new("Test");
        sheet.text(1, 1, "HOME").number(2, 3, 42.0).boolean(4, 1, true);

        assert_eq!(sheet.cell(1, 1), CellValue::Text("HOME".to_string()));
        assert_eq!(sheet.cell(2, 3), CellValue::Number(42.0));
        assert_eq!(sheet.cell(4, 1), CellValue::Bool(true));
        assert_eq!(sheet.cell(9, 9), CellValue::Blank);
        assert_eq!(sheet.last_row(), 4);
    }

    #[test]
    fn whitespace_only_strings_count_as_blank() {
        assert_eq!(convert(&Data::String("   ".to_string())), CellValue::Blank);
        assert_eq!(
            convert(&Data::String(" Name ".to_string())),
            CellValue::Text("Name".to_string())
        );
    }

    #[test]
    fn unsupported_cell_kinds_map_to_other() {
        assert_eq!(
            convert(&Data::DateTimeIso("2024-01-01".to_string())),
            CellValue::Other
        );
    }
}
