//! Spreadsheet access.
//!
//! Rows are exposed as header-to-scalar mappings so the normalizers
//! never deal with cell coordinates. The calamine-backed XLSX reader
//! sits behind the `Workbook`/`WorkbookOpener` traits, which lets
//! tests inject in-memory sheets instead of fixture files.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{RowError, SheetError};

/// Date format used by the institution register export
const DATE_FORMAT: &str = "%m/%d/%Y";

/// One cell value, reduced to the scalar kinds the corpus uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDateTime),
}

impl Scalar {
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Empty)
    }

    /// String form of whatever is present. Numbers are stringified, not
    /// reformatted; integral floats print without a fraction (numeric
    /// XLSX cells arrive as floats).
    pub fn to_text(&self) -> Option<String> {
        match self {
            Scalar::Empty => None,
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Int(i) => Some(i.to_string()),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => {
                Some(format!("{}", *f as i64))
            }
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Date(d) => Some(d.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }

    /// Integer form: integer cells, integral floats, or digit strings.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Date form: native date cells, or text in `%m/%d/%Y`.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Scalar::Date(d) => Some(d.date()),
            Scalar::Text(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok(),
            _ => None,
        }
    }

    fn from_cell(cell: &Data) -> Scalar {
        match cell {
            Data::Empty | Data::Error(_) => Scalar::Empty,
            // Whitespace-only cells behave like absent values
            Data::String(s) if s.trim().is_empty() => Scalar::Empty,
            Data::String(s) => Scalar::Text(s.clone()),
            Data::Int(i) => Scalar::Int(*i),
            Data::Float(f) => Scalar::Float(*f),
            Data::Bool(b) => Scalar::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(dt) => Scalar::Date(dt),
                None => Scalar::Empty,
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Scalar::Text(s.clone()),
        }
    }
}

/// One sheet row: column header (exact string, diacritics significant)
/// to scalar value.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, Scalar>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn set(&mut self, header: impl Into<String>, value: Scalar) {
        self.cells.insert(header.into(), value);
    }

    /// Cell under `header`, if the column exists and holds a value.
    pub fn scalar(&self, header: &str) -> Option<&Scalar> {
        self.cells.get(header).filter(|s| !s.is_empty())
    }

    pub fn require_text(&self, header: &str) -> Result<String, RowError> {
        let scalar = self
            .scalar(header)
            .ok_or_else(|| RowError::MissingColumn(header.to_string()))?;
        // Non-empty scalars always stringify
        scalar
            .to_text()
            .ok_or_else(|| RowError::MissingColumn(header.to_string()))
    }

    pub fn optional_text(&self, header: &str) -> Option<String> {
        self.scalar(header).and_then(Scalar::to_text)
    }

    pub fn require_int(&self, header: &str) -> Result<i64, RowError> {
        let scalar = self
            .scalar(header)
            .ok_or_else(|| RowError::MissingColumn(header.to_string()))?;
        scalar.to_int().ok_or_else(|| RowError::InvalidValue {
            column: header.to_string(),
            reason: format!("not an integer: {:?}", scalar),
        })
    }

    pub fn optional_int(&self, header: &str) -> Result<Option<i64>, RowError> {
        match self.scalar(header) {
            None => Ok(None),
            Some(scalar) => scalar.to_int().map(Some).ok_or_else(|| RowError::InvalidValue {
                column: header.to_string(),
                reason: format!("not an integer: {:?}", scalar),
            }),
        }
    }

    pub fn require_date(&self, header: &str) -> Result<NaiveDate, RowError> {
        let scalar = self
            .scalar(header)
            .ok_or_else(|| RowError::MissingColumn(header.to_string()))?;
        scalar.to_date().ok_or_else(|| RowError::InvalidValue {
            column: header.to_string(),
            reason: format!("not a {} date: {:?}", DATE_FORMAT, scalar),
        })
    }
}

/// Open workbook: sheet enumeration plus ordered row access per sheet.
pub trait Workbook {
    fn sheet_names(&self) -> Vec<String>;

    /// Rows of `sheet` in presented order; the first sheet row is
    /// consumed as the header line.
    fn rows(&mut self, sheet: &str) -> Result<Vec<Row>, SheetError>;
}

/// Opens workbooks by path. The orchestrator only ever sees this trait.
pub trait WorkbookOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>, SheetError>;
}

/// XLSX-backed opener used by the binary.
pub struct XlsxOpener;

impl WorkbookOpener for XlsxOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn Workbook>, SheetError> {
        let workbook: Xlsx<BufReader<File>> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| {
                SheetError::Open(path.to_path_buf(), e.to_string())
            })?;
        Ok(Box::new(XlsxWorkbook { inner: workbook }))
    }
}

struct XlsxWorkbook {
    inner: Xlsx<BufReader<File>>,
}

impl Workbook for XlsxWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    fn rows(&mut self, sheet: &str) -> Result<Vec<Row>, SheetError> {
        let range = self
            .inner
            .worksheet_range(sheet)
            .map_err(|e| SheetError::Read(sheet.to_string(), e.to_string()))?;

        let mut cells = range.rows();
        let headers: Vec<String> = match cells.next() {
            Some(header_row) => header_row
                .iter()
                .map(|c| c.to_string().trim().to_string())
                .collect(),
            None => return Ok(Vec::new()),
        };

        let mut rows = Vec::new();
        for data in cells {
            let mut row = Row::new();
            for (i, cell) in data.iter().enumerate() {
                if let Some(header) = headers.get(i) {
                    if !header.is_empty() {
                        row.set(header.clone(), Scalar::from_cell(cell));
                    }
                }
            }
            rows.push(row);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_stringification_keeps_decimals() {
        assert_eq!(Scalar::Float(1525.5555).to_text().unwrap(), "1525.5555");
        assert_eq!(Scalar::Float(2023.0).to_text().unwrap(), "2023");
    }

    #[test]
    fn test_to_int_accepts_integral_float_and_digit_text() {
        assert_eq!(Scalar::Float(2023.0).to_int(), Some(2023));
        assert_eq!(Scalar::Text("17000".into()).to_int(), Some(17000));
        assert_eq!(Scalar::Float(20.5).to_int(), None);
        assert_eq!(Scalar::Text("abc".into()).to_int(), None);
    }

    #[test]
    fn test_to_date_parses_register_format() {
        let date = Scalar::Text("03/24/2011".into()).to_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2011, 3, 24).unwrap());
        assert_eq!(Scalar::Text("2011-03-24".into()).to_date(), None);
    }

    #[test]
    fn test_required_missing_and_empty() {
        let mut row = Row::new();
        row.set("Blank", Scalar::Empty);
        assert!(matches!(
            row.require_text("Absent"),
            Err(RowError::MissingColumn(_))
        ));
        assert!(matches!(
            row.require_text("Blank"),
            Err(RowError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_whitespace_only_cell_reads_as_empty() {
        let data = Data::String("   ".to_string());
        assert_eq!(Scalar::from_cell(&data), Scalar::Empty);
    }

    #[test]
    fn test_optional_int_rejects_garbage() {
        let mut row = Row::new();
        row.set("Count", Scalar::Text("many".into()));
        assert!(row.optional_int("Count").is_err());
        assert_eq!(row.optional_int("Missing").unwrap(), None);
    }
}
