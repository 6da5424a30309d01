use crate::domain::layout::PointsSheet;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Format of `CellValue::DateTime` values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of a date/time cell rendered as description text.
pub const TEXT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text written for a blank cell used as text.
pub const EMPTY_TEXT: &str = "None";

/// A single cell as read from the workbook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// ISO-8601 date/time text
    DateTime(String),
    /// Spreadsheet error literal such as `#N/A`
    Error(String),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// Workbooks store every number as a float; whole values come back as
    /// integers so they serialize as `1984` rather than `1984.0`.
    pub fn from_float(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            CellValue::Int(value as i64)
        } else {
            CellValue::Float(value)
        }
    }

    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, CellValue::Text(text) if text == expected)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => EMPTY_TEXT.to_string(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => float_text(*value),
            CellValue::DateTime(text) => NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .map(|datetime| datetime.format(TEXT_DATETIME_FORMAT).to_string())
                .unwrap_or_else(|_| text.clone()),
            CellValue::Text(text) | CellValue::Error(text) => text.clone(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
        }
    }
}

/// Shortest round-trip text of a float. Exponent notation is used below
/// 1e-4 and from 1e16 up, with a signed exponent of at least two digits.
fn float_text(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// One positional row of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number in the sheet
    pub row_number: u32,
    pub cells: Vec<CellValue>,
}

impl SheetRow {
    pub fn new(row_number: u32, cells: Vec<CellValue>) -> Self {
        Self { row_number, cells }
    }

    /// Cells past the end of the row read as empty.
    pub fn cell(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub id: u32,
    pub make: CellValue,
    pub model: CellValue,
    pub start_year: CellValue,
    pub end_year: CellValue,
    pub showroom_weight: CellValue,
    pub factory_hp: CellValue,
    pub factory_tq: CellValue,
    pub susp_index: CellValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsRecord {
    pub id: u32,
    pub description: String,
    pub points: CellValue,
}

/// Raw rows pulled from one points sheet.
#[derive(Debug, Clone)]
pub struct PointsRows {
    pub sheet: PointsSheet,
    pub rows: Vec<SheetRow>,
}

/// Everything the extract stage reads from the workbook.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub vehicles: Vec<SheetRow>,
    pub points: Vec<PointsRows>,
}

impl ExtractResult {
    pub fn row_count(&self) -> usize {
        self.vehicles.len() + self.points.iter().map(|p| p.rows.len()).sum::<usize>()
    }
}

#[derive(Debug, Clone)]
pub struct PointsTable {
    pub sheet: PointsSheet,
    pub records: Vec<PointsRecord>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub vehicles: Vec<VehicleRecord>,
    pub points: Vec<PointsTable>,
    pub skipped_rows: usize,
}

impl TransformResult {
    pub fn record_count(&self) -> usize {
        self.vehicles.len() + self.points.iter().map(|p| p.records.len()).sum::<usize>()
    }
}
