use crate::domain::model::{CellValue, SheetRow, DATETIME_FORMAT};
use crate::domain::ports::SheetSource;
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Workbook opened with format auto-detection (xlsx, xlsm, xlsb, xls, ods).
pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let sheets = open_workbook_auto(path)?;
        Ok(Self { sheets })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }
}

impl SheetSource for CalamineWorkbook {
    fn read_rows(
        &mut self,
        sheet: &str,
        first_row: u32,
        last_row: u32,
        width: usize,
    ) -> Result<Vec<SheetRow>> {
        if !self.sheet_names().iter().any(|name| name == sheet) {
            return Err(EtlError::MissingSheetError {
                sheet: sheet.to_string(),
            });
        }

        let range = self.sheets.worksheet_range(sheet)?;
        tracing::debug!(
            "Sheet {} used range: {:?}..{:?}",
            sheet,
            range.start(),
            range.end()
        );
        Ok(rows_from_range(&range, first_row, last_row, width))
    }
}

/// Reads 1-based rows `first_row..=last_row` out of a calamine range.
/// Cells outside the used range come back empty.
pub fn rows_from_range(
    range: &Range<Data>,
    first_row: u32,
    last_row: u32,
    width: usize,
) -> Vec<SheetRow> {
    (first_row..=last_row)
        .map(|row_number| {
            let row = row_number - 1;
            let cells = (0..width)
                .map(|column| {
                    range
                        .get_value((row, column as u32))
                        .map(cell_value)
                        .unwrap_or(CellValue::Empty)
                })
                .collect();
            SheetRow::new(row_number, cells)
        })
        .collect()
}

fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::from_float(*value),
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(datetime) => match datetime.as_datetime() {
            Some(datetime) => CellValue::DateTime(format_datetime(&datetime)),
            None => CellValue::from_float(datetime.as_f64()),
        },
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::DateTime(text.clone()),
        Data::Error(error) => CellValue::Error(error.to_string()),
    }
}
