use crate::domain::layout::*;
use crate::domain::model::{
    ExtractResult, PointsRecord, PointsRows, PointsTable, SheetRow, TransformResult,
    VehicleRecord,
};
use crate::domain::ports::SheetSource;
use crate::utils::error::Result;

/// Drops every non-ASCII character.
pub fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// Every row in the range becomes a record, blank rows included.
pub fn vehicles_from_rows(rows: &[SheetRow]) -> Vec<VehicleRecord> {
    rows.iter()
        .map(|row| VehicleRecord {
            id: row.row_number,
            make: row.cell(COL_MAKE).clone(),
            model: row.cell(COL_MODEL).clone(),
            start_year: row.cell(COL_START_YEAR).clone(),
            end_year: row.cell(COL_END_YEAR).clone(),
            showroom_weight: row.cell(COL_SHOWROOM_BASE_WEIGHT).clone(),
            factory_hp: row.cell(COL_FACTORY_HP).clone(),
            factory_tq: row.cell(COL_FACTORY_TQ).clone(),
            susp_index: row.cell(COL_SUSP_INDEX).clone(),
        })
        .collect()
}

pub fn points_from_rows(rows: &[SheetRow]) -> Vec<PointsRecord> {
    rows.iter()
        .filter(|row| !row.cell(COL_DESCRIPTION).is_text(SKIP_DESCRIPTION))
        .map(|row| PointsRecord {
            id: row.row_number,
            description: ascii_only(&row.cell(COL_DESCRIPTION).to_text()),
            points: row.cell(COL_POINTS).clone(),
        })
        .collect()
}

/// Reads the vehicle range and every points range from `source`.
pub fn read_classing_sheets<W: SheetSource>(source: &mut W) -> Result<ExtractResult> {
    tracing::debug!(
        "Reading {} rows {}..={}",
        VEHICLES_SHEET,
        VEHICLES_FIRST_ROW,
        VEHICLES_LAST_ROW
    );
    let vehicles = source.read_rows(
        VEHICLES_SHEET,
        VEHICLES_FIRST_ROW,
        VEHICLES_LAST_ROW,
        VEHICLES_WIDTH,
    )?;

    let mut points = Vec::with_capacity(POINTS_SHEETS.len());
    for sheet in POINTS_SHEETS {
        tracing::debug!(
            "Reading {} rows {}..={}",
            sheet.name,
            sheet.first_row,
            sheet.last_row
        );
        let rows = source.read_rows(sheet.name, sheet.first_row, sheet.last_row, POINTS_WIDTH)?;
        points.push(PointsRows { sheet, rows });
    }

    Ok(ExtractResult { vehicles, points })
}

pub fn transform_extracted(data: &ExtractResult) -> TransformResult {
    let vehicles = vehicles_from_rows(&data.vehicles);
    let mut skipped_rows = 0;

    let points = data
        .points
        .iter()
        .map(|raw| {
            let records = points_from_rows(&raw.rows);
            let skipped = raw.rows.len() - records.len();
            if skipped > 0 {
                tracing::debug!(
                    "{}: skipped {} '{}' row(s)",
                    raw.sheet.name,
                    skipped,
                    SKIP_DESCRIPTION
                );
            }
            skipped_rows += skipped;
            PointsTable {
                sheet: raw.sheet,
                records,
            }
        })
        .collect();

    TransformResult {
        vehicles,
        points,
        skipped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CellValue;
    use crate::utils::error::EtlError;
    use std::collections::HashMap;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn points_row(row_number: u32, points: CellValue, description: CellValue) -> SheetRow {
        SheetRow::new(row_number, vec![CellValue::Empty, points, description])
    }

    /// In-memory workbook keyed by sheet name; cells keyed by (row, column).
    struct MemorySheets {
        sheets: HashMap<String, HashMap<(u32, usize), CellValue>>,
    }

    impl SheetSource for MemorySheets {
        fn read_rows(
            &mut self,
            sheet: &str,
            first_row: u32,
            last_row: u32,
            width: usize,
        ) -> Result<Vec<SheetRow>> {
            let cells = self
                .sheets
                .get(sheet)
                .ok_or_else(|| EtlError::MissingSheetError {
                    sheet: sheet.to_string(),
                })?;
            Ok((first_row..=last_row)
                .map(|row| {
                    let values = (0..width)
                        .map(|col| cells.get(&(row, col)).cloned().unwrap_or(CellValue::Empty))
                        .collect();
                    SheetRow::new(row, values)
                })
                .collect())
        }
    }

    fn full_workbook() -> MemorySheets {
        let mut sheets = HashMap::new();
        let mut vehicles = HashMap::new();
        vehicles.insert((13, COL_MAKE), text("Mazda"));
        vehicles.insert((13, COL_MODEL), text("Miata"));
        vehicles.insert((13, COL_START_YEAR), CellValue::Int(1990));
        vehicles.insert((13, COL_SUSP_INDEX), CellValue::Float(1.25));
        sheets.insert(VEHICLES_SHEET.to_string(), vehicles);

        for sheet in POINTS_SHEETS {
            let mut cells = HashMap::new();
            cells.insert((9, COL_POINTS), CellValue::Int(2));
            cells.insert((9, COL_DESCRIPTION), text("Intake"));
            cells.insert((10, COL_DESCRIPTION), text(SKIP_DESCRIPTION));
            sheets.insert(sheet.name.to_string(), cells);
        }
        MemorySheets { sheets }
    }

    #[test]
    fn test_ascii_only() {
        assert_eq!(ascii_only("Cold air intake"), "Cold air intake");
        assert_eq!(ascii_only("Tires ≥ 200 treadwear"), "Tires  200 treadwear");
        assert_eq!(ascii_only("Brembo® calipers"), "Brembo calipers");
        assert_eq!(ascii_only("°™€"), "");
        assert_eq!(ascii_only("tab\tnewline\n"), "tab\tnewline\n");
    }

    #[test]
    fn test_points_skip_dyno_rows() {
        let rows = vec![
            points_row(9, CellValue::Int(1), text("Cold air intake")),
            points_row(10, CellValue::Empty, text("Dyno")),
            points_row(11, CellValue::Float(0.5), text("Exhaust – cat-back")),
        ];

        let records = points_from_rows(&rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 9);
        assert_eq!(records[0].points, CellValue::Int(1));
        assert_eq!(records[1].id, 11);
        assert_eq!(records[1].description, "Exhaust  cat-back");
        assert_eq!(records[1].points, CellValue::Float(0.5));
    }

    #[test]
    fn test_points_sentinel_is_exact_match() {
        let rows = vec![
            points_row(9, CellValue::Int(3), text("dyno")),
            points_row(10, CellValue::Int(3), text("Dyno tune")),
            points_row(11, CellValue::Int(3), text(" Dyno")),
        ];
        assert_eq!(points_from_rows(&rows).len(), 3);
    }

    #[test]
    fn test_points_non_text_descriptions() {
        let rows = vec![
            points_row(9, CellValue::Empty, CellValue::Empty),
            points_row(10, CellValue::Int(4), CellValue::Int(225)),
            points_row(11, CellValue::Int(4), CellValue::Bool(false)),
        ];
        let records = points_from_rows(&rows);
        assert_eq!(records[0].description, "None");
        assert_eq!(records[0].points, CellValue::Empty);
        assert_eq!(records[1].description, "225");
        assert_eq!(records[2].description, "False");
    }

    #[test]
    fn test_vehicles_keep_blank_rows() {
        let mut cells = vec![CellValue::Empty; VEHICLES_WIDTH];
        cells[COL_MAKE] = text("Honda");
        cells[COL_MODEL] = text("Civic Si");
        cells[COL_START_YEAR] = CellValue::Int(1999);
        cells[COL_END_YEAR] = CellValue::Int(2000);
        cells[COL_SHOWROOM_BASE_WEIGHT] = CellValue::Int(2612);
        cells[COL_FACTORY_HP] = CellValue::Int(160);
        cells[COL_FACTORY_TQ] = CellValue::Int(111);
        cells[8] = text("ignored");
        cells[COL_SUSP_INDEX] = CellValue::Float(1.5);

        let rows = vec![
            SheetRow::new(13, cells),
            SheetRow::new(14, vec![CellValue::Empty; VEHICLES_WIDTH]),
        ];
        let records = vehicles_from_rows(&rows);

        assert_eq!(records.len(), 2);
        let civic = &records[0];
        assert_eq!(civic.id, 13);
        assert!(civic.make.is_text("Honda"));
        assert!(civic.model.is_text("Civic Si"));
        assert_eq!(civic.start_year, CellValue::Int(1999));
        assert_eq!(civic.end_year, CellValue::Int(2000));
        assert_eq!(civic.showroom_weight, CellValue::Int(2612));
        assert_eq!(civic.factory_hp, CellValue::Int(160));
        assert_eq!(civic.factory_tq, CellValue::Int(111));
        assert_eq!(civic.susp_index, CellValue::Float(1.5));

        let blank = &records[1];
        assert_eq!(blank.id, 14);
        assert!(blank.make.is_empty());
        assert!(blank.susp_index.is_empty());
    }

    #[test]
    fn test_vehicle_text_is_not_sanitized() {
        let mut cells = vec![CellValue::Empty; VEHICLES_WIDTH];
        cells[COL_MAKE] = text("Citroën");
        let records = vehicles_from_rows(&[SheetRow::new(13, cells)]);
        assert!(records[0].make.is_text("Citroën"));
    }

    #[test]
    fn test_read_and_transform_all_sheets() {
        let mut workbook = full_workbook();
        let extracted = read_classing_sheets(&mut workbook).unwrap();

        assert_eq!(
            extracted.vehicles.len(),
            (VEHICLES_LAST_ROW - VEHICLES_FIRST_ROW + 1) as usize
        );
        assert_eq!(extracted.points.len(), POINTS_SHEETS.len());
        for (raw, sheet) in extracted.points.iter().zip(POINTS_SHEETS.iter()) {
            assert_eq!(raw.sheet.name, sheet.name);
            assert_eq!(raw.rows.len(), sheet.row_count());
        }

        let result = transform_extracted(&extracted);
        assert_eq!(result.vehicles.len(), 489);
        assert!(result.vehicles[0].model.is_text("Miata"));
        assert_eq!(result.skipped_rows, POINTS_SHEETS.len());

        let engine = &result.points[0];
        assert_eq!(engine.sheet.name, "Engine");
        assert_eq!(engine.records.len(), engine.sheet.row_count() - 1);
        assert_eq!(engine.records[0].description, "Intake");
        assert_eq!(engine.records[1].id, 11);
    }

    #[test]
    fn test_missing_sheet_aborts_extract() {
        let mut workbook = full_workbook();
        workbook.sheets.remove("Exterior");

        let err = read_classing_sheets(&mut workbook).unwrap_err();
        assert!(matches!(err, EtlError::MissingSheetError { ref sheet } if sheet == "Exterior"));
    }
}
