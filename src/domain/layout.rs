//! Fixed geometry of the Classing Sheet workbook.
//!
//! Row numbers are 1-based and inclusive, as shown by the spreadsheet.
//! Column indices are 0-based positions within a row (column A is 0).

pub const VEHICLES_SHEET: &str = "Vehicles";
pub const VEHICLES_FIRST_ROW: u32 = 13;
pub const VEHICLES_LAST_ROW: u32 = 501;

pub const COL_MAKE: usize = 1;
pub const COL_MODEL: usize = 2;
pub const COL_START_YEAR: usize = 3;
pub const COL_END_YEAR: usize = 4;
pub const COL_SHOWROOM_BASE_WEIGHT: usize = 5;
pub const COL_FACTORY_HP: usize = 6;
pub const COL_FACTORY_TQ: usize = 7;
pub const COL_SUSP_INDEX: usize = 11;
pub const VEHICLES_WIDTH: usize = COL_SUSP_INDEX + 1;

pub const COL_POINTS: usize = 1;
pub const COL_DESCRIPTION: usize = 2;
pub const POINTS_WIDTH: usize = COL_DESCRIPTION + 1;

/// Rows with this description are left out of the points output.
pub const SKIP_DESCRIPTION: &str = "Dyno";

/// A sheet of (points, description) rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsSheet {
    pub name: &'static str,
    pub first_row: u32,
    pub last_row: u32,
}

impl PointsSheet {
    pub fn file_name(&self) -> String {
        output_file_name(self.name)
    }

    pub fn row_count(&self) -> usize {
        (self.last_row - self.first_row + 1) as usize
    }
}

/// Points sheets in output order.
pub const POINTS_SHEETS: [PointsSheet; 6] = [
    PointsSheet {
        name: "Engine",
        first_row: 9,
        last_row: 58,
    },
    PointsSheet {
        name: "Drivetrain",
        first_row: 9,
        last_row: 30,
    },
    PointsSheet {
        name: "Suspension",
        first_row: 9,
        last_row: 38,
    },
    PointsSheet {
        name: "Brakes",
        first_row: 9,
        last_row: 19,
    },
    PointsSheet {
        name: "Exterior",
        first_row: 9,
        last_row: 29,
    },
    PointsSheet {
        name: "Tires",
        first_row: 9,
        last_row: 77,
    },
];

pub fn output_file_name(sheet: &str) -> String {
    format!("{}.json", sheet.to_lowercase())
}

pub fn points_sheet(name: &str) -> Option<&'static PointsSheet> {
    POINTS_SHEETS.iter().find(|sheet| sheet.name == name)
}
