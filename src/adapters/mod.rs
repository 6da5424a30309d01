// Adapters layer: concrete implementations for external systems (workbook files, local storage)

pub mod workbook;
