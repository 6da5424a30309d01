use crate::adapters::workbook::CalamineWorkbook;
use crate::core::transform::{read_classing_sheets, transform_extracted};
use crate::core::{ConfigProvider, ExtractResult, Pipeline, Storage, TransformResult};
use crate::domain::layout::{output_file_name, VEHICLES_SHEET};
use crate::utils::error::Result;
use crate::utils::json::to_pretty_json;

/// Converts one Classing Sheet workbook into per-sheet JSON files.
pub struct ClassingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ClassingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn write_json<T: serde::Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        let json = to_pretty_json(records)?;
        tracing::debug!(
            "Writing {} ({} records, {} bytes)",
            file_name,
            records.len(),
            json.len()
        );
        self.storage.write_file(file_name, json.as_bytes()).await
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ClassingPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        tracing::debug!("Opening workbook: {}", self.config.input_path());
        let mut workbook = CalamineWorkbook::open(self.config.input_path())?;
        tracing::debug!("Workbook sheets: {:?}", workbook.sheet_names());

        read_classing_sheets(&mut workbook)
    }

    async fn transform(&self, data: ExtractResult) -> Result<TransformResult> {
        let result = transform_extracted(&data);

        tracing::info!("{}: {} records", VEHICLES_SHEET, result.vehicles.len());
        for table in &result.points {
            tracing::info!("{}: {} records", table.sheet.name, table.records.len());
        }
        if result.skipped_rows > 0 {
            tracing::info!("Skipped {} sentinel row(s)", result.skipped_rows);
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        // 車輛資料
        self.write_json(&output_file_name(VEHICLES_SHEET), &result.vehicles)
            .await?;

        // 點數表：結構相同，範圍不同
        for table in &result.points {
            self.write_json(&table.sheet.file_name(), &table.records)
                .await?;
        }

        Ok(self.config.output_dir().to_string())
    }
}
