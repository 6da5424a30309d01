use crate::domain::model::{ExtractResult, SheetRow, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_dir(&self) -> &str;
}

/// Positional access to the sheets of a workbook.
pub trait SheetSource {
    /// Reads rows `first_row..=last_row` (1-based), each padded to `width` cells.
    fn read_rows(
        &mut self,
        sheet: &str,
        first_row: u32,
        last_row: u32,
        width: usize,
    ) -> Result<Vec<SheetRow>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractResult>;
    async fn transform(&self, data: ExtractResult) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
