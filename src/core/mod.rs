pub mod etl;
pub mod pipeline;
pub mod transform;

pub use crate::domain::model::{ExtractResult, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SheetSource, Storage};
pub use crate::utils::error::Result;
