pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::workbook::CalamineWorkbook;
pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::ClassingPipeline};
pub use utils::error::{EtlError, Result};
