pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_existing_file, validate_file_extension, validate_output_dir, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

/// Workbook formats the reader can open.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub const DEFAULT_OUTPUT_DIR: &str = "./jsonfiles";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "sheetconverter"))]
#[cfg_attr(feature = "cli", command(about = "Converts COMSCC Classing Sheets to JSON"))]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(short, long, help = "Input Excel file"))]
    pub input: String,

    #[cfg_attr(
        feature = "cli",
        arg(
            short,
            long,
            default_value = DEFAULT_OUTPUT_DIR,
            help = "Output directory for JSON files"
        )
    )]
    pub output_dir: String,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(input: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &SUPPORTED_EXTENSIONS)?;
        validate_existing_file("input", &self.input)?;
        validate_output_dir("output_dir", &self.output_dir)?;
        Ok(())
    }
}
