use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Workbook error: {0}")]
    WorkbookError(#[from] calamine::Error),

    #[error("Sheet not found in workbook: {sheet}")]
    MissingSheetError { sheet: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::WorkbookError(_)
            | EtlError::MissingSheetError { .. }
            | EtlError::ValidationError { .. } => ErrorCategory::Input,
            EtlError::IoError(_) | EtlError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::WorkbookError(_) => {
                "Check that the input is a readable .xlsx/.xls/.ods workbook".to_string()
            }
            EtlError::MissingSheetError { sheet } => format!(
                "Make sure the workbook is a Classing Sheet containing a '{}' sheet",
                sheet
            ),
            EtlError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full".to_string()
            }
            EtlError::SerializationError(_) => "Re-run with --verbose and report the failing sheet".to_string(),
            EtlError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments".to_string()
            }
            EtlError::ValidationError { .. } => "Fix the input file and try again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::WorkbookError(e) => format!("Could not read the workbook: {}", e),
            EtlError::MissingSheetError { sheet } => {
                format!("The workbook has no sheet named '{}'", sheet)
            }
            EtlError::IoError(e) => format!("Could not write output: {}", e),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
