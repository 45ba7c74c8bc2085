use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Missing required field '{field}'{}", row_suffix(.row))]
    InvalidSchema { field: String, row: Option<usize> },

    #[error("Field '{field}' at row {row} expected {expected}, found {found}")]
    InvalidType {
        field: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!(" at row {}", row),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 輸入表格不符合 schema 或型別
    Data,
    Config,
    Io,
}

impl DrillError {
    pub fn missing_column(field: &str) -> Self {
        DrillError::InvalidSchema {
            field: field.to_string(),
            row: None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::InvalidSchema { .. }
            | DrillError::InvalidType { .. }
            | DrillError::CsvError(_)
            | DrillError::SerializationError(_) => ErrorCategory::Data,
            DrillError::ConfigError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. } => ErrorCategory::Config,
            DrillError::IoError(_) => ErrorCategory::Io,
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Data => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DrillError::InvalidSchema { field, .. } => {
                format!("輸入資料缺少必要欄位 '{}'", field)
            }
            DrillError::InvalidType { field, row, .. } => {
                format!("第 {} 列的欄位 '{}' 型別不正確", row, field)
            }
            DrillError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Data => "檢查輸入檔案的欄位名稱與數值格式",
            ErrorCategory::Config => "檢查命令列參數或 TOML 設定檔",
            ErrorCategory::Io => "確認檔案路徑存在且具有讀寫權限",
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
