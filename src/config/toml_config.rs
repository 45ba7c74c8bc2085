use crate::adapters::table_io::{OutputFormat, INPUT_EXTENSIONS};
use crate::core::drill::{Drill, DrillKind};
use crate::core::rank::{RankOptions, SCORE_COLUMN};
use crate::core::rich_customers::{RichCountOptions, AMOUNT_COLUMN, CUSTOMER_ID_COLUMN, RICH_THRESHOLD};
use crate::core::ConfigProvider;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_finite, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    pub drill: DrillSection,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub columns: Option<ColumnsConfig>,
    pub rich_count: Option<RichCountConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSection {
    pub kind: DrillKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnsConfig {
    pub score: Option<String>,
    pub customer_id: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichCountConfig {
    pub threshold: Option<f64>,
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Csv]
}

impl DrillConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未定義的變數保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn columns(&self) -> ColumnsConfig {
        self.columns.clone().unwrap_or_default()
    }

    pub fn threshold(&self) -> f64 {
        self.rich_count
            .as_ref()
            .and_then(|r| r.threshold)
            .unwrap_or(RICH_THRESHOLD)
    }
}

impl ConfigProvider for DrillConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }

    fn drill(&self) -> Drill {
        let columns = self.columns();
        match self.drill.kind {
            DrillKind::RankScores => Drill::RankScores(RankOptions {
                score_column: columns.score.unwrap_or_else(|| SCORE_COLUMN.to_string()),
            }),
            DrillKind::RichCount => Drill::RichCount(RichCountOptions {
                customer_column: columns
                    .customer_id
                    .unwrap_or_else(|| CUSTOMER_ID_COLUMN.to_string()),
                amount_column: columns.amount.unwrap_or_else(|| AMOUNT_COLUMN.to_string()),
                threshold: self.threshold(),
            }),
        }
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.path", &self.input.path)?;
        validate_file_extension("input.path", &self.input.path, &INPUT_EXTENSIONS)?;
        validate_path("output.path", &self.output.path)?;

        if self.output.formats.is_empty() {
            return Err(DrillError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: "[]".to_string(),
                reason: "At least one output format is required".to_string(),
            });
        }

        let columns = self.columns();
        for (field, value) in [
            ("columns.score", &columns.score),
            ("columns.customer_id", &columns.customer_id),
            ("columns.amount", &columns.amount),
        ] {
            if let Some(value) = value {
                validate_non_empty_string(field, value)?;
            }
        }

        validate_finite("rich_count.threshold", self.threshold())
    }
}
