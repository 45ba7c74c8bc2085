use crate::config::toml_config::{
    ColumnsConfig, DrillConfig, DrillSection, InputConfig, OutputConfig, RichCountConfig,
};
use crate::adapters::table_io::OutputFormat;
use crate::core::drill::DrillKind;
use crate::core::rich_customers::RICH_THRESHOLD;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "table-drills")]
#[command(about = "Dense score ranking and rich customer counts over CSV/JSON tables")]
pub struct CliConfig {
    /// TOML 設定檔；提供時忽略其餘資料參數
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub drill: Option<DrillKind>,

    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, value_delimiter = ',', default_value = "csv")]
    pub formats: Vec<OutputFormat>,

    #[arg(long, default_value_t = RICH_THRESHOLD)]
    pub threshold: f64,

    #[arg(long, default_value = "score")]
    pub score_column: String,

    #[arg(long, default_value = "customer_id")]
    pub customer_column: String,

    #[arg(long, default_value = "amount")]
    pub amount_column: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併為單一 DrillConfig：設定檔優先，否則由命令列參數組成
    pub fn to_drill_config(&self) -> Result<DrillConfig> {
        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            return DrillConfig::from_file(path);
        }

        let kind = *validate_required_field("--drill", &self.drill)?;
        let input = validate_required_field("--input", &self.input)?;

        Ok(DrillConfig {
            drill: DrillSection { kind },
            input: InputConfig {
                path: input.clone(),
            },
            output: OutputConfig {
                path: self.output_path.clone(),
                formats: self.formats.clone(),
            },
            columns: Some(ColumnsConfig {
                score: Some(self.score_column.clone()),
                customer_id: Some(self.customer_column.clone()),
                amount: Some(self.amount_column.clone()),
            }),
            rich_count: Some(RichCountConfig {
                threshold: Some(self.threshold),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::error::DrillError;
    use crate::utils::validation::Validate;

    #[test]
    fn test_flags_build_config() {
        let cli = CliConfig::parse_from([
            "table-drills",
            "--drill",
            "rich-count",
            "--input",
            "store.csv",
            "--formats",
            "csv,json",
            "--threshold",
            "100",
        ]);

        let config = cli.to_drill_config().unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.input_path(), "store.csv");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), &[OutputFormat::Csv, OutputFormat::Json]);
        assert_eq!(config.threshold(), 100.0);
    }

    #[test]
    fn test_missing_input_is_reported() {
        let cli = CliConfig::parse_from(["table-drills", "--drill", "rank-scores"]);
        assert!(matches!(
            cli.to_drill_config(),
            Err(DrillError::MissingConfigError { .. })
        ));
    }
}
