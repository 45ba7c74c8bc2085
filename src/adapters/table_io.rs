use crate::domain::model::{Record, Table};
use crate::utils::error::{DrillError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

pub const INPUT_EXTENSIONS: [&str; 2] = ["csv", "json"];

impl InputFormat {
    /// 依副檔名判斷輸入格式
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(DrillError::InvalidConfigValueError {
                field: "input.path".to_string(),
                value: path.to_string(),
                reason: format!(
                    "Unsupported input format. Allowed extensions: {}",
                    INPUT_EXTENSIONS.join(", ")
                ),
            }),
        }
    }
}

pub fn decode(format: InputFormat, bytes: &[u8]) -> Result<Table> {
    match format {
        InputFormat::Csv => read_csv(bytes),
        InputFormat::Json => read_json(bytes),
    }
}

pub fn encode(format: OutputFormat, table: &Table) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => write_csv(table),
        OutputFormat::Json => write_json(table),
    }
}

/// 讀取含標題列的 CSV
///
/// 儲存格依內容推斷型別，不看欄位名稱。識別碼欄也一樣：`007` 與 `7` 都成為整數 7，
/// `1.5` 之類的浮點識別碼會在 `require_customer_id` 被拒絕。需要保留原字串的識別碼請改用 JSON 輸入。
pub fn read_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(columns);

    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (column, cell) in table.columns.iter().zip(row.iter()) {
            record.data.insert(column.clone(), parse_cell(cell));
        }
        table.rows.push(record);
    }

    tracing::debug!(
        "Read {} CSV rows with columns {:?}",
        table.row_count(),
        table.columns
    );
    Ok(table)
}

/// 讀取 JSON 物件陣列
pub fn read_json(bytes: &[u8]) -> Result<Table> {
    let rows: Vec<Record> = serde_json::from_slice(bytes)?;
    let table = Table::from_records(rows);
    tracing::debug!("Read {} JSON rows", table.row_count());
    Ok(table)
}

pub fn write_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for record in &table.rows {
        writer.write_record(
            table
                .columns
                .iter()
                .map(|column| record.get(column).map(cell_text).unwrap_or_default()),
        )?;
    }
    writer
        .into_inner()
        .map_err(|e| DrillError::IoError(e.into_error()))
}

pub fn write_json(table: &Table) -> Result<Vec<u8>> {
    let rows: Vec<Map<String, Value>> = table
        .rows
        .iter()
        .map(|record| {
            table
                .columns
                .iter()
                .map(|column| {
                    let value = record.get(column).cloned().unwrap_or(Value::Null);
                    (column.clone(), value)
                })
                .collect()
        })
        .collect();
    Ok(serde_json::to_vec_pretty(&rows)?)
}

fn parse_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = cell.parse::<i64>() {
        return Value::from(int);
    }
    match cell.parse::<f64>() {
        Ok(float) if float.is_finite() => Value::from(float),
        _ => Value::String(cell.to_string()),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
