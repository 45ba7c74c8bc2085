use crate::domain::model::{CustomerId, Record, Table};
use crate::utils::error::{DrillError, Result};
use serde_json::Value;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 表格必須包含所有指定欄位，否則回傳 InvalidSchema。
///
/// 沒有欄位也沒有資料列的表格（例如 JSON `[]`）視為空輸入，不做檢查。
pub fn require_columns(table: &Table, columns: &[&str]) -> Result<()> {
    if table.columns.is_empty() && table.rows.is_empty() {
        return Ok(());
    }
    for column in columns {
        if !table.has_column(column) {
            return Err(DrillError::missing_column(column));
        }
    }
    Ok(())
}

pub fn require_field<'a>(record: &'a Record, row: usize, field: &str) -> Result<&'a Value> {
    record.get(field).ok_or_else(|| DrillError::InvalidSchema {
        field: field.to_string(),
        row: Some(row),
    })
}

/// 取得數值欄位。null 視為缺值並拒絕。
pub fn require_number(record: &Record, row: usize, field: &str) -> Result<f64> {
    let value = require_field(record, row, field)?;
    value.as_f64().ok_or_else(|| DrillError::InvalidType {
        field: field.to_string(),
        row,
        expected: "number",
        found: describe(value),
    })
}

pub fn require_customer_id(record: &Record, row: usize, field: &str) -> Result<CustomerId> {
    let value = require_field(record, row, field)?;
    match value {
        Value::String(id) => Ok(CustomerId::Text(id.clone())),
        Value::Number(n) => n.as_i64().map(CustomerId::Int).ok_or_else(|| {
            DrillError::InvalidType {
                field: field.to_string(),
                row,
                expected: "integer or string identifier",
                found: describe(value),
            }
        }),
        other => Err(DrillError::InvalidType {
            field: field.to_string(),
            row,
            expected: "integer or string identifier",
            found: describe(other),
        }),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DrillError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DrillError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}
