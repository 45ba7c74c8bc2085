use crate::domain::model::{CustomerId, Record, RichCountResult, Table, TransactionRecord};
use crate::utils::error::Result;
use crate::utils::validation::{require_columns, require_customer_id, require_number};
use serde_json::Value;
use std::collections::HashSet;

pub const RICH_THRESHOLD: f64 = 500.0;
pub const CUSTOMER_ID_COLUMN: &str = "customer_id";
pub const AMOUNT_COLUMN: &str = "amount";
pub const RICH_COUNT_COLUMN: &str = "rich_count";

#[derive(Debug, Clone, PartialEq)]
pub struct RichCountOptions {
    pub customer_column: String,
    pub amount_column: String,
    pub threshold: f64,
}

impl Default for RichCountOptions {
    fn default() -> Self {
        Self {
            customer_column: CUSTOMER_ID_COLUMN.to_string(),
            amount_column: AMOUNT_COLUMN.to_string(),
            threshold: RICH_THRESHOLD,
        }
    }
}

/// 計算至少有一筆金額嚴格大於 500 的不重複客戶數
pub fn count_rich_customers(records: &[TransactionRecord]) -> RichCountResult {
    count_customers_above(records, RICH_THRESHOLD)
}

pub fn count_customers_above(records: &[TransactionRecord], threshold: f64) -> RichCountResult {
    let mut above = 0usize;
    let mut rich: HashSet<&CustomerId> = HashSet::new();
    for record in records.iter().filter(|r| r.amount > threshold) {
        above += 1;
        rich.insert(&record.customer_id);
    }

    tracing::debug!(
        "{} of {} transactions above {}, {} distinct customers",
        above,
        records.len(),
        threshold,
        rich.len()
    );

    RichCountResult {
        rich_count: rich.len() as u64,
    }
}

pub fn rich_count_table(table: &Table) -> Result<Table> {
    rich_count_table_with(table, &RichCountOptions::default())
}

/// 表格版本：輸出固定為單列單欄 `rich_count`
pub fn rich_count_table_with(table: &Table, options: &RichCountOptions) -> Result<Table> {
    let customer = options.customer_column.as_str();
    let amount = options.amount_column.as_str();
    require_columns(table, &[customer, amount])?;

    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(row, record)| {
            Ok(TransactionRecord {
                customer_id: require_customer_id(record, row, customer)?,
                amount: require_number(record, row, amount)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = count_customers_above(&records, options.threshold);

    let mut output = Table::new(vec![RICH_COUNT_COLUMN.to_string()]);
    output
        .rows
        .push(Record::new().with(RICH_COUNT_COLUMN, Value::from(result.rich_count)));
    Ok(output)
}
