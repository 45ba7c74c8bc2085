//! Dense ranking of rows by a score column, highest score first.

use crate::domain::model::{number_value, RankedRecord, Record, ScoreRecord, Table};
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{require_columns, require_number};
use serde_json::Value;

pub const SCORE_COLUMN: &str = "score";
pub const RANK_COLUMN: &str = "rank";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    pub score_column: String,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            score_column: SCORE_COLUMN.to_string(),
        }
    }
}

/// 依分數由高至低排序並給予 dense rank。
///
/// 相同分數取得相同名次，下一個較低的分數名次緊接其後，不會跳號。
/// `NaN` 無法比較，回傳 `InvalidType`。
pub fn dense_rank(records: &[ScoreRecord]) -> Result<Vec<RankedRecord>> {
    if let Some(row) = records.iter().position(|r| r.score.is_nan()) {
        return Err(DrillError::InvalidType {
            field: SCORE_COLUMN.to_string(),
            row,
            expected: "comparable number",
            found: "NaN".to_string(),
        });
    }

    let mut scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    scores.sort_by(|a, b| b.total_cmp(a));

    let mut ranked = Vec::with_capacity(scores.len());
    let mut rank = 0u64;
    let mut previous: Option<f64> = None;
    for score in scores {
        // -0.0 與 0.0 相鄰且相等，共用名次
        if previous != Some(score) {
            rank += 1;
            previous = Some(score);
        }
        ranked.push(RankedRecord { score, rank });
    }

    tracing::debug!(
        "Ranked {} rows into {} distinct ranks",
        ranked.len(),
        rank
    );
    Ok(ranked)
}

pub fn order_scores(table: &Table) -> Result<Table> {
    order_scores_with(table, &RankOptions::default())
}

/// 表格版本：輸出只保留分數欄與 `rank` 欄
pub fn order_scores_with(table: &Table, options: &RankOptions) -> Result<Table> {
    let column = options.score_column.as_str();
    require_columns(table, &[column])?;

    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(row, record)| {
            Ok(ScoreRecord {
                id: row as i64,
                score: require_number(record, row, column)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut output = Table::new(vec![column.to_string(), RANK_COLUMN.to_string()]);
    output.rows = dense_rank(&records)?
        .into_iter()
        .map(|ranked| {
            Record::new()
                .with(column, number_value(ranked.score))
                .with(RANK_COLUMN, Value::from(ranked.rank))
        })
        .collect();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scores(values: &[f64]) -> Vec<ScoreRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoreRecord {
                id: i as i64 + 1,
                score,
            })
            .collect()
    }

    fn ranks(ranked: &[RankedRecord]) -> Vec<(f64, u64)> {
        ranked.iter().map(|r| (r.score, r.rank)).collect()
    }

    #[test]
    fn test_ties_share_rank() {
        let ranked = dense_rank(&scores(&[10.0, 10.0, 5.0])).unwrap();
        assert_eq!(ranks(&ranked), vec![(10.0, 1), (10.0, 1), (5.0, 2)]);
    }

    #[test]
    fn test_no_gaps_after_ties() {
        let ranked = dense_rank(&scores(&[3.5, 3.65, 4.0, 3.85, 4.0, 3.65])).unwrap();
        assert_eq!(
            ranks(&ranked),
            vec![
                (4.0, 1),
                (4.0, 1),
                (3.85, 2),
                (3.65, 3),
                (3.65, 3),
                (3.5, 4)
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(dense_rank(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_nan_is_rejected() {
        let err = dense_rank(&scores(&[1.0, f64::NAN])).unwrap_err();
        assert!(matches!(err, DrillError::InvalidType { row: 1, .. }));
    }

    #[test]
    fn test_signed_zero_and_infinity() {
        let ranked = dense_rank(&scores(&[-0.0, f64::INFINITY, 0.0, f64::NEG_INFINITY])).unwrap();
        let got: Vec<u64> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(got, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_row_key_does_not_affect_ranking() {
        let a = [ScoreRecord { id: 1, score: 2.0 }, ScoreRecord { id: 2, score: 9.0 }];
        let b = [ScoreRecord { id: 40, score: 2.0 }, ScoreRecord { id: -3, score: 9.0 }];
        assert_eq!(dense_rank(&a).unwrap(), dense_rank(&b).unwrap());
    }

    #[test]
    fn test_input_is_left_untouched() {
        let input = scores(&[1.0, 3.0, 2.0]);
        let before = input.clone();
        dense_rank(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_order_scores_table() {
        let table = Table::from_records(vec![
            Record::new().with("id", json!(1)).with("score", json!(3.5)),
            Record::new().with("id", json!(2)).with("score", json!(4)),
        ]);

        let output = order_scores(&table).unwrap();
        assert_eq!(output.columns, vec!["score", "rank"]);
        assert_eq!(
            output.rows,
            vec![
                Record::new().with("score", json!(4)).with("rank", json!(1)),
                Record::new().with("score", json!(3.5)).with("rank", json!(2)),
            ]
        );
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_order_scores_custom_column() {
        let table = Table::from_records(vec![Record::new().with("points", json!(9))]);
        let options = RankOptions {
            score_column: "points".to_string(),
        };

        let output = order_scores_with(&table, &options).unwrap();
        assert_eq!(output.columns, vec!["points", "rank"]);
        assert!(matches!(
            order_scores(&table),
            Err(DrillError::InvalidSchema { row: None, .. })
        ));
    }
}
