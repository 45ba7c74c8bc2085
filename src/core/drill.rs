use crate::core::rank::{order_scores_with, RankOptions};
use crate::core::rich_customers::{rich_count_table_with, RichCountOptions};
use crate::domain::model::Table;
use crate::domain::ports::TableTransform;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum DrillKind {
    RankScores,
    RichCount,
}

/// 已設定好參數的轉換
#[derive(Debug, Clone, PartialEq)]
pub enum Drill {
    RankScores(RankOptions),
    RichCount(RichCountOptions),
}

impl Drill {
    pub fn kind(&self) -> DrillKind {
        match self {
            Drill::RankScores(_) => DrillKind::RankScores,
            Drill::RichCount(_) => DrillKind::RichCount,
        }
    }
}

impl From<DrillKind> for Drill {
    fn from(kind: DrillKind) -> Self {
        match kind {
            DrillKind::RankScores => Drill::RankScores(RankOptions::default()),
            DrillKind::RichCount => Drill::RichCount(RichCountOptions::default()),
        }
    }
}

impl TableTransform for Drill {
    fn name(&self) -> &'static str {
        match self {
            Drill::RankScores(_) => "rank-scores",
            Drill::RichCount(_) => "rich-count",
        }
    }

    fn apply(&self, table: &Table) -> Result<Table> {
        tracing::debug!("Applying {} to {} rows", self.name(), table.row_count());
        match self {
            Drill::RankScores(options) => order_scores_with(table, options),
            Drill::RichCount(options) => rich_count_table_with(table, options),
        }
    }
}
