pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DrillConfig;

pub use self::core::drill::{Drill, DrillKind};
pub use self::core::rank::{dense_rank, order_scores};
pub use self::core::rich_customers::{count_rich_customers, rich_count_table};
pub use self::core::{engine::DrillEngine, pipeline::FilePipeline};
pub use domain::model::{
    CustomerId, RankedRecord, Record, RichCountResult, ScoreRecord, Table, TransactionRecord,
};
pub use utils::error::{DrillError, Result};
