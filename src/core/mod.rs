pub mod drill;
pub mod engine;
pub mod pipeline;
pub mod rank;
pub mod rich_customers;

pub use crate::domain::model::{Record, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TableTransform};
pub use crate::utils::error::Result;
