pub mod aggregate;
pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{CountTable, Record, ReportOutput};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
