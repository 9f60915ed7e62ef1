pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{engine::ReportEngine, pipeline::SimplePipeline};
pub use utils::error::{Result, StatsError};
