pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, RunConfig};

pub use crate::core::{
    etl::{EtlEngine, RunStage},
    normalizer::{normalize_all, normalize_record},
    pipeline::StorePipeline,
};
pub use crate::domain::model::{Batch, RawRecord, RunReport, StoreRecord};
pub use crate::utils::error::{EtlError, Result};
