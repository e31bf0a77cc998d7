pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::cache::DatasetCache;
pub use crate::core::engine::AtlasEngine;
pub use crate::core::pipeline::CountryPipeline;
pub use crate::domain::model::{CountryRecord, MISSING};
pub use crate::utils::error::{AtlasError, Result};
