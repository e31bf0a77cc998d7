pub mod cache;
pub mod engine;
pub mod export;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod query;

pub use crate::domain::model::{CountryRecord, RunOutcome, TransformResult, MISSING};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
