pub mod etl;
pub mod normalizer;
pub mod pipeline;

pub use crate::domain::model::{Batch, RawRecord, RunReport, StoreRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
