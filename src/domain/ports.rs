use crate::domain::model::{Batch, RunReport, TransformResult};
use crate::utils::error::Result;

/// Byte-level access to the input and output locations.
pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Spaces per indentation level in the output file.
    fn indent(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Batch>;
    fn transform(&self, batch: Batch) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<RunReport>;
}
