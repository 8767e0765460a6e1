use crate::core::normalizer::normalize_all;
use crate::core::{Batch, ConfigProvider, Pipeline, RunReport, Storage, TransformResult};
use crate::domain::model::StoreRecord;
use crate::utils::error::{json_type_name, EtlError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Reads scraped store records, normalizes them and writes the cleaned array.
pub struct StorePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> StorePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_json(&self) -> Result<Value> {
        let path = self.config.input_path();

        if !self.storage.exists(path) {
            return Err(EtlError::NotFound {
                path: path.to_string(),
            });
        }

        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path);

        let text = std::str::from_utf8(&bytes).map_err(|e| {
            EtlError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        serde_json::from_str(text).map_err(|source| EtlError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

/// Turns the parsed root into an ordered batch of objects.
pub fn shape_batch(root: Value) -> Result<Batch> {
    match root {
        Value::Array(items) => {
            let records = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(map) => Ok(map),
                    other => Err(EtlError::Shape {
                        found: json_type_name(&other),
                        index: Some(index),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Batch {
                records,
                coerced_from_object: false,
            })
        }
        Value::Object(map) => {
            tracing::warn!(
                "Input root is not a list; processing it as a single store object"
            );
            Ok(Batch {
                records: vec![map],
                coerced_from_object: true,
            })
        }
        other => Err(EtlError::Shape {
            found: json_type_name(&other),
            index: None,
        }),
    }
}

/// Pretty-prints `records` with `indent` spaces per level. Non-ASCII text is
/// written as-is.
pub fn render_records(records: &[StoreRecord], indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

impl<S: Storage, C: ConfigProvider> Pipeline for StorePipeline<S, C> {
    fn extract(&self) -> Result<Batch> {
        tracing::info!("📥 Loading store records from: {}", self.config.input_path());
        let root = self.read_json()?;
        let batch = shape_batch(root)?;
        tracing::debug!("Extracted {} raw records", batch.len());
        Ok(batch)
    }

    fn transform(&self, batch: Batch) -> Result<TransformResult> {
        let records = normalize_all(&batch.records)?;
        tracing::debug!("Normalized {} records", records.len());
        Ok(TransformResult {
            records,
            coerced_from_object: batch.coerced_from_object,
        })
    }

    fn load(&self, result: TransformResult) -> Result<RunReport> {
        let output_path = self.config.output_path();
        let data = render_records(&result.records, self.config.indent())?;

        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage.write_file(output_path, &data)?;

        Ok(RunReport {
            input_path: self.config.input_path().to_string(),
            output_path: output_path.to_string(),
            record_count: result.records.len(),
            coerced_from_object: result.coerced_from_object,
            bytes_written: data.len(),
        })
    }
}
