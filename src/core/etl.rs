use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;
use std::fmt;

/// Progress of a single run. `Failed` can follow any stage before `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Start,
    Loaded,
    ShapeChecked,
    Transformed,
    Saved,
    Done,
    Failed,
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStage::Start => "start",
            RunStage::Loaded => "loaded",
            RunStage::ShapeChecked => "shape-checked",
            RunStage::Transformed => "transformed",
            RunStage::Saved => "saved",
            RunStage::Done => "done",
            RunStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load once. Nothing is written unless
    /// every step before load succeeded.
    pub fn run(&self) -> Result<RunReport> {
        let mut stage = RunStage::Start;
        tracing::info!("Starting store normalization run");

        let outcome = self.run_stages(&mut stage);
        match &outcome {
            Ok(report) => {
                advance(&mut stage, RunStage::Done);
                tracing::info!(
                    "✅ Normalized {} records into {}",
                    report.record_count,
                    report.output_path
                );
            }
            Err(e) => {
                tracing::error!("❌ Run failed after stage '{}': {}", stage, e);
                advance(&mut stage, RunStage::Failed);
            }
        }
        outcome
    }

    fn run_stages(&self, stage: &mut RunStage) -> Result<RunReport> {
        // Extract reads, parses and shape-checks in one call
        let batch = self.pipeline.extract()?;
        advance(stage, RunStage::Loaded);
        advance(stage, RunStage::ShapeChecked);
        tracing::info!(
            "Extracted {} records (coerced from object: {})",
            batch.len(),
            batch.coerced_from_object
        );

        let result = self.pipeline.transform(batch)?;
        advance(stage, RunStage::Transformed);
        tracing::info!("Transformed {} records", result.records.len());

        let report = self.pipeline.load(result)?;
        advance(stage, RunStage::Saved);
        tracing::info!("📁 Output saved to: {}", report.output_path);

        Ok(report)
    }
}

fn advance(stage: &mut RunStage, next: RunStage) {
    tracing::debug!("Run stage: {} -> {}", stage, next);
    *stage = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Batch, TransformResult};
    use crate::domain::model::StoreRecord;
    use crate::utils::error::EtlError;
    use std::cell::Cell;

    /// Counts calls and fails at a chosen step.
    struct ScriptedPipeline {
        fail_transform: bool,
        loads: Cell<usize>,
    }

    impl Pipeline for ScriptedPipeline {
        fn extract(&self) -> Result<Batch> {
            let mut record = serde_json::Map::new();
            record.insert("Title".into(), "A".into());
            Ok(Batch {
                records: vec![record],
                coerced_from_object: true,
            })
        }

        fn transform(&self, batch: Batch) -> Result<TransformResult> {
            if self.fail_transform {
                return Err(EtlError::StrictType {
                    field: "flex4",
                    found: "a number",
                });
            }
            Ok(TransformResult {
                records: vec![StoreRecord::default(); batch.len()],
                coerced_from_object: batch.coerced_from_object,
            })
        }

        fn load(&self, result: TransformResult) -> Result<RunReport> {
            self.loads.set(self.loads.get() + 1);
            Ok(RunReport {
                input_path: "in.json".into(),
                output_path: "out.json".into(),
                record_count: result.records.len(),
                coerced_from_object: result.coerced_from_object,
                bytes_written: 0,
            })
        }
    }

    #[test]
    fn test_run_returns_report() {
        let engine = EtlEngine::new(ScriptedPipeline {
            fail_transform: false,
            loads: Cell::new(0),
        });
        let report = engine.run().unwrap();
        assert_eq!(report.record_count, 1);
        assert!(report.coerced_from_object);
        assert_eq!(engine.pipeline().loads.get(), 1);
    }

    #[test]
    fn test_transform_failure_skips_load() {
        let engine = EtlEngine::new(ScriptedPipeline {
            fail_transform: true,
            loads: Cell::new(0),
        });
        assert!(matches!(engine.run(), Err(EtlError::StrictType { .. })));
        assert_eq!(engine.pipeline().loads.get(), 0);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(RunStage::ShapeChecked.to_string(), "shape-checked");
        assert_eq!(RunStage::Failed.to_string(), "failed");
    }
}
