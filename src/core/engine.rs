use crate::domain::model::RunOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages and reports progress.
pub struct AtlasEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AtlasEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Extracting country data...");
        let raw = self.pipeline.extract().await?;
        tracing::info!("Extracted {} raw entries", raw.len());

        tracing::info!("Normalizing records...");
        let result = self.pipeline.transform(raw).await?;
        tracing::info!("Normalized {} records", result.records.len());

        tracing::info!("Exporting dataset...");
        let output_path = self.pipeline.load(&result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunOutcome {
            output_path,
            records: result.records,
        })
    }
}
