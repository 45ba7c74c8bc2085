use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct DrillEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DrillEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting drill...");

        // Extract
        let table = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} rows ({} columns)",
            table.row_count(),
            table.columns.len()
        );

        // Transform
        let result = self.pipeline.transform(table)?;
        tracing::info!("Transformed into {} rows", result.row_count());

        // Load
        let written = self.pipeline.load(result)?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }
}
