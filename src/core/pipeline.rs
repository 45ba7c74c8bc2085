use crate::adapters::table_io::{self, InputFormat};
use crate::core::{ConfigProvider, Pipeline, Storage, Table, TableTransform};
use crate::utils::error::Result;

/// 從檔案讀入表格、套用 drill、寫出結果
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    source: S,
    sink: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(source: S, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    fn extract(&self) -> Result<Table> {
        let path = self.config.input_path();
        let format = InputFormat::from_path(path)?;

        tracing::debug!("Reading {:?} table from: {}", format, self.source.location(path));
        let bytes = self.source.read_file(path)?;
        table_io::decode(format, &bytes)
    }

    fn transform(&self, table: Table) -> Result<Table> {
        self.config.drill().apply(&table)
    }

    fn load(&self, table: Table) -> Result<Vec<String>> {
        let drill = self.config.drill();
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let file_name = format!("{}.{}", drill.name(), format.extension());
            let data = table_io::encode(*format, &table)?;

            tracing::debug!("Writing {} ({} bytes) to storage", file_name, data.len());
            self.sink.write_file(&file_name, &data)?;
            written.push(self.sink.location(&file_name));
        }

        Ok(written)
    }
}
