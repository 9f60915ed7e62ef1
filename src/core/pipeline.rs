use crate::core::{parser, report};
use crate::core::{ConfigProvider, Pipeline, Record, ReportOutput, Storage};
use crate::utils::error::Result;

pub struct SimplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SimplePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SimplePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading records from: {}", path);

        // 讀取失敗視為空資料集，不中斷流程
        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Could not read CSV at {}: {}", path, e);
                return Ok(Vec::new());
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        Ok(parser::parse_records(&text))
    }

    fn transform(&self, records: &[Record]) -> Result<ReportOutput> {
        let lines = report::run_operation(
            records,
            self.config.operation(),
            self.config.min_age(),
            self.config.top_count(),
        );
        Ok(ReportOutput { lines })
    }

    fn load(&self, output: ReportOutput) -> Result<usize> {
        for line in &output.lines {
            println!("{}", line);
        }
        Ok(output.lines.len())
    }
}
