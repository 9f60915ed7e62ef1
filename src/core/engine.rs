use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load; returns the number of reported
    /// lines. An empty record set skips the remaining phases.
    pub fn run(&self) -> Result<usize> {
        tracing::info!("Loading records...");
        let records = self.pipeline.extract()?;
        tracing::info!("Loaded {} records", records.len());
        self.monitor.log_stats("Extract");

        if records.is_empty() {
            tracing::warn!("No records loaded, nothing to report");
            return Ok(0);
        }

        tracing::info!("Computing aggregates...");
        let output = self.pipeline.transform(&records)?;
        self.monitor.log_stats("Aggregate");

        let line_count = self.pipeline.load(output)?;
        tracing::debug!("Reported {} lines", line_count);
        self.monitor.log_final_stats();

        Ok(line_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Record, ReportOutput};
    use std::cell::Cell;
    use std::rc::Rc;

    struct ScriptedPipeline {
        records: Vec<Record>,
        loads: Rc<Cell<usize>>,
    }

    impl ScriptedPipeline {
        fn new(records: Vec<Record>) -> (Self, Rc<Cell<usize>>) {
            let loads = Rc::new(Cell::new(0));
            (
                Self {
                    records,
                    loads: Rc::clone(&loads),
                },
                loads,
            )
        }
    }

    impl Pipeline for ScriptedPipeline {
        fn extract(&self) -> Result<Vec<Record>> {
            Ok(self.records.clone())
        }

        fn transform(&self, records: &[Record]) -> Result<ReportOutput> {
            Ok(ReportOutput {
                lines: records.iter().map(|r| r.name.clone()).collect(),
            })
        }

        fn load(&self, output: ReportOutput) -> Result<usize> {
            self.loads.set(self.loads.get() + 1);
            Ok(output.lines.len())
        }
    }

    #[test]
    fn test_run_reports_line_count() {
        let (pipeline, loads) = ScriptedPipeline::new(vec![
            Record::new("Alice", "34", "Finland"),
            Record::new("Bob", "27", "USA"),
        ]);
        let engine = ReportEngine::new(pipeline);

        assert_eq!(engine.run().unwrap(), 2);
        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn test_run_with_empty_records_skips_load() {
        let (pipeline, loads) = ScriptedPipeline::new(vec![]);
        let engine = ReportEngine::new(pipeline);

        assert_eq!(engine.run().unwrap(), 0);
        assert_eq!(loads.get(), 0);
    }

    #[test]
    fn test_run_with_monitoring_disabled_still_reports() {
        let (pipeline, _loads) = ScriptedPipeline::new(vec![Record::new("Alice", "34", "Finland")]);
        let engine = ReportEngine::new_with_monitoring(pipeline, false);

        assert_eq!(engine.run().unwrap(), 1);
    }
}
