use crate::core::models::request::BatchEntry;
use crate::engine::batch::{BatchReport, BatchScheduler, CancellationToken};
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[instrument(skip_all, name = "batch_workflow")]
pub fn run(
    entries: &[BatchEntry],
    config: &EngineConfig,
    reporter: &ProgressReporter,
    cancellation: &CancellationToken,
) -> Result<BatchReport, EngineError> {
    // === Phase 1: Setup ===
    reporter.report(Progress::PhaseStart { name: "Setup" });
    let scheduler = BatchScheduler::new(config.clone())?;
    info!(
        entries = entries.len(),
        workers = ?config.workers,
        aggregation = %config.aggregation,
        "Starting batch calculation."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Calculation ===
    reporter.report(Progress::PhaseStart {
        name: "Calculating",
    });
    let report = scheduler.run(entries, reporter, cancellation)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        skipped = report.skipped,
        "Batch calculation finished."
    );
    if report.cancelled {
        reporter.report(Progress::Message(format!(
            "Cancelled: {} of {} entries were not started.",
            report.skipped,
            report.total()
        )));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::conditions::ReactionConditions;
    use std::sync::Mutex;

    fn entries() -> Vec<BatchEntry> {
        vec![
            BatchEntry::new("P1", "ATGCGTACGTAGC", ReactionConditions::default()),
            BatchEntry::new("P2", "", ReactionConditions::default()),
            BatchEntry::new("P3", "ACGT", ReactionConditions::default()),
        ]
    }

    #[test]
    fn run_reports_phases_around_the_batch() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        let report = run(
            &entries(),
            &EngineConfig::default(),
            &reporter,
            &CancellationToken::new(),
        )
        .unwrap();
        drop(reporter);

        assert_eq!(report.items.len(), 3);
        assert_eq!(report.succeeded(), 2);

        let events = events.into_inner().unwrap();
        assert!(matches!(
            events.first(),
            Some(Progress::PhaseStart { name }) if *name == "Setup"
        ));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, Progress::PhaseStart { name } if *name == "Calculating"))
        );
    }

    #[test]
    fn run_rejects_invalid_config_before_dispatch() {
        let config = EngineConfig {
            workers: Some(0),
            ..EngineConfig::default()
        };
        let result = run(
            &entries(),
            &config,
            &ProgressReporter::new(),
            &CancellationToken::new(),
        );
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn cancelled_run_emits_summary_message() {
        let messages = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::Message(text) = event {
                messages.lock().unwrap().push(text);
            }
        }));
        let token = CancellationToken::new();
        token.cancel();

        let report = run(&entries(), &EngineConfig::default(), &reporter, &token).unwrap();
        drop(reporter);

        assert!(report.cancelled);
        assert_eq!(report.skipped, 3);
        let messages = messages.into_inner().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("3 of 3"));
    }
}
