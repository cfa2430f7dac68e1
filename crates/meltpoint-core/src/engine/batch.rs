use super::config::{ConfigError, EngineConfig};
use super::error::{CalculationFailure, EngineError};
use super::progress::{Progress, ProgressReporter};
use super::tm::TmEngine;
use crate::core::models::request::BatchEntry;
use crate::core::models::result::TmResult;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Cooperative stop signal for a running batch.
///
/// Clones share the same flag. Items that have not started when the flag is observed are
/// skipped; items already running finish normally.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    /// Position of the entry in the submitted batch.
    pub index: usize,
    pub label: String,
    pub outcome: Result<TmResult, CalculationFailure>,
}

impl BatchItem {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

// Flattens the outcome into `status` plus either `result` or `failure`.
impl Serialize for BatchItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("index", &self.index)?;
        map.serialize_entry("label", &self.label)?;
        match &self.outcome {
            Ok(result) => {
                map.serialize_entry("status", "ok")?;
                map.serialize_entry("result", result)?;
            }
            Err(failure) => {
                map.serialize_entry("status", "failed")?;
                map.serialize_entry("failure", failure)?;
            }
        }
        map.end()
    }
}

/// Completed items in input order. When a batch is cancelled, `skipped` counts the entries
/// that were never started and their indices are absent from `items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
    pub cancelled: bool,
    pub skipped: usize,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    pub fn total(&self) -> usize {
        self.items.len() + self.skipped
    }
}

/// Runs a [`TmEngine`] over many entries in parallel.
///
/// Each entry is calculated independently, so one failing entry never affects another.
/// Output order always matches input order regardless of which worker finished first.
#[derive(Debug, Clone)]
pub struct BatchScheduler {
    engine: TmEngine,
}

impl BatchScheduler {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: TmEngine::new(config)?,
        })
    }

    pub fn engine(&self) -> &TmEngine {
        &self.engine
    }

    pub fn run(
        &self,
        entries: &[BatchEntry],
        reporter: &ProgressReporter,
        cancellation: &CancellationToken,
    ) -> Result<BatchReport, EngineError> {
        reporter.report(Progress::BatchStart {
            entries: entries.len() as u64,
        });

        let slots = match self.engine.config().workers {
            Some(workers) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| EngineError::WorkerPool {
                        workers,
                        message: e.to_string(),
                    })?;
                debug!(workers, "Dispatching batch on a dedicated worker pool.");
                pool.install(|| self.dispatch(entries, reporter, cancellation))
            }
            None => self.dispatch(entries, reporter, cancellation),
        };

        let items: Vec<BatchItem> = slots.into_iter().flatten().collect();
        let skipped = entries.len() - items.len();
        reporter.report(Progress::BatchFinish {
            completed: items.len(),
            skipped,
        });
        if skipped > 0 {
            warn!(
                skipped,
                completed = items.len(),
                "Batch cancelled before all entries were started."
            );
        }

        Ok(BatchReport {
            items,
            cancelled: skipped > 0,
            skipped,
        })
    }

    fn dispatch(
        &self,
        entries: &[BatchEntry],
        reporter: &ProgressReporter,
        cancellation: &CancellationToken,
    ) -> Vec<Option<BatchItem>> {
        entries
            .par_iter()
            .enumerate()
            .map(|(index, entry)| {
                if cancellation.is_cancelled() {
                    return None;
                }
                let outcome = self.engine.calculate(&entry.sequence, &entry.conditions);
                reporter.report(Progress::EntryFinished {
                    index,
                    succeeded: outcome.is_ok(),
                });
                Some(BatchItem {
                    index,
                    label: entry.label.clone(),
                    outcome,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::conditions::ReactionConditions;
    use crate::core::sequence::validator::AlphabetError;
    use crate::engine::error::FailureReason;
    use std::sync::Mutex;

    fn entry(label: &str, sequence: &str) -> BatchEntry {
        BatchEntry::new(label, sequence, ReactionConditions::default())
    }

    fn scheduler_with_workers(workers: usize) -> BatchScheduler {
        BatchScheduler::new(EngineConfig::builder().workers(workers).build().unwrap()).unwrap()
    }

    #[test]
    fn failing_entry_does_not_block_or_reorder_neighbors() {
        let entries = vec![
            entry("P1", "ATGCGTACGTAGC"),
            entry("P2", ""),
            entry("P3", "ACGT"),
        ];
        let report = BatchScheduler::new(EngineConfig::default())
            .unwrap()
            .run(&entries, &ProgressReporter::new(), &CancellationToken::new())
            .unwrap();

        assert_eq!(report.items.len(), 3);
        assert!(!report.cancelled);
        assert_eq!(report.skipped, 0);

        let labels: Vec<&str> = report.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["P1", "P2", "P3"]);
        let indices: Vec<usize> = report.items.iter().map(|i| i.index).collect();
        assert_eq!(indices, [0, 1, 2]);

        assert!(report.items[0].is_success());
        assert_eq!(
            report.items[1].outcome.as_ref().unwrap_err().reason,
            FailureReason::InvalidAlphabet(AlphabetError::Empty)
        );
        assert!(report.items[2].is_success());
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn parallel_results_match_sequential_results_in_input_order() {
        let bases = ["ATGCGTACGTAGC", "GGGCCCAAATTT", "ACGTRYACGT", "X", "AC", "TTTTTTTTTTTTTTTTTTTA"];
        let entries: Vec<BatchEntry> = (0..120)
            .map(|i| entry(&format!("E{i}"), bases[i % bases.len()]))
            .collect();

        let scheduler = scheduler_with_workers(4);
        let report = scheduler
            .run(&entries, &ProgressReporter::new(), &CancellationToken::new())
            .unwrap();

        assert_eq!(report.items.len(), entries.len());
        for (i, (item, entry)) in report.items.iter().zip(&entries).enumerate() {
            assert_eq!(item.index, i);
            assert_eq!(item.label, entry.label);
            let expected = scheduler
                .engine()
                .calculate(&entry.sequence, &entry.conditions);
            assert_eq!(item.outcome, expected);
        }
    }

    #[test]
    fn duplicate_labels_are_kept_as_given() {
        let entries = vec![entry("dup", "ACGTACGT"), entry("dup", "GGCCAATT")];
        let report = BatchScheduler::new(EngineConfig::default())
            .unwrap()
            .run(&entries, &ProgressReporter::new(), &CancellationToken::new())
            .unwrap();
        assert_eq!(report.items.len(), 2);
        assert!(report.items.iter().all(|i| i.label == "dup"));
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let report = BatchScheduler::new(EngineConfig::default())
            .unwrap()
            .run(&[], &ProgressReporter::new(), &CancellationToken::new())
            .unwrap();
        assert!(report.items.is_empty());
        assert!(!report.cancelled);
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn cancelled_token_skips_every_entry() {
        let entries = vec![entry("A", "ACGTACGT"), entry("B", "GGCCAATT")];
        let token = CancellationToken::new();
        token.cancel();

        let report = scheduler_with_workers(2)
            .run(&entries, &ProgressReporter::new(), &token)
            .unwrap();
        assert!(report.items.is_empty());
        assert!(report.cancelled);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn cancellation_mid_batch_keeps_completed_items_in_order() {
        let entries: Vec<BatchEntry> = (0..50)
            .map(|i| entry(&format!("E{i}"), "ATGCGTACGTAGC"))
            .collect();
        let token = CancellationToken::new();
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if matches!(event, Progress::EntryFinished { .. }) {
                token.cancel();
            }
        }));

        let report = scheduler_with_workers(1)
            .run(&entries, &reporter, &token)
            .unwrap();

        assert!(report.cancelled);
        assert!(!report.items.is_empty());
        assert!(report.items.len() < entries.len());
        assert_eq!(report.items.len() + report.skipped, entries.len());
        assert!(report.items.windows(2).all(|w| w[0].index < w[1].index));
        assert!(report.items.iter().all(BatchItem::is_success));
    }

    #[test]
    fn progress_reports_one_event_per_entry() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let entries = vec![entry("A", "ACGTACGT"), entry("B", ""), entry("C", "GGCCAATT")];

        scheduler_with_workers(2)
            .run(&entries, &reporter, &CancellationToken::new())
            .unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.first(), Some(&Progress::BatchStart { entries: 3 }));
        assert_eq!(
            events.last(),
            Some(&Progress::BatchFinish {
                completed: 3,
                skipped: 0
            })
        );

        let mut finished: Vec<(usize, bool)> = events
            .iter()
            .filter_map(|e| match e {
                Progress::EntryFinished { index, succeeded } => Some((*index, *succeeded)),
                _ => None,
            })
            .collect();
        finished.sort();
        assert_eq!(finished, [(0, true), (1, false), (2, true)]);
    }

    #[test]
    fn scheduler_rejects_zero_workers() {
        let config = EngineConfig {
            workers: Some(0),
            ..EngineConfig::default()
        };
        assert!(BatchScheduler::new(config).is_err());
    }

    #[test]
    fn item_serializes_status_alongside_outcome() {
        let report = BatchScheduler::new(EngineConfig::default())
            .unwrap()
            .run(
                &[entry("ok", "ACGTACGT"), entry("bad", "ACXT")],
                &ProgressReporter::new(),
                &CancellationToken::new(),
            )
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["items"][0]["status"], "ok");
        assert_eq!(value["items"][0]["label"], "ok");
        assert!(value["items"][0]["result"]["correctedTm"].is_number());
        assert_eq!(value["items"][1]["status"], "failed");
        assert_eq!(value["items"][1]["failure"]["reason"]["kind"], "invalid-alphabet");
        assert_eq!(value["cancelled"], false);
    }
}
