use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use meltpoint::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders engine progress events as an `indicatif` spinner and bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<BarState>>,
}

struct BarState {
    pb: ProgressBar,
    failed: usize,
    cancelled: bool,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(target);
        pb.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(BarState {
                pb,
                failed: 0,
                cancelled: false,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut guard) = state.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    guard.cancelled = false;
                    guard.pb.reset();
                    guard.pb.set_length(0);
                    guard.pb.set_style(Self::spinner_style());
                    guard
                        .pb
                        .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    guard.pb.set_message(name);
                }
                Progress::PhaseFinish => {
                    guard.pb.disable_steady_tick();
                    if guard.cancelled {
                        guard.pb.abandon_with_message("Cancelled");
                    } else {
                        guard.pb.finish_with_message("✓ Done");
                    }
                }
                Progress::BatchStart { entries } => {
                    guard.failed = 0;
                    guard.cancelled = false;
                    guard.pb.disable_steady_tick();
                    guard.pb.reset();
                    guard.pb.set_length(entries);
                    guard.pb.set_position(0);
                    guard.pb.set_style(Self::bar_style());
                    guard.pb.set_message("Primers");
                }
                Progress::EntryFinished { succeeded, .. } => {
                    if !succeeded {
                        guard.failed += 1;
                        let message = format!("{} failed", guard.failed);
                        guard.pb.set_message(message);
                    }
                    guard.pb.inc(1);
                }
                Progress::BatchFinish { skipped, .. } => {
                    // A cancelled bar keeps its position instead of jumping to full length.
                    if skipped > 0 {
                        guard.cancelled = true;
                        guard
                            .pb
                            .println(format!("  {} primer(s) skipped after cancellation", skipped));
                        guard.pb.abandon();
                    } else {
                        guard.pb.finish();
                    }
                }
                Progress::Message(msg) => {
                    if !guard.pb.is_finished() {
                        guard.pb.println(format!("  {}", msg));
                    } else {
                        guard.pb.set_message(msg);
                    }
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
