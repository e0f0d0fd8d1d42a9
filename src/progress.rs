//! Simulated progress feedback while waiting on the compliance service.
//!
//! The service reports nothing until it answers, so the indicator advances on a
//! timer. It saturates at 100% and holds the last phrase; only the real response
//! stops it.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::{AdvanceMode, ProgressConfig};
use crate::error::Operation;

pub const PROGRESS_MESSAGES: &[&str] = &[
    "Initializing analysis...",
    "Fetching website content...",
    "Analyzing images and alt text...",
    "Checking color contrast...",
    "Examining form accessibility...",
    "Evaluating heading structure...",
    "Testing keyboard navigation...",
    "Generating compliance report...",
    "Finalizing results...",
];

const RANDOM_STEP_CEILING: f64 = 15.0;

/// Index of the phrase to show at `percent`: `floor(percent/100 * (count-1))`.
pub fn message_index(percent: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let ratio = percent.clamp(0.0, 100.0) / 100.0;
    let index = (ratio * (count - 1) as f64).floor() as usize;

    index.min(count - 1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Constant step sized so that 100% is reached after the target duration.
    Fixed(f64),
    /// Uniform step in `[0, 15)`.
    Random,
}

impl Advance {
    pub fn new(mode: AdvanceMode, target: Duration, tick: Duration) -> Self {
        match mode {
            AdvanceMode::Fixed => {
                let tick_ms = tick.as_millis().max(1) as f64;
                let ticks = (target.as_millis() as f64 / tick_ms).max(1.0);
                Advance::Fixed(100.0 / ticks)
            }
            AdvanceMode::Random => Advance::Random,
        }
    }

    fn step(&self, rng: &mut impl Rng) -> f64 {
        match self {
            Advance::Fixed(step) => *step,
            Advance::Random => rng.gen_range(0.0..RANDOM_STEP_CEILING),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgressState {
    percent: f64,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, step: f64) {
        self.percent = (self.percent + step.max(0.0)).min(100.0);
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_saturated(&self) -> bool {
        self.percent >= 100.0
    }

    pub fn message(&self) -> &'static str {
        PROGRESS_MESSAGES[message_index(self.percent, PROGRESS_MESSAGES.len())]
    }
}

/// Builds indicators for each dispatched operation.
#[derive(Debug, Clone)]
pub struct ProgressFactory {
    config: ProgressConfig,
    visible: bool,
    active: Arc<AtomicUsize>,
}

impl ProgressFactory {
    pub fn new(config: ProgressConfig, visible: bool) -> Self {
        Self {
            config,
            visible,
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn hidden(config: ProgressConfig) -> Self {
        Self::new(config, false)
    }

    pub fn start(&self, operation: Operation) -> ProgressIndicator {
        let target = match operation {
            Operation::QuickScan => self.config.quick_scan_ms,
            Operation::FullAnalysis | Operation::RiskAssessment => self.config.full_analysis_ms,
        };

        let tick = Duration::from_millis(self.config.tick_ms.max(1));
        let advance = Advance::new(self.config.mode, Duration::from_millis(target), tick);

        let bar = if self.visible {
            styled_bar()
        } else {
            ProgressBar::hidden()
        };

        debug!(%operation, ?advance, "starting progress indicator");
        let mut indicator = ProgressIndicator::start(bar, advance, tick);

        self.active.fetch_add(1, Ordering::SeqCst);
        indicator.active = Some(self.active.clone());

        indicator
    }

    /// Number of indicators started by this factory that are still showing.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

fn styled_bar() -> ProgressBar {
    let bar = ProgressBar::new(100);
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// A running progress timer. Cancelled by [`ProgressIndicator::stop`] or on drop.
pub struct ProgressIndicator {
    bar: ProgressBar,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    active: Option<Arc<AtomicUsize>>,
}

impl ProgressIndicator {
    pub fn start(bar: ProgressBar, advance: Advance, tick: Duration) -> Self {
        bar.set_length(100);
        bar.set_position(0);
        bar.set_message(PROGRESS_MESSAGES[0]);

        let token = CancellationToken::new();
        let handle = tokio::spawn(run_ticker(bar.clone(), advance, tick, token.clone()));

        Self {
            bar,
            token,
            handle: Some(handle),
            active: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Cancels the timer, waits for it to exit and hides the bar.
    pub async fn stop(mut self) {
        self.token.cancel();

        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }

        self.bar.finish_and_clear();
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.token.cancel();
        self.bar.finish_and_clear();

        if let Some(active) = self.active.take() {
            active.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

async fn run_ticker(bar: ProgressBar, advance: Advance, tick: Duration, token: CancellationToken) {
    let mut state = ProgressState::new();
    let mut rng = StdRng::from_entropy();
    let mut interval = tokio::time::interval(tick);

    // the first tick completes immediately
    interval.tick().await;

    loop {
        if state.is_saturated() {
            token.cancelled().await;
            break;
        }

        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                state.advance(advance.step(&mut rng));
                bar.set_position(state.percent().round() as u64);
                bar.set_message(state.message());
            }
        }
    }
}
