//! Caller-supplied observability hook for extraction calls.
//!
//! The extractor itself never logs. Callers that want an audit trail attach
//! an [`ExtractionObserver`]; it is handed the [`ExtractionStats`] of every
//! completed call, after the result has been computed.
//!
//! Closures work directly:
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use dialog_extractor::{ExtractionStats, Extractor};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let extractor = Extractor::new()
//!     .with_observer(move |stats: &ExtractionStats| sink.lock().unwrap().push(stats.extracted));
//!
//! extractor.extract(Some("[CHAT] hi\n[CHAT] there")).unwrap();
//! assert_eq!(*seen.lock().unwrap(), vec![2]);
//! ```

use crate::core::stats::ExtractionStats;
use crate::config::DetectionStrategy;

/// Receives the outcome of each extraction call.
pub trait ExtractionObserver: Send + Sync {
    /// Called once per completed extraction.
    fn on_extraction(&self, strategy: DetectionStrategy, stats: &ExtractionStats);
}

impl<F> ExtractionObserver for F
where
    F: Fn(&ExtractionStats) + Send + Sync,
{
    fn on_extraction(&self, _strategy: DetectionStrategy, stats: &ExtractionStats) {
        self(stats);
    }
}

/// Emits one `tracing` event per extraction at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ExtractionObserver for TracingObserver {
    fn on_extraction(&self, strategy: DetectionStrategy, stats: &ExtractionStats) {
        tracing::info!(
            target: "dialog_extractor::extract",
            %strategy,
            lines_scanned = stats.lines_scanned,
            chat_lines = stats.chat_lines,
            noise_dropped = stats.noise_dropped,
            empty_dropped = stats.empty_dropped,
            extracted = stats.extracted,
            "Dialogue extraction finished"
        );
    }
}
