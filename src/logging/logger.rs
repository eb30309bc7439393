//! Console logger with summary collection.
use std::sync::Mutex;

use super::types::{Log, LinkEntry, LinkStatus};

/// Target used for stage headers so the formatter can render them.
pub(super) const STAGE_TARGET: &str = "agent_links::stage";
/// Target used for dry-run lines.
pub(super) const DRY_RUN_TARGET: &str = "agent_links::dry_run";

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger that emits every line as a [`tracing`] event and collects per-pair
/// results for the closing summary.
///
/// Rendering is done by the subscriber installed with
/// [`init_subscriber`](super::subscriber::init_subscriber).
#[derive(Debug, Default)]
pub struct Logger {
    links: Mutex<Vec<LinkEntry>>,
}

impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a pair result for the summary.
    pub fn record_link(&self, entry: LinkEntry) {
        if let Ok(mut guard) = self.links.lock() {
            guard.push(entry);
        }
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<LinkEntry> {
        self.links.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_link(&self, entry: LinkEntry) {
        self.record_link(entry);
    }

    fn entries(&self) -> Vec<LinkEntry> {
        self.entries()
    }
}

/// Render a summary of `entries` through `log`.
///
/// Shared by every [`Log`] backend so buffered runs report identically.
pub fn print_summary(entries: &[LinkEntry], log: &dyn Log) {
    if entries.is_empty() {
        return;
    }

    log.stage("Summary");

    let mut linked = 0u32;
    let mut unchanged = 0u32;
    let mut dry_run = 0u32;
    let mut failed = 0u32;

    for entry in entries {
        let (icon, color) = match entry.status {
            LinkStatus::Linked => {
                linked += 1;
                ("✓", "\x1b[32m")
            }
            LinkStatus::Unchanged => {
                unchanged += 1;
                ("·", "\x1b[2m")
            }
            LinkStatus::DryRun => {
                dry_run += 1;
                ("~", "\x1b[37m")
            }
            LinkStatus::Failed => {
                failed += 1;
                ("✗", "\x1b[31m")
            }
        };

        let suffix = entry
            .message
            .as_ref()
            .map_or_else(String::new, |msg| format!(" ({msg})"));

        log.info(&format!(
            "{color}{icon} {} -> {}{suffix}\x1b[0m",
            entry.alias, entry.source
        ));
    }

    let total = linked + unchanged + dry_run + failed;
    log.info(&format!(
        "{total} links: \x1b[32m{linked} linked\x1b[0m, \x1b[2m{unchanged} unchanged\x1b[0m, \x1b[37m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
    ));
}
