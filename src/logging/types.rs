//! Core logging types: link entries, status, and the [`Log`] trait.

/// Severity / kind of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Section header (`==>`).
    Stage,
    /// Regular status line.
    Info,
    /// Detail shown only with `--verbose`.
    Debug,
    /// Advisory or hint.
    Warn,
    /// Per-pair failure.
    Error,
    /// Action that a dry run would have performed.
    DryRun,
}

/// Per-pair result for summary reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Alias name that was processed.
    pub alias: String,
    /// Source name the alias should point to.
    pub source: String,
    /// Summary status of the pair.
    pub status: LinkStatus,
    /// Optional detail (e.g. error description).
    pub message: Option<String>,
}

/// Summary status of a processed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// A symlink was created (possibly after removing a stale entry).
    Linked,
    /// The alias already pointed at the source; nothing was touched.
    Unchanged,
    /// Dry run; a change would have been made.
    DryRun,
    /// The pair failed and was left as found.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) emits through `tracing`;
/// [`BufferedLog`](super::buffered::BufferedLog) keeps lines in memory so
/// callers (and tests) can inspect exactly what a run reported.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a pair result for the summary.
    fn record_link(&self, entry: LinkEntry);
    /// All recorded pair results, in order.
    fn entries(&self) -> Vec<LinkEntry>;
}
