//! In-memory logger.
use std::sync::Mutex;

use super::types::{Level, LinkEntry, Log};

/// A single buffered log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Kind of line.
    pub level: Level,
    /// Message text as passed to the logger.
    pub message: String,
}

/// Implement the display methods of [`Log`] by buffering each message as the
/// corresponding [`Level`].
macro_rules! buffer_log_methods {
    ($($method:ident => $level:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.push(Level::$level, msg);
            }
        )+
    };
}

/// Logger that keeps every line and summary entry in memory.
///
/// Lines can be inspected with [`lines`](Self::lines).
#[derive(Debug, Default)]
pub struct BufferedLog {
    lines: Mutex<Vec<LogLine>>,
    links: Mutex<Vec<LinkEntry>>,
}

impl BufferedLog {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, level: Level, msg: &str) {
        if let Ok(mut guard) = self.lines.lock() {
            guard.push(LogLine {
                level,
                message: msg.to_string(),
            });
        }
    }

    /// All buffered lines, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Messages of every line at `level`, in order.
    #[must_use]
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.level == level)
            .map(|l| l.message)
            .collect()
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.message.contains(needle))
    }

    /// Whether nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

impl Log for BufferedLog {
    buffer_log_methods!(
        stage => Stage,
        info => Info,
        debug => Debug,
        warn => Warn,
        error => Error,
        dry_run => DryRun,
    );

    fn record_link(&self, entry: LinkEntry) {
        if let Ok(mut guard) = self.links.lock() {
            guard.push(entry);
        }
    }

    fn entries(&self) -> Vec<LinkEntry> {
        self.links.lock().map_or_else(|_| vec![], |g| g.clone())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::LinkStatus;

    #[test]
    fn buffers_lines_in_order() {
        let log = BufferedLog::new();
        log.stage("Linking");
        log.info("created symlink");
        log.error("source file not found");

        let lines = log.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].level, Level::Stage);
        assert_eq!(lines[1].message, "created symlink");
        assert_eq!(lines[2].level, Level::Error);
    }

    #[test]
    fn lines_at_filters_by_level() {
        let log = BufferedLog::new();
        log.info("one");
        log.debug("hidden");
        log.info("two");
        assert_eq!(log.lines_at(Level::Info), vec!["one", "two"]);
        assert_eq!(log.lines_at(Level::Debug), vec!["hidden"]);
    }

    #[test]
    fn record_link_does_not_add_lines() {
        let log = BufferedLog::new();
        log.record_link(LinkEntry {
            alias: "CLAUDE.md".to_string(),
            source: "AGENTS.md".to_string(),
            status: LinkStatus::Unchanged,
            message: None,
        });
        assert!(log.is_empty());
        assert_eq!(log.entries().len(), 1);
    }
}
