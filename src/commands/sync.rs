//! Command: synchronize every alias in the mapping.
use anyhow::Result;
use std::path::Path;

use crate::cli::Cli;
use crate::config::LinkMapping;
use crate::logging::{Log, print_summary};
use crate::platform::Platform;
use crate::privilege;
use crate::root;
use crate::sync::{LinkOutcome, SyncOptions, synchronize};

/// Run the tool as invoked from the command line.
///
/// # Errors
///
/// Returns an error only when the project root cannot be resolved.  Per-pair
/// failures and a bad mapping file are reported and do not produce an error.
pub fn run(args: &Cli, log: &dyn Log) -> Result<()> {
    let platform = Platform::detect();
    let root = root::resolve(args.root.as_deref())?;
    let mapping = load_mapping(&root, log);

    let version = option_env!("AGENT_LINKS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("agent-links {version} on {}", platform.os));

    let elevated = platform.restricts_symlinks() && privilege::is_elevated(&platform);
    let opts = SyncOptions {
        platform,
        dry_run: args.dry_run,
    };
    sync_all(&root, &mapping, &opts, elevated, log);
    Ok(())
}

/// Load the mapping for `root`, reporting a broken mapping file and falling
/// back to the built-in table.
pub fn load_mapping(root: &Path, log: &dyn Log) -> LinkMapping {
    LinkMapping::load(root).unwrap_or_else(|err| {
        log.error(&err.to_string());
        log.warn("using the built-in link mapping");
        LinkMapping::builtin()
    })
}

/// Print the root, run the advisory, process every pair in mapping order,
/// then print the summary and the completion marker.
///
/// `elevated` is the result of the privilege probe; it only matters on
/// platforms that restrict symlink creation.
pub fn sync_all(
    root: &Path,
    mapping: &LinkMapping,
    opts: &SyncOptions,
    elevated: bool,
    log: &dyn Log,
) -> Vec<LinkOutcome> {
    log.stage(&format!("Project root: {}", root.display()));
    privilege::advise(&opts.platform, elevated, log);
    log.debug(&format!("{} link(s) configured", mapping.len()));

    if opts.dry_run {
        log.stage("Checking links (dry run)");
    } else {
        log.stage("Linking");
    }

    let outcomes = mapping
        .iter()
        .map(|pair| synchronize(root, pair, opts, log))
        .collect();

    print_summary(&log.entries(), log);
    log.stage("Done.");
    outcomes
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::LinkPair;
    use crate::logging::{BufferedLog, Level};
    use crate::platform::Os;

    fn linux_opts() -> SyncOptions {
        SyncOptions {
            platform: Platform::new(Os::Linux),
            dry_run: false,
        }
    }

    #[test]
    fn prints_root_first_and_done_last() {
        let dir = tempfile::tempdir().unwrap();
        let log = BufferedLog::new();
        sync_all(
            dir.path(),
            &LinkMapping::builtin(),
            &linux_opts(),
            false,
            &log,
        );

        let stages = log.lines_at(Level::Stage);
        assert!(stages[0].starts_with("Project root: "));
        assert_eq!(stages.last().map(String::as_str), Some("Done."));
    }

    #[test]
    fn failures_do_not_stop_later_pairs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AGENTS.md"), "# agents").unwrap();
        let mapping = LinkMapping::from_pairs(vec![
            LinkPair::new("GEMINI.md", "MISSING.md"),
            LinkPair::new("CLAUDE.md", "AGENTS.md"),
        ]);
        let log = BufferedLog::new();

        let outcomes = sync_all(dir.path(), &mapping, &linux_opts(), false, &log);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0], LinkOutcome::FailedSourceMissing);
        #[cfg(unix)]
        assert_eq!(outcomes[1], LinkOutcome::Created);
    }

    #[test]
    fn empty_mapping_only_prints_banners() {
        let dir = tempfile::tempdir().unwrap();
        let log = BufferedLog::new();
        let outcomes = sync_all(
            dir.path(),
            &LinkMapping::from_pairs(vec![]),
            &linux_opts(),
            false,
            &log,
        );
        assert!(outcomes.is_empty());
        assert!(log.lines_at(Level::Info).is_empty());
        assert!(log.contains("Done."));
    }

    #[test]
    fn broken_mapping_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(crate::config::MAPPING_FILE), "links = 3").unwrap();
        let log = BufferedLog::new();

        assert_eq!(load_mapping(dir.path(), &log), LinkMapping::builtin());
        let errors = log.lines_at(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("invalid mapping file"));
        assert!(log.contains("using the built-in link mapping"));
    }

    #[test]
    fn missing_mapping_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let log = BufferedLog::new();
        assert_eq!(load_mapping(dir.path(), &log), LinkMapping::builtin());
        assert!(log.is_empty());
    }

    #[test]
    fn windows_advisory_precedes_linking() {
        let dir = tempfile::tempdir().unwrap();
        let log = BufferedLog::new();
        let opts = SyncOptions {
            platform: Platform::new(Os::Windows),
            dry_run: true,
        };
        sync_all(dir.path(), &LinkMapping::builtin(), &opts, false, &log);

        let lines = log.lines();
        let advisory = lines
            .iter()
            .position(|l| l.message.contains("without administrator privileges"))
            .unwrap();
        let linking = lines
            .iter()
            .position(|l| l.message.starts_with("Checking links"))
            .unwrap();
        assert!(advisory < linking);
    }
}
