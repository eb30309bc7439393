//! Per-pair link synchronization.
//!
//! [`synchronize`] brings one alias path into the desired symlink state in a
//! single pass and reports every branch it takes.  Failures end the pair, not
//! the run.
use std::path::Path;

use crate::config::LinkPair;
use crate::error::LinkError;
use crate::logging::{LinkEntry, LinkStatus, Log};
use crate::platform::Platform;
use crate::privilege;
use crate::resources::{AliasLink, EntryKind, LinkState};

/// Terminal state of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The alias already pointed at the source; nothing changed.
    Skip,
    /// The alias did not exist and was created.
    Created,
    /// A stale entry was removed and the alias created.
    ReplacedThenCreated,
    /// Dry run: the alias would be created.
    WouldCreate,
    /// Dry run: a stale entry would be removed and the alias created.
    WouldReplace,
    /// The source does not exist; nothing changed.
    FailedSourceMissing,
    /// The stale entry could not be removed; it was left untouched.
    FailedRemoval,
    /// The OS refused to create the symlink.
    FailedCreation,
}

impl LinkOutcome {
    /// Summary status for this outcome.
    #[must_use]
    pub const fn status(self) -> LinkStatus {
        match self {
            Self::Skip => LinkStatus::Unchanged,
            Self::Created | Self::ReplacedThenCreated => LinkStatus::Linked,
            Self::WouldCreate | Self::WouldReplace => LinkStatus::DryRun,
            Self::FailedSourceMissing | Self::FailedRemoval | Self::FailedCreation => {
                LinkStatus::Failed
            }
        }
    }

    /// Whether this outcome is a failure.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self.status(), LinkStatus::Failed)
    }
}

/// Options that shape a synchronization pass.
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Host platform, used for remediation hints.
    pub platform: Platform,
    /// Report intended changes without touching the filesystem.
    pub dry_run: bool,
}

/// Bring `root/pair.alias` into the state "symlink to `pair.source`".
///
/// Records a [`LinkEntry`] with `log` and returns the terminal state.
pub fn synchronize(
    root: &Path,
    pair: &LinkPair,
    opts: &SyncOptions,
    log: &dyn Log,
) -> LinkOutcome {
    let link = AliasLink::new(root, &pair.alias, &pair.source);
    let (outcome, message) = run_pair(&link, pair, opts, log);
    log.record_link(LinkEntry {
        alias: pair.alias.clone(),
        source: pair.source.clone(),
        status: outcome.status(),
        message,
    });
    outcome
}

fn run_pair(
    link: &AliasLink,
    pair: &LinkPair,
    opts: &SyncOptions,
    log: &dyn Log,
) -> (LinkOutcome, Option<String>) {
    log.debug(&format!(
        "{} -> {}",
        link.alias_path().display(),
        link.source_path().display()
    ));

    if !link.source_exists() {
        let err = LinkError::SourceMissing {
            source_name: pair.source.clone(),
        };
        log.error(&err.to_string());
        return (LinkOutcome::FailedSourceMissing, Some(err.to_string()));
    }

    let state = link.inspect();
    log.debug(&format!("{}: {state:?}", pair.alias));

    let replacing = match state {
        LinkState::SymlinkCorrect => {
            log.info(&format!("skip: link already correct: {}", link.description()));
            return (LinkOutcome::Skip, None);
        }
        LinkState::Absent => false,
        LinkState::SymlinkIncorrect { .. } | LinkState::Other(_) => true,
    };

    if opts.dry_run {
        return dry_run_pair(link, pair, &state, log);
    }

    if replacing {
        log.info(&format!("update: removing old file/link: {}", pair.alias));
        if let Err(cause) = link.remove_existing() {
            let err = LinkError::RemovalFailed {
                alias: pair.alias.clone(),
                cause,
            };
            log.error(&err.to_string());
            return (LinkOutcome::FailedRemoval, Some(err.to_string()));
        }
    }

    if let Err(cause) = link.create() {
        let err = LinkError::LinkCreationFailed {
            alias: pair.alias.clone(),
            source_name: pair.source.clone(),
            cause,
        };
        log.error(&err.to_string());
        privilege::creation_hint(&opts.platform, log);
        return (LinkOutcome::FailedCreation, Some(err.to_string()));
    }

    log.info(&format!("success: created symlink: {}", link.description()));
    let outcome = if replacing {
        LinkOutcome::ReplacedThenCreated
    } else {
        LinkOutcome::Created
    };
    (outcome, None)
}

fn dry_run_pair(
    link: &AliasLink,
    pair: &LinkPair,
    state: &LinkState,
    log: &dyn Log,
) -> (LinkOutcome, Option<String>) {
    match state {
        LinkState::Absent => {
            log.dry_run(&format!("would create symlink: {}", link.description()));
            (LinkOutcome::WouldCreate, None)
        }
        LinkState::Other(EntryKind::Directory) if link.is_non_empty_dir() => {
            let msg = format!(
                "could not remove old {}: directory is not empty",
                pair.alias
            );
            log.error(&msg);
            (LinkOutcome::FailedRemoval, Some(msg))
        }
        _ => {
            log.dry_run(&format!(
                "would replace {} with symlink: {}",
                describe_state(state),
                link.description()
            ));
            (LinkOutcome::WouldReplace, None)
        }
    }
}

fn describe_state(state: &LinkState) -> String {
    match state {
        LinkState::Absent => "nothing".to_string(),
        LinkState::SymlinkCorrect => "correct symlink".to_string(),
        LinkState::SymlinkIncorrect { current: Some(t) } => {
            format!("symlink to {}", t.display())
        }
        LinkState::SymlinkIncorrect { current: None } => "unreadable symlink".to_string(),
        LinkState::Other(EntryKind::File) => "file".to_string(),
        LinkState::Other(EntryKind::Directory) => "empty directory".to_string(),
    }
}
