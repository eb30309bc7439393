// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed project and a fluent builder so each
// integration test can lay out alias and source files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use agent_links::config::LinkMapping;
use agent_links::logging::BufferedLog;
use agent_links::platform::{Os, Platform};
use agent_links::sync::{LinkOutcome, SyncOptions};

/// An isolated project directory backed by a [`tempfile::TempDir`].
pub struct TestProject {
    /// Temporary directory acting as the project root.
    pub root: tempfile::TempDir,
}

impl TestProject {
    /// Path to the project root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Absolute path of `name` under the root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Run the driver over `mapping` with Linux semantics, capturing output.
    pub fn sync(&self, mapping: &LinkMapping, dry_run: bool) -> (Vec<LinkOutcome>, BufferedLog) {
        let log = BufferedLog::new();
        let opts = SyncOptions {
            platform: Platform::new(Os::Linux),
            dry_run,
        };
        let outcomes =
            agent_links::commands::sync::sync_all(self.root_path(), mapping, &opts, false, &log);
        (outcomes, log)
    }

    /// Raw target of the symlink at `name`, if it is one.
    pub fn link_target(&self, name: &str) -> Option<PathBuf> {
        std::fs::read_link(self.path(name)).ok()
    }

    /// Whether anything (including a broken symlink) exists at `name`.
    pub fn entry_exists(&self, name: &str) -> bool {
        self.path(name).symlink_metadata().is_ok()
    }
}

/// Fluent builder for [`TestProject`].
pub struct ProjectBuilder {
    project: TestProject,
}

impl ProjectBuilder {
    /// Begin building an empty project.
    pub fn new() -> Self {
        Self {
            project: TestProject {
                root: tempfile::tempdir().expect("create temp dir"),
            },
        }
    }

    /// Write a regular file.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.project.path(name), content).expect("write file");
        self
    }

    /// Create a directory, optionally with one file inside it.
    pub fn with_dir(self, name: &str, inner_file: Option<&str>) -> Self {
        let dir = self.project.path(name);
        std::fs::create_dir_all(&dir).expect("create dir");
        if let Some(file) = inner_file {
            std::fs::write(dir.join(file), "").expect("write inner file");
        }
        self
    }

    /// Create a symlink `name -> target` with a literal target.
    #[cfg(unix)]
    pub fn with_symlink(self, name: &str, target: &str) -> Self {
        std::os::unix::fs::symlink(target, self.project.path(name)).expect("create symlink");
        self
    }

    /// Finish building and return the project.
    pub fn build(self) -> TestProject {
        self.project
    }
}
