//! Domain-specific error types for the link synchronizer.
//!
//! Per-pair failures are modelled by [`LinkError`]; they are reported to the
//! console and never abort the run.  [`ConfigError`] covers loading the
//! optional mapping file and is the only error that reaches `main`.
//!
//! # Error hierarchy
//!
//! ```text
//! LinkError
//! ├── SourceMissing       — canonical source file is absent
//! ├── RemovalFailed       — stale alias entry could not be removed
//! └── LinkCreationFailed  — the OS refused to create the symlink
//!
//! ConfigError
//! ├── Io                  — mapping file could not be read
//! └── Parse               — mapping file is not valid TOML
//! ```

use std::io;

use thiserror::Error;

/// Errors that end the processing of a single alias/source pair.
#[derive(Error, Debug)]
pub enum LinkError {
    /// The canonical source file does not exist under the project root.
    #[error("source file not found: {source_name}")]
    SourceMissing {
        /// Configured source name (relative to the project root).
        source_name: String,
    },

    /// An incorrect entry at the alias path could not be removed.
    #[error("could not remove old {alias}: {cause}")]
    RemovalFailed {
        /// Configured alias name.
        alias: String,
        /// Underlying filesystem error.
        #[source]
        cause: io::Error,
    },

    /// Creating the symbolic link failed.
    #[error("could not create link {alias} -> {source_name}: {cause}")]
    LinkCreationFailed {
        /// Configured alias name.
        alias: String,
        /// Configured source name.
        source_name: String,
        /// Underlying filesystem error.
        #[source]
        cause: io::Error,
    },
}

/// Errors that arise while loading the link mapping file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The mapping file exists but could not be read.
    #[error("IO error reading mapping file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The mapping file is not valid TOML or does not match the schema.
    #[error("invalid mapping file {path}: {message}")]
    Parse {
        /// Path to the offending file.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
}
