//! Agent link synchronizer.
//!
//! Keeps alias files such as `CLAUDE.md` in a project directory symlinked to
//! one canonical source such as `AGENTS.md`.  Every run is a single
//! idempotent pass: correct links are skipped, stale files or links are
//! replaced, and failures are reported per pair without aborting the run.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]** — the ordered alias → source mapping
//! - **[`resources`]** — inspect / remove / create primitives for one alias path
//! - **[`sync`]** — the per-pair state machine
//! - **[`commands`]** — the driver that runs the whole mapping
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod privilege;
pub mod resources;
pub mod root;
pub mod sync;
