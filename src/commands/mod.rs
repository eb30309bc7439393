//! Top-level command orchestration.
pub mod sync;
