//! Filesystem primitives for alias links (inspect, remove, create).
pub mod link;

pub use link::{AliasLink, EntryKind, LinkState};
