//! Link mapping configuration.
//!
//! The mapping is either the built-in table or, when the project root holds
//! an [`MAPPING_FILE`], the `[[links]]` array read from it.
pub mod links;

pub use links::{LinkMapping, LinkPair, MAPPING_FILE};
