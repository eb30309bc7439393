//! Alias → source mapping and its optional TOML override.
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// File name of the optional mapping override, relative to the project root.
pub const MAPPING_FILE: &str = "agent-links.toml";

/// Built-in table used when no mapping file is present.
const BUILTIN: &[(&str, &str)] = &[("CLAUDE.md", "AGENTS.md")];

/// One alias that should be a symlink to a source, both relative to the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkPair {
    /// Link file name to manage (e.g. `CLAUDE.md`).
    pub alias: String,
    /// Existing canonical file the alias points at (e.g. `AGENTS.md`).
    pub source: String,
}

impl LinkPair {
    /// Create a pair from borrowed names.
    #[must_use]
    pub fn new(alias: &str, source: &str) -> Self {
        Self {
            alias: alias.to_string(),
            source: source.to_string(),
        }
    }
}

/// Ordered, immutable list of alias/source pairs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMapping {
    pairs: Vec<LinkPair>,
}

/// On-disk shape of [`MAPPING_FILE`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingFile {
    #[serde(default)]
    links: Vec<LinkPair>,
}

impl LinkMapping {
    /// The built-in mapping.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .map(|(alias, source)| LinkPair::new(alias, source))
                .collect(),
        )
    }

    /// Build a mapping from explicit pairs, keeping their order.
    #[must_use]
    pub const fn from_pairs(pairs: Vec<LinkPair>) -> Self {
        Self { pairs }
    }

    /// Parse a mapping from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or has
    /// unexpected keys.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: MappingFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        Ok(Self::from_pairs(file.links))
    }

    /// Load the mapping for `root`: [`MAPPING_FILE`] if present, otherwise
    /// the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(MAPPING_FILE);
        if !path.exists() {
            return Ok(Self::builtin());
        }

        let origin = path.display().to_string();
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: origin.clone(),
            source,
        })?;
        Self::parse(&content, &origin)
    }

    /// Iterate pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = &LinkPair> {
        self.pairs.iter()
    }

    /// Number of pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the mapping has no pairs.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a LinkMapping {
    type Item = &'a LinkPair;
    type IntoIter = std::slice::Iter<'a, LinkPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
