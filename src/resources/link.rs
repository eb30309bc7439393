//! Alias symlink resource.
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a non-symlink entry occupying an alias path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory).
    File,
    /// Real directory.
    Directory,
}

/// Observed state of an alias path at the moment of inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing exists at the alias path.
    Absent,
    /// The alias is a symlink whose target file name matches the source.
    SymlinkCorrect,
    /// The alias is a symlink to something else.
    SymlinkIncorrect {
        /// Raw link target, if it could be read.
        current: Option<PathBuf>,
    },
    /// A regular file or directory occupies the alias path.
    Other(EntryKind),
}

/// One alias path under a project root that should link to a source.
#[derive(Debug, Clone)]
pub struct AliasLink {
    root: PathBuf,
    alias: String,
    source: String,
}

impl AliasLink {
    /// Create a resource for `root/alias -> source`.
    #[must_use]
    pub fn new(root: &Path, alias: &str, source: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            alias: alias.to_string(),
            source: source.to_string(),
        }
    }

    /// Human-readable description (`alias -> source`).
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.alias, self.source)
    }

    /// Absolute path of the alias.
    #[must_use]
    pub fn alias_path(&self) -> PathBuf {
        self.root.join(&self.alias)
    }

    /// Absolute path of the source.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// Whether the source exists (following symlinks).
    #[must_use]
    pub fn source_exists(&self) -> bool {
        self.source_path().exists()
    }

    /// Inspect the alias path without following it.
    ///
    /// A symlink is correct when the final component of its immediate target
    /// equals the final component of the source name; the target is not
    /// resolved.
    #[must_use]
    pub fn inspect(&self) -> LinkState {
        let path = self.alias_path();
        let Ok(meta) = fs::symlink_metadata(&path) else {
            return LinkState::Absent;
        };

        if meta.is_symlink() {
            return match fs::read_link(&path) {
                Ok(target) if same_file_name(&target, Path::new(&self.source)) => {
                    LinkState::SymlinkCorrect
                }
                Ok(target) => LinkState::SymlinkIncorrect {
                    current: Some(target),
                },
                Err(_) => LinkState::SymlinkIncorrect { current: None },
            };
        }

        if meta.is_dir() {
            LinkState::Other(EntryKind::Directory)
        } else {
            LinkState::Other(EntryKind::File)
        }
    }

    /// Remove whatever occupies the alias path.
    ///
    /// Directories are removed only when empty; a non-empty directory is an
    /// error and is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the entry cannot be removed.
    pub fn remove_existing(&self) -> io::Result<()> {
        let path = self.alias_path();
        let meta = fs::symlink_metadata(&path)?;
        if is_dir_like(&meta) {
            fs::remove_dir(&path)
        } else {
            fs::remove_file(&path)
        }
    }

    /// Whether the alias path is a directory with at least one entry.
    #[must_use]
    pub fn is_non_empty_dir(&self) -> bool {
        let path = self.alias_path();
        let is_real_dir = fs::symlink_metadata(&path).is_ok_and(|m| m.is_dir() && !m.is_symlink());
        is_real_dir && fs::read_dir(&path).is_ok_and(|mut entries| entries.next().is_some())
    }

    /// Create the symlink `alias -> source`.
    ///
    /// The link target is the literal relative source name, so the link stays
    /// valid when the project directory moves.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the OS refuses to create the link.
    pub fn create(&self) -> io::Result<()> {
        create_symlink(Path::new(&self.source), &self.alias_path(), &self.source_path())
    }
}

/// Compare the final path components of two paths.
fn same_file_name(a: &Path, b: &Path) -> bool {
    a.file_name().is_some_and(|name: &OsStr| Some(name) == b.file_name())
}

/// Create a symlink at `link` whose stored target is `target`.
///
/// `resolved_target` is only consulted on Windows, where file and directory
/// symlinks are distinct.
fn create_symlink(target: &Path, link: &Path, resolved_target: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        let _ = resolved_target;
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    {
        if resolved_target.is_dir() {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        }
    }
}

/// Check if metadata represents a directory-like entry.
///
/// On Windows, `symlink_metadata().is_dir()` returns `false` for directory
/// symlinks, which still have to be removed with `remove_dir`, so the raw
/// `FILE_ATTRIBUTE_DIRECTORY` bit is checked instead.
fn is_dir_like(meta: &fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}
