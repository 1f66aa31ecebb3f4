//! Case-insensitive directory name exclusion

use std::collections::BTreeSet;
use std::path::Path;

/// Directory name that is always excluded, whatever the caller supplies.
pub const BUILTIN_EXCLUDE: &str = "__pycache__";

/// Set of directory basenames that never receive a marker file.
///
/// Names are lower-cased once at construction, and [`BUILTIN_EXCLUDE`] is
/// always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// Build a set from caller-supplied names merged with the built-in one.
    ///
    /// Empty names are dropped so that a root without a basename (`.`)
    /// can never be excluded by accident.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: BTreeSet<String> = names
            .into_iter()
            .map(|n| n.as_ref().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        set.insert(BUILTIN_EXCLUDE.to_string());
        Self { names: set }
    }

    /// Check whether a bare directory name is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    /// Check whether the basename of `dir` is excluded.
    pub fn is_excluded(&self, dir: &Path) -> bool {
        match dir.file_name() {
            Some(name) => self.contains(&name.to_string_lossy()),
            None => false,
        }
    }

    /// Normalized names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
