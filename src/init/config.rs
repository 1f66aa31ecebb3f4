//! Configuration for a tree initialization run

use super::exclusion::ExclusionSet;

/// Configuration for tree initialization behavior.
#[derive(Debug, Clone, Default)]
pub struct InitConfig {
    /// Directory names that never receive a marker file
    pub exclusions: ExclusionSet,
    /// Descend at most N levels below the root (root is depth 0)
    pub max_depth: Option<usize>,
    /// Prune hidden and .gitignore'd directories from the walk entirely
    pub respect_ignore: bool,
}

impl InitConfig {
    pub fn with_exclusions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            exclusions: ExclusionSet::new(names),
            ..Default::default()
        }
    }
}
