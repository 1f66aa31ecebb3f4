//! TreeInitializer - walks a tree and seeds marker files

use std::io;
use std::path::Path;

use ignore::{Walk, WalkBuilder};
use tracing::{debug, trace, warn};

use crate::error::InitError;

use super::config::InitConfig;
use super::decision::{Decision, InitSummary};
use super::marker::{MarkerFs, StdFs, ensure_marker};
use super::reporter::InitReporter;

/// Walks a directory tree and makes sure every non-excluded directory
/// holds a marker file.
///
/// Excluded directories are skipped but still descended into; their
/// children are judged on their own names.
pub struct TreeInitializer<F = StdFs> {
    config: InitConfig,
    fs: F,
}

impl TreeInitializer<StdFs> {
    pub fn new(config: InitConfig) -> Self {
        Self { config, fs: StdFs }
    }
}

impl<F: MarkerFs> TreeInitializer<F> {
    /// Replace the filesystem used for marker checks and writes.
    pub fn with_fs<G: MarkerFs>(self, fs: G) -> TreeInitializer<G> {
        TreeInitializer {
            config: self.config,
            fs,
        }
    }

    /// Run over the tree rooted at `root`.
    ///
    /// Fails before touching anything if `root` is not a directory. After
    /// that only reporter write failures abort; per-directory errors are
    /// reported and counted in the returned summary.
    pub fn run<R: InitReporter + ?Sized>(
        &self,
        root: &Path,
        reporter: &mut R,
    ) -> Result<InitSummary, InitError> {
        validate_root(root)?;
        reporter.start(root, &self.config.exclusions)?;

        let mut summary = InitSummary::default();
        for result in self.build_walk(root) {
            let (path, decision) = match result {
                Ok(entry) => {
                    // Symlinked directories are not followed, so they show
                    // up here as non-directories and are passed over.
                    if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                        continue;
                    }
                    let decision = self.visit(entry.path());
                    (entry.into_path(), decision)
                }
                Err(err) => {
                    let path = error_path(&err).unwrap_or(root).to_path_buf();
                    warn!(path = %path.display(), "walk error: {}", err);
                    (path, Decision::Unreadable(err))
                }
            };

            trace!(path = %path.display(), status = decision.label(), "visited");
            summary.tally(&decision);
            reporter.record(&path, &decision)?;
        }

        debug!(
            created = summary.created,
            existing = summary.already_existed,
            skipped = summary.skipped,
            errors = summary.errors,
            "initialization finished"
        );
        reporter.finish(&summary)?;
        Ok(summary)
    }

    /// Decide and act on a single directory, without descending.
    pub fn visit(&self, dir: &Path) -> Decision {
        if self.config.exclusions.is_excluded(dir) {
            Decision::Skipped
        } else {
            ensure_marker(&self.fs, dir)
        }
    }

    fn build_walk(&self, root: &Path) -> Walk {
        let respect = self.config.respect_ignore;
        WalkBuilder::new(root)
            .hidden(respect)
            .ignore(respect)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .parents(respect)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
    }
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), InitError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(InitError::NotADirectory(root.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(InitError::NotFound(root.to_path_buf()))
        }
        Err(source) => Err(InitError::Inaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Best-effort path a walk error refers to.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
