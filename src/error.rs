//! Error types for pyinit

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
///
/// Per-directory failures never surface here; they are reported through
/// [`Decision::Failed`](crate::Decision::Failed) and the walk carries on.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}
