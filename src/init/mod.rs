//! Tree initialization
//!
//! Walks a directory tree and seeds a marker file (`__init__.py`) in every
//! directory whose name is not excluded. Existing marker files are never
//! modified, and a failure in one directory never stops the walk.

mod config;
mod decision;
mod exclusion;
mod marker;
mod reporter;
mod walker;

// Re-export public types
pub use config::InitConfig;
pub use decision::{Decision, InitSummary};
pub use exclusion::{BUILTIN_EXCLUDE, ExclusionSet};
pub use marker::{MARKER_CONTENT, MARKER_FILE_NAME, MarkerFs, StdFs, ensure_marker, marker_path};
pub use reporter::{InitReporter, NullReporter};
pub use walker::{TreeInitializer, validate_root};
