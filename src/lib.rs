//! pyinit - seed `__init__.py` files across a directory tree

pub mod error;
pub mod init;
pub mod logging;
pub mod output;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::InitError;
pub use init::{
    Decision, ExclusionSet, InitConfig, InitReporter, InitSummary, MarkerFs, NullReporter, StdFs,
    TreeInitializer,
};
pub use output::{ConsoleReporter, JsonReporter, OutputConfig};
