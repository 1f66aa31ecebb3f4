//! Output configuration types

/// Configuration for console reporting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Only print errors and the final summary
    pub quiet: bool,
}
