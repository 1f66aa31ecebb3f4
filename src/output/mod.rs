//! Reporters for initialization runs
//!
//! - `ConsoleReporter`: colored line-per-decision output
//! - `JsonReporter`: a single JSON document printed at the end

mod config;
mod console;
mod json;

pub use config::OutputConfig;
pub use console::ConsoleReporter;
pub use json::{JsonEntry, JsonReport, JsonReporter};
