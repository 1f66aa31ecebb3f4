//! Reporting seam between the initializer and its output

use std::io;
use std::path::Path;

use super::decision::{Decision, InitSummary};
use super::exclusion::ExclusionSet;

/// Receives every decision made during a run, in walk order.
/// Implemented by the console and JSON formatters in [`crate::output`].
pub trait InitReporter {
    /// Called once after pre-flight validation succeeds, before any mutation.
    fn start(&mut self, root: &Path, exclusions: &ExclusionSet) -> io::Result<()>;

    /// Called once per visited directory, and once per walk error.
    fn record(&mut self, dir: &Path, decision: &Decision) -> io::Result<()>;

    fn finish(&mut self, summary: &InitSummary) -> io::Result<()>;
}

/// Reporter that discards everything.
#[derive(Debug, Default)]
pub struct NullReporter;

impl InitReporter for NullReporter {
    fn start(&mut self, _root: &Path, _exclusions: &ExclusionSet) -> io::Result<()> {
        Ok(())
    }

    fn record(&mut self, _dir: &Path, _decision: &Decision) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, _summary: &InitSummary) -> io::Result<()> {
        Ok(())
    }
}
