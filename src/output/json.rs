//! JSON output formatting

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::init::{Decision, ExclusionSet, InitReporter, InitSummary};

/// One visited directory in the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub path: PathBuf,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete JSON report of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JsonReport {
    pub root: PathBuf,
    pub excluded: Vec<String>,
    pub entries: Vec<JsonEntry>,
    pub summary: InitSummary,
}

/// Collects decisions and prints them as one pretty-printed JSON document
/// once the run finishes.
pub struct JsonReporter<W> {
    writer: W,
    report: JsonReport,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: JsonReport::default(),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> InitReporter for JsonReporter<W> {
    fn start(&mut self, root: &Path, exclusions: &ExclusionSet) -> io::Result<()> {
        self.report.root = root.to_path_buf();
        self.report.excluded = exclusions.iter().map(String::from).collect();
        Ok(())
    }

    fn record(&mut self, dir: &Path, decision: &Decision) -> io::Result<()> {
        self.report.entries.push(JsonEntry {
            path: dir.to_path_buf(),
            status: decision.label(),
            error: decision.error_message(),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &InitSummary) -> io::Result<()> {
        self.report.summary = *summary;
        serde_json::to_writer_pretty(&mut self.writer, &self.report).map_err(io::Error::other)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
