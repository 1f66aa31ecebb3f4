//! Console reporter
//!
//! Prints one line per decision as the walk progresses. Errors go to
//! stderr, everything else to stdout.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::init::{Decision, ExclusionSet, InitReporter, InitSummary, marker_path};

use super::config::OutputConfig;

pub struct ConsoleReporter<W = StandardStream> {
    quiet: bool,
    out: W,
    err: W,
}

impl ConsoleReporter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            quiet: config.quiet,
            out: StandardStream::stdout(choice),
            err: StandardStream::stderr(choice),
        }
    }
}

impl<W: WriteColor> ConsoleReporter<W> {
    /// Report to arbitrary writers instead of the standard streams.
    pub fn with_writers(out: W, err: W, quiet: bool) -> Self {
        Self { quiet, out, err }
    }

    pub fn into_writers(self) -> (W, W) {
        (self.out, self.err)
    }

    fn write_line(&mut self, color: Color, label: &str, path: &Path) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, " {}", path.display())
    }

    fn write_error(&mut self, action: &str, path: &Path, message: &str) -> io::Result<()> {
        self.err
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.err, "Error {} {}:", action, path.display())?;
        self.err.reset()?;
        writeln!(self.err, " {}", message)
    }
}

impl<W: WriteColor> InitReporter for ConsoleReporter<W> {
    fn start(&mut self, root: &Path, exclusions: &ExclusionSet) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Starting from root directory: {}", root.display())?;
        let names: Vec<&str> = exclusions.iter().collect();
        writeln!(self.out, "Excluding directories: {}", names.join(", "))
    }

    fn record(&mut self, dir: &Path, decision: &Decision) -> io::Result<()> {
        match decision {
            Decision::Failed(e) => self.write_error("creating", &marker_path(dir), &e.to_string()),
            Decision::Unreadable(e) => self.write_error("reading", dir, &e.to_string()),
            _ if self.quiet => Ok(()),
            Decision::Skipped => self.write_line(Color::Yellow, "Skipping excluded directory:", dir),
            Decision::Created => self.write_line(Color::Green, "Created:", &marker_path(dir)),
            Decision::AlreadyExists => {
                self.write_line(Color::Blue, "Already exists:", &marker_path(dir))
            }
        }
    }

    fn finish(&mut self, summary: &InitSummary) -> io::Result<()> {
        if !self.quiet {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "{} created, {} already existed, {} skipped, {} errors",
            summary.created, summary.already_existed, summary.skipped, summary.errors
        )?;
        self.out.flush()
    }
}
