//! Per-directory outcomes and run totals

use std::io;

use serde::Serialize;

/// What happened to a single visited directory.
#[derive(Debug)]
pub enum Decision {
    /// Directory name is in the exclusion set
    Skipped,
    /// Marker file was written
    Created,
    /// Marker file was already there and left alone
    AlreadyExists,
    /// Writing the marker file failed
    Failed(io::Error),
    /// The walk could not read this path
    Unreadable(ignore::Error),
}

impl Decision {
    /// Short machine-readable status, used in JSON output.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Skipped => "skipped",
            Decision::Created => "created",
            Decision::AlreadyExists => "exists",
            Decision::Failed(_) => "error",
            Decision::Unreadable(_) => "unreadable",
        }
    }

    /// Error message, if this decision is a failure.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Decision::Failed(e) => Some(e.to_string()),
            Decision::Unreadable(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// Totals accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InitSummary {
    pub created: usize,
    pub already_existed: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl InitSummary {
    pub fn tally(&mut self, decision: &Decision) {
        match decision {
            Decision::Skipped => self.skipped += 1,
            Decision::Created => self.created += 1,
            Decision::AlreadyExists => self.already_existed += 1,
            Decision::Failed(_) | Decision::Unreadable(_) => self.errors += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let mut summary = InitSummary::default();
        summary.tally(&Decision::Created);
        summary.tally(&Decision::Created);
        summary.tally(&Decision::Skipped);
        summary.tally(&Decision::AlreadyExists);
        summary.tally(&Decision::Failed(io::Error::from(io::ErrorKind::PermissionDenied)));

        assert_eq!(
            summary,
            InitSummary {
                created: 2,
                already_existed: 1,
                skipped: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn test_error_message_only_for_failures() {
        assert!(Decision::Created.error_message().is_none());
        let failed = Decision::Failed(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(failed.error_message().as_deref(), Some("disk full"));
        assert_eq!(failed.label(), "error");
    }
}
