use std::fmt;

use super::error::ValidationError;

/// Fixed header of every report, describing the expected line grammar.
pub const PREAMBLE: &str = "There was an error with some of your line input.\n\
    For reference, the correct form for each line should be: x1,y1 x2,y2 color";

/// All validation errors of one parse pass, merged into a single message.
///
/// The report only formats; showing it (a modal in the window, stderr on the command
/// line) is the caller's job, and happens once per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    errors: Vec<ValidationError>,
}

impl Report {
    /// Build a report, or `None` when there is nothing to report.
    ///
    /// Errors are ordered by line; errors on the same line keep their relative order.
    pub fn from_errors(errors: &[ValidationError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let mut errors = errors.to_vec();
        errors.sort_by_key(|e| e.line);
        Some(Self { errors })
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Per-error entries, e.g. `Line 2: Coordinate(s) contain negative value(s).`
    pub fn entries(&self) -> impl Iterator<Item = String> + '_ {
        self.errors.iter().map(ToString::to_string)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PREAMBLE}")?;
        for entry in self.entries() {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}
