pub mod error;
pub mod record;
pub mod report;
pub mod splitter;
pub mod validate;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::grid::GridSpec;

pub use error::{ErrorKind, ValidationError};
pub use report::Report;

/// A lattice point. Bounds are only meaningful relative to a [`GridSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A colored segment between two lattice points.
///
/// `color` is whatever token the user wrote; it is handed to the drawing surface as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    pub color: String,
}

/// Everything one parse pass produced: the drawable edges and every error, both in
/// source line order.
///
/// A value derived only from the input text and the grid size. It is replaced on
/// each Draw, never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub edges: Vec<Edge>,
    pub errors: Vec<ValidationError>,
}

impl ParseResult {
    pub fn report(&self) -> Option<Report> {
        Report::from_errors(&self.errors)
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse and validate an edge list against a grid.
///
/// Each line stands alone: a bad line contributes its errors and withholds only its
/// own edge. Line numbers are 1-based source lines, counting blank and failed lines.
pub fn parse(text: &str, grid: GridSpec) -> ParseResult {
    let mut result = ParseResult::default();

    for (index, fields) in splitter::split(text).iter().enumerate() {
        let line = index + 1;
        match record::parse_record(fields) {
            Ok(edge) => {
                let problems = validate::validate(&edge, grid);
                if problems.is_empty() {
                    tracing::trace!(line, ?edge, "accepted edge");
                    result.edges.push(edge);
                } else {
                    result
                        .errors
                        .extend(problems.into_iter().map(|kind| ValidationError::new(line, kind)));
                }
            }
            Err(kind) => result.errors.push(ValidationError::new(line, kind)),
        }
    }

    tracing::debug!(
        grid = grid.size(),
        edges = result.edges.len(),
        errors = result.errors.len(),
        "parsed edge list"
    );
    result
}
