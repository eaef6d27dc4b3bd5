mod determinism;
mod invalid;
mod simple;

use super::{Edge, ErrorKind, ParseResult, Point, parse};
use crate::grid::GridSpec;

/// Helper to create a GridSpec.
fn grid(size: u32) -> GridSpec {
    GridSpec::new(size).unwrap()
}

/// Helper to create an Edge.
fn edge(start: (i32, i32), end: (i32, i32), color: &str) -> Edge {
    Edge {
        start: Point {
            x: start.0,
            y: start.1,
        },
        end: Point { x: end.0, y: end.1 },
        color: color.to_string(),
    }
}

/// Collect `(line, kind)` pairs from a result.
fn errors_of(result: &ParseResult) -> Vec<(usize, ErrorKind)> {
    result
        .errors
        .iter()
        .map(|e| (e.line, e.kind.clone()))
        .collect()
}

/// Assert that a result has no errors.
fn assert_clean(result: &ParseResult) {
    if let Some(report) = result.report() {
        panic!("Expected no errors, got:\n{report}");
    }
}
