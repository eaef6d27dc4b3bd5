//! Per-line validation errors.
//!
//! Every problem found in an edge list is carried as a value, never as a panic or an
//! early return. The `Display` text of each kind is the message shown to the user.

use serde::Serialize;

/// What went wrong on a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    /// Fewer than three space-separated fields.
    #[error("You're either missing a portion of the line or missing a space.")]
    MalformedLine,

    /// More than three space-separated fields.
    #[error("There are extra portions or an extra space somewhere on this line.")]
    ExtraField,

    /// A coordinate component is not an integer (or a point is not `x,y`).
    #[error("Coordinate(s) contain non-integer value(s).")]
    NonNumericCoordinate,

    #[error("Coordinate(s) contain negative value(s).")]
    NegativeCoordinate,

    /// At least one coordinate does not fit the grid. `required_size` is the smallest
    /// grid size that admits every coordinate on the line.
    #[error("Cannot draw edges, grid must be at least size {required_size}.")]
    OutOfBoundsCoordinate { required_size: i64 },
}

/// A validation error tagged with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("Line {line}: {kind}")]
pub struct ValidationError {
    pub line: usize,
    #[serde(flatten)]
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line_number() {
        let err = ValidationError::new(3, ErrorKind::ExtraField);
        assert_eq!(
            err.to_string(),
            "Line 3: There are extra portions or an extra space somewhere on this line."
        );
    }

    #[test]
    fn test_out_of_bounds_message_names_required_size() {
        let err = ValidationError::new(
            2,
            ErrorKind::OutOfBoundsCoordinate { required_size: 10 },
        );
        assert_eq!(
            err.to_string(),
            "Line 2: Cannot draw edges, grid must be at least size 10."
        );
    }

    #[test]
    fn test_serializes_flat() {
        let err = ValidationError::new(
            1,
            ErrorKind::OutOfBoundsCoordinate { required_size: 7 },
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["line"], 1);
        assert_eq!(json["kind"], "out_of_bounds_coordinate");
        assert_eq!(json["required_size"], 7);
    }
}
