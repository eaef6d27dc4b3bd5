use super::Edge;
use super::error::ErrorKind;
use crate::grid::GridSpec;

/// Check a candidate edge against the grid.
///
/// Both checks always run, so a line can report a negative coordinate and an
/// out-of-bounds coordinate at once. An empty result means the edge is drawable.
pub fn validate(edge: &Edge, grid: GridSpec) -> Vec<ErrorKind> {
    let coords = [edge.start.x, edge.start.y, edge.end.x, edge.end.y];
    let mut errors = Vec::new();

    if coords.iter().any(|&c| c < 0) {
        errors.push(ErrorKind::NegativeCoordinate);
    }

    // Largest offending coordinate, not the first, so the suggestion fixes the whole line
    let too_large = coords
        .iter()
        .filter(|&&c| c >= 0 && !grid.contains(c))
        .max();
    if let Some(&max) = too_large {
        errors.push(ErrorKind::OutOfBoundsCoordinate {
            required_size: i64::from(max) + 1,
        });
    }

    errors
}
