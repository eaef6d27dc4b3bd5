use eframe::egui::Pos2;

use crate::grid::GridSpec;
use crate::parser::Point;

/// Side length of the square drawing surface, in points.
pub const CANVAS_EXTENT: f32 = 500.0;

/// Largest dot radius; smaller grids all use it.
pub const MAX_DOT_RADIUS: f32 = 4.0;

/// Maps lattice coordinates to canvas positions for one grid size.
///
/// Coordinate 0 sits one spacing in from the edge, so every grid size gets the same
/// margin on all four sides. Dots and segment endpoints both go through
/// [`Transform::position`], so an edge always ends exactly on its dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scalar: f32,
    radius: f32,
}

impl Transform {
    pub fn new(grid: GridSpec) -> Self {
        Self::with_extent(grid, CANVAS_EXTENT)
    }

    pub fn with_extent(grid: GridSpec, extent: f32) -> Self {
        let size = grid.size() as f32;
        Self {
            scalar: extent / (size + 1.0),
            radius: MAX_DOT_RADIUS.min(100.0 / size),
        }
    }

    /// Canvas offset of a single lattice coordinate.
    pub fn position(&self, c: i32) -> f32 {
        (c as f32 + 1.0) * self.scalar
    }

    pub fn point(&self, p: Point) -> Pos2 {
        self.lattice(p.x, p.y)
    }

    pub fn lattice(&self, x: i32, y: i32) -> Pos2 {
        Pos2::new(self.position(x), self.position(y))
    }

    /// Shrinks as `100 / size` once the grid passes 25 so neighbouring dots never touch.
    pub fn dot_radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(size: u32) -> Transform {
        Transform::new(GridSpec::new(size).unwrap())
    }

    fn spacing(t: &Transform) -> f32 {
        t.position(1) - t.position(0)
    }

    #[test]
    fn test_uniform_margin() {
        let t = transform(4);
        assert_eq!(spacing(&t), 100.0);
        assert_eq!(t.position(0), 100.0);
        assert_eq!(t.position(3), 400.0);
        // Margin after the last dot equals the margin before the first
        assert_eq!(CANVAS_EXTENT - t.position(3), t.position(0));
    }

    #[test]
    fn test_single_dot_is_centered() {
        let t = transform(1);
        assert_eq!(t.lattice(0, 0), Pos2::new(250.0, 250.0));
    }

    #[test]
    fn test_radius_caps_at_four() {
        assert_eq!(transform(1).dot_radius(), 4.0);
        assert_eq!(transform(25).dot_radius(), 4.0);
    }

    #[test]
    fn test_radius_shrinks_for_large_grids() {
        assert_eq!(transform(50).dot_radius(), 2.0);
        assert_eq!(transform(100).dot_radius(), 1.0);
    }

    #[test]
    fn test_dots_never_overlap() {
        for size in 1..=100 {
            let t = transform(size);
            assert!(
                t.dot_radius() * 2.0 < spacing(&t),
                "dots overlap at size {size}"
            );
        }
    }

    #[test]
    fn test_point_matches_lattice() {
        let t = transform(7);
        let p = Point { x: 3, y: 5 };
        assert_eq!(t.point(p), t.lattice(3, 5));
        assert_eq!(t.point(p).x, t.position(3));
    }

    #[test]
    fn test_custom_extent() {
        let t = Transform::with_extent(GridSpec::new(9).unwrap(), 1000.0);
        assert_eq!(spacing(&t), 100.0);
        assert_eq!(t.position(9 - 1), 900.0);
    }
}
