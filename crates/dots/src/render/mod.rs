pub mod background;
pub mod canvas;
pub mod color;
pub mod transform;

use eframe::egui::{Color32, Pos2};

use crate::grid::GridSpec;
use crate::parser::Edge;

use background::Background;
use transform::Transform;

/// Width of every edge stroke.
pub const EDGE_WIDTH: f32 = 2.5;

/// The drawing primitives the renderer needs. Positions are canvas-local.
pub trait Surface {
    type Image;

    fn clear(&mut self);
    fn draw_image(&mut self, image: &Self::Image, origin: Pos2);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    /// `color` is the edge's literal token; the surface decides how to interpret it.
    fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: &str);
}

/// Everything one redraw depends on.
pub struct Scene<'a, I> {
    pub grid: GridSpec,
    pub background: &'a Background<I>,
    pub edges: &'a [Edge],
    pub dot_color: Color32,
}

/// Redraw the whole canvas: clear, backdrop if loaded, every lattice dot, every edge.
///
/// Pure with respect to the scene; calling it twice paints the same picture.
pub fn draw<S: Surface>(surface: &mut S, scene: &Scene<'_, S::Image>) {
    let transform = Transform::new(scene.grid);

    surface.clear();

    if let Some(image) = scene.background.ready() {
        surface.draw_image(image, Pos2::ZERO);
    }

    let radius = transform.dot_radius();
    for (x, y) in scene.grid.points() {
        surface.fill_circle(transform.lattice(x, y), radius, scene.dot_color);
    }

    for edge in scene.edges {
        surface.stroke_segment(
            transform.point(edge.start),
            transform.point(edge.end),
            EDGE_WIDTH,
            &edge.color,
        );
    }
}
