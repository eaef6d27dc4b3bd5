use eframe::egui::{self, Color32, Pos2, Rect, Stroke};

use super::Surface;
use super::color;

/// An egui painter clipped to the canvas rectangle, addressed in canvas-local points.
pub struct Canvas {
    painter: egui::Painter,
    rect: Rect,
    clear_color: Color32,
}

impl Canvas {
    pub fn new(painter: &egui::Painter, rect: Rect, clear_color: Color32) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
            clear_color,
        }
    }

    fn to_screen(&self, p: Pos2) -> Pos2 {
        self.rect.min + p.to_vec2()
    }
}

impl Surface for Canvas {
    type Image = egui::TextureHandle;

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.clear_color);
    }

    /// Draws at the texture's natural size; anything past the canvas edge is clipped.
    fn draw_image(&mut self, image: &Self::Image, origin: Pos2) {
        let rect = Rect::from_min_size(self.to_screen(origin), image.size_vec2());
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        self.painter.image(image.id(), rect, uv, Color32::WHITE);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn stroke_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: &str) {
        let stroke = Stroke::new(width, color::resolve_or_fallback(color));
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }
}
