use eframe::egui::{self, Color32};

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub canvas_background: Color32,
    pub dot_color: Color32,
    pub error_color: Color32,
    pub title_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x1E, 0x1E, 0x1E),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xC8),
            canvas_background: Color32::from_rgb(0x2D, 0x2D, 0x2D),
            dot_color: Color32::WHITE,
            error_color: Color32::from_rgb(0xFF, 0x7E, 0x67),
            title_size: 28.0,
            body_size: 15.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::WHITE,
            foreground: Color32::from_rgb(0x1A, 0x1A, 0x2E),
            canvas_background: Color32::from_rgb(0xF5, 0xF5, 0xF5),
            dot_color: Color32::from_rgb(0x33, 0x33, 0x33),
            error_color: Color32::from_rgb(0xC7, 0x3E, 0x1D),
            title_size: 28.0,
            body_size: 15.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = if self.name == "dark" {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.foreground);
        visuals
    }
}
