use eframe::egui::Color32;

/// Stroke color used when a token names no known color, like a canvas that keeps
/// its default black stroke after an invalid assignment.
pub const FALLBACK: Color32 = Color32::BLACK;

/// Resolve a user color token the way a CSS stroke style would: any CSS color name
/// (case-insensitive), hex forms, and the `rgb()` / `hsl()` functional notations.
pub fn resolve(token: &str) -> Option<Color32> {
    let [r, g, b, a] = csscolorparser::parse(token).ok()?.to_rgba8();
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

pub fn resolve_or_fallback(token: &str) -> Color32 {
    resolve(token).unwrap_or_else(|| {
        tracing::trace!(token, "unknown color, using fallback");
        FALLBACK
    })
}
