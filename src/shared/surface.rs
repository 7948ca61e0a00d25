//! Größe der Zeichenfläche als expliziter Konfigurationswert.

/// Breite und Höhe der Zeichenfläche in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl SurfaceSize {
    /// Erstellt eine Flächengröße.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Gibt `true` zurück, wenn auf der Fläche nichts gezeichnet werden kann.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}
