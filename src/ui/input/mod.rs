//! Viewport-Input-Handling: Klick und Flächengröße → AppIntent.
//!
//! - `clicks` — Primärklick hängt einen Punkt an

mod clicks;

use crate::app::AppIntent;
use crate::shared::SurfaceSize;

/// Bündelt die Parameter für die Event-Verarbeitung der Zeichenfläche.
pub(crate) struct CanvasContext<'a> {
    pub response: &'a egui::Response,
    pub rect: egui::Rect,
}

/// Sammelt Intents der Zeichenfläche für einen Frame.
///
/// Die Flächengröße wird jeden Frame gemeldet; das Intent-Mapping filtert
/// unveränderte Größen heraus.
pub fn collect_canvas_intents(response: &egui::Response, rect: egui::Rect) -> Vec<AppIntent> {
    let ctx = CanvasContext { response, rect };
    let mut events = vec![AppIntent::SurfaceResized {
        size: SurfaceSize::new(rect.width(), rect.height()),
    }];

    clicks::handle_clicks(&ctx, &mut events);

    events
}

/// Bildschirmposition → Canvas-Koordinate (Ursprung oben links in der Fläche).
pub(crate) fn screen_pos_to_canvas(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    glam::Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

#[cfg(test)]
mod tests {
    use super::screen_pos_to_canvas;

    #[test]
    fn canvas_origin_is_rect_min() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 24.0), egui::vec2(800.0, 600.0));

        let p = screen_pos_to_canvas(egui::pos2(100.0, 124.0), rect);

        assert_eq!(p, glam::Vec2::new(100.0, 100.0));
    }
}
