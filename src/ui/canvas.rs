//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Zwei Ebenen: die Linien-Ebene wird jeden Frame neu aufgebaut, die
//! Punkt-Ebene zeigt zusätzlich die Spur seit der letzten Änderung der
//! Punktliste (falls aktiviert).

use crate::shared::RenderScene;
use casteljau_pulse_engine::Point;

/// Wandelt eine RGBA-Farbe aus [0, 1] in `Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

/// Canvas-Koordinate → Bildschirmposition.
fn to_screen(origin: egui::Pos2, p: Point) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

/// Zeichnet Hintergrund, Linien-Ebene und Punkt-Ebene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let options = scene.options;
    painter.rect_filled(rect, 0.0, color32(options.background_color));
    if !scene.has_content() {
        return;
    }

    let origin = rect.min;

    // Linien-Ebene
    let line_stroke = egui::Stroke::new(options.line_width, color32(options.line_color));
    for segment in &scene.reduction.all_segments {
        painter.line_segment(
            [to_screen(origin, segment.start), to_screen(origin, segment.end)],
            line_stroke,
        );
    }

    // Punkt-Ebene
    let point_stroke = egui::Stroke::new(1.0, color32(options.point_color));
    if let Some(trail) = scene.trail {
        for &p in trail.iter() {
            painter.circle_stroke(to_screen(origin, p), options.point_radius, point_stroke);
        }
    }
    for &p in &scene.reduction.all_points {
        painter.circle_stroke(to_screen(origin, p), options.point_radius, point_stroke);
    }
}
