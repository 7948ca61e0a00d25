//! Klick-Events: Primärklick auf der Zeichenfläche.

use super::{screen_pos_to_canvas, CanvasContext};
use crate::app::AppIntent;

/// Wandelt einen Primärklick in einen `CanvasClicked`-Intent.
///
/// Andere Tasten, Drags und Mehrfingergesten werden ignoriert.
pub(crate) fn handle_clicks(ctx: &CanvasContext, events: &mut Vec<AppIntent>) {
    if !ctx.response.clicked_by(egui::PointerButton::Primary) {
        return;
    }
    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
        events.push(AppIntent::CanvasClicked {
            pos: screen_pos_to_canvas(pointer_pos, ctx.rect),
        });
    }
}
