//! Use-Case: Punkte per Klick anhängen.

use crate::app::AppState;
use casteljau_pulse_engine::Point;

/// Hängt einen Punkt an die Punktliste an und leert die Punkt-Spur.
pub fn add_point(state: &mut AppState, pos: Point) {
    state.points.push(pos);
    state.trail.clear();
    log::debug!(
        "Punkt {} hinzugefügt bei ({:.1}, {:.1})",
        state.points.len(),
        pos.x,
        pos.y
    );
}
