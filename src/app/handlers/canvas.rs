//! Handler für Eingaben auf der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt einen angeklickten Punkt an.
pub fn add_point(state: &mut AppState, pos: glam::Vec2) {
    use_cases::points::add_point(state, pos);
}
