//! Handler für die Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::SurfaceSize;

/// Aktualisiert die Flächengröße im State.
pub fn set_surface_size(state: &mut AppState, size: SurfaceSize) {
    use_cases::viewport::resize(state, size);
}
