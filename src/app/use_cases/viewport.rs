//! Use-Case-Funktionen für die Zeichenfläche.

use crate::app::AppState;
use crate::shared::SurfaceSize;

/// Übernimmt eine neue Flächengröße.
///
/// Eine Größenänderung leert die persistente Punkt-Ebene.
pub fn resize(state: &mut AppState, size: SurfaceSize) {
    if state.view.surface == Some(size) {
        return;
    }
    log::debug!("Zeichenfläche: {:.0}x{:.0}", size.width, size.height);
    state.view.surface = Some(size);
    state.trail.clear();
}
