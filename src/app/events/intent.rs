use crate::shared::SurfaceSize;
use std::time::Duration;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärklick auf die Zeichenfläche (Canvas-Koordinaten)
    CanvasClicked { pos: glam::Vec2 },
    /// Seit dem letzten Frame vergangene Zeit
    FrameElapsed { elapsed: Duration },
    /// Zeichenfläche hat (möglicherweise) eine neue Größe
    SurfaceResized { size: SurfaceSize },
    /// View wurde aufgebaut: Animation starten
    ViewMounted,
    /// View wird abgebaut: Animation stoppen
    ViewTornDown,
}
