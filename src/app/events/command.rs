use crate::shared::SurfaceSize;
use std::time::Duration;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt an Canvas-Position an die Punktliste anhängen
    AddPoint { pos: glam::Vec2 },
    /// Tick-Scheduler um die vergangene Zeit weiterschalten
    AdvanceAnimation { elapsed: Duration },
    /// Animations-Timer starten
    StartAnimation,
    /// Animations-Timer stoppen
    StopAnimation,
    /// Neue Größe der Zeichenfläche übernehmen
    SetSurfaceSize { size: SurfaceSize },
}
