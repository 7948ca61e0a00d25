use super::{AnimationState, ViewState};
use crate::app::CommandLog;
use crate::shared::PulseOptions;
use casteljau_pulse_engine::{Point, PointTrail};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Angeklickte Punkte in Klick-Reihenfolge (nur Anhängen)
    pub points: Vec<Point>,
    /// View-State
    pub view: ViewState,
    /// Animations-State
    pub animation: AnimationState,
    /// Spur der persistenten Punkt-Ebene
    pub trail: PointTrail,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Timing, Farben, Größen)
    pub options: PulseOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(PulseOptions::default())
    }

    /// Erstellt einen neuen, leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: PulseOptions) -> Self {
        Self {
            points: Vec::new(),
            view: ViewState::new(),
            animation: AnimationState::from_options(&options),
            trail: PointTrail::new(options.trail_capacity),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der angeklickten Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
