//! Countdown-Uhr für den Animationsparameter `t`.

/// Standard-Zykluslänge in Ticks.
pub const DEFAULT_CYCLE_TICKS: u32 = 600;

/// Zählt pro Tick von `initial` herunter und springt nach 1 wieder auf `initial`.
///
/// Ein Zyklus umfasst damit genau `initial` Ticks; `t()` läuft von 1.0
/// bis `1 / initial` und springt dann zurück auf 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationClock {
    initial: u32,
    time_left: u32,
}

impl AnimationClock {
    /// Erstellt eine Uhr im Reset-Zustand. `initial = 0` wird auf 1 angehoben.
    pub fn new(initial: u32) -> Self {
        let initial = initial.max(1);
        Self {
            initial,
            time_left: initial,
        }
    }

    /// Ein Tick weiter.
    pub fn tick(&mut self) {
        self.time_left = if self.time_left <= 1 {
            self.initial
        } else {
            self.time_left - 1
        };
    }

    /// Setzt den Countdown auf `initial` zurück.
    pub fn reset(&mut self) {
        self.time_left = self.initial;
    }

    /// Verbleibende Ticks im aktuellen Zyklus.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Zykluslänge in Ticks.
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Animationsparameter `time_left / initial` in (0, 1].
    pub fn t(&self) -> f32 {
        self.time_left as f32 / self.initial as f32
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_TICKS)
    }
}
