//! Zentrale Konfiguration für Casteljau-Pulse.
//!
//! `PulseOptions` enthält alle über die TOML-Datei änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use casteljau_pulse_engine::{DEFAULT_CYCLE_TICKS, DEFAULT_TRAIL_CAPACITY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Animation ───────────────────────────────────────────────────────

/// Tick-Periode in Millisekunden.
pub const TICK_PERIOD_MS: u64 = 10;
/// Ticks pro Animationszyklus (`t` läuft einmal von 1.0 gegen 0.0).
pub const CYCLE_TICKS: u32 = DEFAULT_CYCLE_TICKS;
/// Maximal nachgeholte Ticks pro Frame (z.B. nach einem hängenden Frame).
pub const MAX_CATCH_UP_TICKS: u32 = 10;

// ── Punkt-Ebene ─────────────────────────────────────────────────────

/// Punkt-Ebene nur bei Änderung der Punktliste leeren (Spur sichtbar).
pub const PERSISTENT_POINT_LAYER: bool = true;
/// Maximale Anzahl Spur-Punkte.
pub const TRAIL_CAPACITY: usize = DEFAULT_TRAIL_CAPACITY;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienstärke der Segmente in Pixeln.
pub const LINE_WIDTH: f32 = 1.0;
/// Radius der Punkt-Marker in Pixeln.
pub const POINT_RADIUS: f32 = 1.5;
/// Linienfarbe (RGBA: Schwarz).
pub const LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Punkt-Marker (RGBA: Grün).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Alle über die Optionen-Datei änderbaren Werte.
/// Wird als `casteljau_pulse.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PulseOptions {
    // ── Animation ───────────────────────────────────────────────
    /// Tick-Periode in Millisekunden
    pub tick_period_ms: u64,
    /// Ticks pro Animationszyklus
    pub cycle_ticks: u32,
    /// Obergrenze nachgeholter Ticks pro Frame
    pub max_catch_up_ticks: u32,

    // ── Punkt-Ebene ─────────────────────────────────────────────
    /// Punkt-Ebene als Spur stehen lassen statt jeden Frame zu leeren
    pub persistent_point_layer: bool,
    /// Maximale Anzahl Spur-Punkte
    pub trail_capacity: usize,

    // ── Darstellung ─────────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_width: f32,
    /// Radius der Punkt-Marker in Pixeln
    pub point_radius: f32,
    /// Linienfarbe (RGBA)
    pub line_color: [f32; 4],
    /// Punktfarbe (RGBA)
    pub point_color: [f32; 4],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
}

impl Default for PulseOptions {
    fn default() -> Self {
        Self {
            tick_period_ms: TICK_PERIOD_MS,
            cycle_ticks: CYCLE_TICKS,
            max_catch_up_ticks: MAX_CATCH_UP_TICKS,

            persistent_point_layer: PERSISTENT_POINT_LAYER,
            trail_capacity: TRAIL_CAPACITY,

            line_width: LINE_WIDTH,
            point_radius: POINT_RADIUS,
            line_color: LINE_COLOR,
            point_color: POINT_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl PulseOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau_pulse"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("casteljau_pulse.toml")
    }

    /// Tick-Periode als `Duration` (mindestens 1 ms).
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(1))
    }
}
