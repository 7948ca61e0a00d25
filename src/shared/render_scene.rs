//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichen-Layer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::PulseOptions;
use casteljau_pulse_engine::{PointTrail, ReductionResult};

/// Read-only Daten für einen Render-Frame.
pub struct RenderScene<'a> {
    /// Frisch berechnete Reduktion für das aktuelle `t`
    pub reduction: ReductionResult,
    /// Punkt-Spur der persistenten Punkt-Ebene (None = Ebene wird jeden Frame geleert)
    pub trail: Option<&'a PointTrail>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: &'a PulseOptions,
}

impl RenderScene<'_> {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        !self.reduction.is_empty() || self.trail.is_some_and(|trail| !trail.is_empty())
    }
}
