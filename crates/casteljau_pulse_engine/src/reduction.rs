//! Iterative Punkt-/Linien-Reduktion (De-Casteljau-Dreieck).
//!
//! Jede Runde verbindet die aktiven Punkte, interpoliert auf jedem Segment bei
//! `t` und übergibt das Ergebnis als aktive Punkte an die nächste Runde.
//! Punkte und Segmente aller Runden werden akkumuliert.

use crate::geometry::{connect, interpolate, Point, Segment};

/// Ergebnis eines Reduktionslaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReductionResult {
    /// Aktive Punkte aller Runden, Runde für Runde hintereinander
    pub all_points: Vec<Point>,
    /// Segmente aller Runden, Runde für Runde hintereinander
    pub all_segments: Vec<Segment>,
    /// Anzahl durchlaufener Runden (= Länge der Eingabe)
    pub rounds: usize,
}

impl ReductionResult {
    /// Gibt `true` zurück, wenn weder Punkte noch Segmente entstanden sind.
    pub fn is_empty(&self) -> bool {
        self.all_points.is_empty() && self.all_segments.is_empty()
    }

    /// Punkt der innersten Ebene (bei n Eingabepunkten der Kurvenpunkt bei `t`).
    pub fn innermost(&self) -> Option<Point> {
        if self.rounds == 0 {
            return None;
        }
        self.all_points.last().copied()
    }
}

/// Reduziert `points` in genau `points.len()` Runden bei Parameter `t`.
///
/// Runden mit 0 oder 1 aktiven Punkt erzeugen keine Segmente, verbrauchen
/// aber trotzdem eine Iteration.
pub fn reduce(points: &[Point], t: f32) -> ReductionResult {
    let rounds = points.len();
    // Dreieckszahlen: n + (n-1) + … + 1 Punkte, (n-1) + … + 0 Segmente
    let point_total = rounds * (rounds + 1) / 2;
    let segment_total = rounds.saturating_sub(1) * rounds / 2;

    let mut result = ReductionResult {
        all_points: Vec::with_capacity(point_total),
        all_segments: Vec::with_capacity(segment_total),
        rounds,
    };

    let mut active = points.to_vec();
    for _ in 0..rounds {
        result.all_points.extend_from_slice(&active);
        let segments = connect(&active);
        active = interpolate(&segments, t);
        result.all_segments.extend(segments);
    }

    result
}
