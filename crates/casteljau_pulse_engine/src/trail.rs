//! Begrenzter Puffer für die Punkt-Spur der persistenten Punkt-Ebene.

use crate::geometry::Point;
use std::collections::VecDeque;

/// Standard-Kapazität der Spur in Punkten.
pub const DEFAULT_TRAIL_CAPACITY: usize = 50_000;

/// Ringpuffer aller seit dem letzten Leeren markierten Punkte.
///
/// Bei voller Kapazität werden die ältesten Punkte verworfen. Zusätzlich
/// zählt die Spur die aufgenommenen Batches (ein Batch pro Tick), damit ein
/// Animationszyklus nur einmal aufgezeichnet wird.
#[derive(Debug, Clone)]
pub struct PointTrail {
    points: VecDeque<Point>,
    capacity: usize,
    batches: usize,
}

impl PointTrail {
    /// Erstellt eine leere Spur mit gegebener Kapazität.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity.min(DEFAULT_TRAIL_CAPACITY)),
            capacity,
            batches: 0,
        }
    }

    /// Hängt Punkte an, verdrängt bei Bedarf die ältesten.
    pub fn record(&mut self, points: &[Point]) {
        self.batches += 1;
        if self.capacity == 0 {
            return;
        }
        // Mehr neue Punkte als Kapazität: nur der jüngste Teil zählt
        let fresh = &points[points.len().saturating_sub(self.capacity)..];
        let overflow = (self.points.len() + fresh.len()).saturating_sub(self.capacity);
        self.points.drain(..overflow);
        self.points.extend(fresh.iter().copied());
    }

    /// Verwirft alle Punkte.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            log::debug!("Punkt-Spur geleert ({} Punkte)", self.points.len());
        }
        self.points.clear();
        self.batches = 0;
    }

    /// Anzahl der seit dem letzten Leeren aufgenommenen Batches.
    pub fn batches(&self) -> usize {
        self.batches
    }

    /// Anzahl gespeicherter Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Spur leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximale Anzahl gespeicherter Punkte.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Punkte vom ältesten zum jüngsten.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl Default for PointTrail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn points(range: std::ops::Range<u32>) -> Vec<Point> {
        range.map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn record_appends_in_order() {
        let mut trail = PointTrail::new(10);

        trail.record(&points(0..3));
        trail.record(&points(3..5));

        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut trail = PointTrail::new(4);

        trail.record(&points(0..3));
        trail.record(&points(3..6));

        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn batch_larger_than_capacity_keeps_newest() {
        let mut trail = PointTrail::new(3);
        trail.record(&points(0..2));

        trail.record(&points(10..20));

        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![17.0, 18.0, 19.0]);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut trail = PointTrail::new(0);

        trail.record(&points(0..5));

        assert!(trail.is_empty());
    }

    #[test]
    fn batches_count_every_record() {
        let mut trail = PointTrail::new(0);

        trail.record(&points(0..2));
        trail.record(&[]);

        assert_eq!(trail.batches(), 2);
    }

    #[test]
    fn clear_empties_and_resets_batches() {
        let mut trail = PointTrail::default();
        trail.record(&points(0..8));

        trail.clear();

        assert!(trail.is_empty());
        assert_eq!(trail.batches(), 0);
        assert_eq!(trail.capacity(), DEFAULT_TRAIL_CAPACITY);
    }
}
