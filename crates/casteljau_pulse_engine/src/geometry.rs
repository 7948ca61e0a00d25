//! Punkt- und Segment-Primitive sowie die beiden Grundoperationen der Reduktion.
//!
//! Alle Funktionen sind total: es wird nichts validiert, ungültige Zahlen
//! (NaN, ±Inf) werden unverändert durchgereicht.

use glam::Vec2;

/// Punkt im Canvas-Pixelraum.
pub type Point = Vec2;

/// Gerichtete Strecke zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Anfangspunkt
    pub start: Point,
    /// Endpunkt
    pub end: Point,
}

impl Segment {
    /// Erstellt ein Segment von `start` nach `end`.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Punkt bei Parameter `t` auf der Geraden durch das Segment.
    ///
    /// `t` wird nicht geklemmt; außerhalb von [0, 1] wird extrapoliert.
    /// Bei `t = 0` ergibt sich exakt `start`, bei `t = 1` exakt `end`.
    pub fn point_at(&self, t: f32) -> Point {
        self.start * (1.0 - t) + self.end * t
    }

    /// Euklidische Länge des Segments.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Verbindet aufeinanderfolgende Punkte zu Segmenten.
///
/// `[p0, p1, …, pk]` → `[(p0,p1), (p1,p2), …, (pk-1,pk)]`.
/// Weniger als zwei Punkte ergeben eine leere Liste.
pub fn connect(points: &[Point]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

/// Liefert für jedes Segment den Punkt bei Parameter `t`.
pub fn interpolate(segments: &[Segment], t: f32) -> Vec<Point> {
    segments.iter().map(|segment| segment.point_at(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn chain() -> Vec<Point> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(-3.5, 7.25),
        ]
    }

    #[test]
    fn connect_pairs_consecutive_points_in_order() {
        let points = chain();

        let segments = connect(&points);

        assert_eq!(segments.len(), points.len() - 1);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.start, points[i]);
            assert_eq!(segment.end, points[i + 1]);
        }
    }

    #[test]
    fn connect_needs_at_least_two_points() {
        assert!(connect(&[]).is_empty());
        assert!(connect(&[Vec2::new(4.0, 2.0)]).is_empty());
    }

    #[test]
    fn connect_keeps_identical_points_as_zero_length_segment() {
        let p = Vec2::new(3.0, 3.0);

        let segments = connect(&[p, p]);

        assert_eq!(segments, vec![Segment::new(p, p)]);
        assert_eq!(segments[0].length(), 0.0);
    }

    #[test]
    fn interpolate_hits_endpoints_exactly() {
        let segments = connect(&[
            Vec2::new(0.1, 0.7),
            Vec2::new(0.3, -12.9),
            Vec2::new(1e6, 0.2),
        ]);

        let at_start = interpolate(&segments, 0.0);
        let at_end = interpolate(&segments, 1.0);

        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(at_start[i], segment.start);
            assert_eq!(at_end[i], segment.end);
        }
    }

    #[test]
    fn interpolate_halfway_is_midpoint() {
        let segments = connect(&[Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]);

        let mids = interpolate(&segments, 0.5);

        assert_eq!(mids, vec![Vec2::new(5.0, 0.0), Vec2::new(10.0, 5.0)]);
    }

    #[test]
    fn interpolate_extrapolates_outside_unit_range() {
        let segment = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));

        let before = segment.point_at(-0.5);
        let after = segment.point_at(1.5);

        assert_relative_eq!(before.x, -5.0);
        assert_relative_eq!(before.y, -2.0);
        assert_relative_eq!(after.x, 15.0);
        assert_relative_eq!(after.y, 6.0);
    }

    #[test]
    fn interpolate_propagates_nan() {
        let segments = connect(&[Vec2::new(f32::NAN, 0.0), Vec2::new(1.0, 1.0)]);

        let points = interpolate(&segments, 0.5);

        assert_eq!(points.len(), 1);
        assert!(points[0].x.is_nan());
        assert_relative_eq!(points[0].y, 0.5);
    }
}
