//! Casteljau-Pulse Engine.
//!
//! Reine Geometrie ohne UI-Abhängigkeit: Segment-Verkettung, lineare
//! Interpolation, die iterative Reduktion sowie Countdown-Uhr und Punkt-Spur.

pub mod clock;
pub mod geometry;
pub mod reduction;
pub mod trail;

pub use clock::{AnimationClock, DEFAULT_CYCLE_TICKS};
pub use geometry::{connect, interpolate, Point, Segment};
pub use reduction::{reduce, ReductionResult};
pub use trail::{PointTrail, DEFAULT_TRAIL_CAPACITY};
