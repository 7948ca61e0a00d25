//! Casteljau-Pulse Library.
//! App-, Shared- und UI-Layer als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, TickScheduler, ViewState};
pub use casteljau_pulse_engine::{
    connect, interpolate, reduce, AnimationClock, Point, PointTrail, ReductionResult, Segment,
};
pub use shared::{PulseOptions, RenderScene, SurfaceSize};
