//! Handler für den Animations-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;
use std::time::Duration;

/// Startet den Animations-Timer.
pub fn start(state: &mut AppState) {
    use_cases::animation::start(state);
}

/// Stoppt den Animations-Timer.
pub fn stop(state: &mut AppState) {
    use_cases::animation::stop(state);
}

/// Schaltet die Animation um die vergangene Frame-Zeit weiter.
pub fn advance(state: &mut AppState, elapsed: Duration) {
    let ticks = use_cases::animation::advance(state, elapsed);
    if ticks > 0 {
        log::trace!(
            "{} Tick(s), time_left = {}",
            ticks,
            state.animation.clock.time_left()
        );
    }
}
