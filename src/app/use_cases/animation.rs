//! Use-Case-Funktionen für die Puls-Animation.

use crate::app::AppState;
use casteljau_pulse_engine::reduce;
use std::time::Duration;

/// Startet den Animations-Timer (View aufgebaut).
pub fn start(state: &mut AppState) {
    state.animation.scheduler.start();
}

/// Stoppt den Animations-Timer (View abgebaut).
pub fn stop(state: &mut AppState) {
    state.animation.scheduler.stop();
}

/// Schaltet die Animation um die vergangene Zeit weiter.
///
/// Jeder fällige Tick zählt die Uhr herunter; bei persistenter Punkt-Ebene
/// werden die interpolierten Punkte des Ticks in die Spur übernommen, bis ein
/// voller Zyklus aufgezeichnet ist. Danach wiederholen sich die Positionen.
/// Gibt die Anzahl ausgeführter Ticks zurück.
pub fn advance(state: &mut AppState, elapsed: Duration) -> u32 {
    let ticks = state.animation.scheduler.advance(elapsed);

    for _ in 0..ticks {
        state.animation.clock.tick();
        if !state.options.persistent_point_layer || state.points.len() < 2 {
            continue;
        }
        if state.trail.batches() >= state.animation.clock.initial() as usize {
            continue;
        }
        let reduction = reduce(&state.points, state.animation.t());
        // Die Eingabepunkte stehen still und werden ohnehin jeden Frame gezeichnet.
        let interpolated = &reduction.all_points[state.points.len()..];
        state.trail.record(interpolated);
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::PulseOptions;
    use glam::Vec2;

    fn running_state(options: PulseOptions) -> AppState {
        let mut state = AppState::with_options(options);
        start(&mut state);
        state
    }

    #[test]
    fn advance_without_start_keeps_clock() {
        let mut state = AppState::new();

        let ticks = advance(&mut state, Duration::from_millis(100));

        assert_eq!(ticks, 0);
        assert_eq!(state.animation.clock.time_left(), state.options.cycle_ticks);
    }

    #[test]
    fn advance_counts_clock_down() {
        let mut state = running_state(PulseOptions::default());

        let ticks = advance(&mut state, Duration::from_millis(30));

        assert_eq!(ticks, 3);
        assert_eq!(state.animation.clock.time_left(), state.options.cycle_ticks - 3);
    }

    #[test]
    fn ticks_record_interpolated_points_into_trail() {
        let mut state = running_state(PulseOptions::default());
        state.points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];

        advance(&mut state, Duration::from_millis(20));

        // Pro Tick 2 + 1 interpolierte Punkte
        assert_eq!(state.trail.len(), 6);
    }

    #[test]
    fn trail_stops_growing_after_one_cycle() {
        let mut state = running_state(PulseOptions::default());
        state.points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let cycle = state.options.cycle_ticks as usize;
        let per_tick = 2 + 1;

        // Drei Zyklen in 10-ms-Ticks
        for _ in 0..3 * cycle {
            advance(&mut state, Duration::from_millis(10));
        }

        assert_eq!(state.trail.len(), cycle * per_tick);
        assert_eq!(state.trail.batches(), cycle);
    }

    #[test]
    fn cleared_trail_records_a_fresh_cycle() {
        let mut state = running_state(PulseOptions {
            cycle_ticks: 4,
            ..PulseOptions::default()
        });
        state.points = vec![Vec2::ZERO, Vec2::new(8.0, 0.0)];
        for _ in 0..10 {
            advance(&mut state, Duration::from_millis(10));
        }
        assert_eq!(state.trail.len(), 4);

        state.trail.clear();
        for _ in 0..3 {
            advance(&mut state, Duration::from_millis(10));
        }

        assert_eq!(state.trail.len(), 3);
    }

    #[test]
    fn single_layer_mode_records_nothing() {
        let mut state = running_state(PulseOptions {
            persistent_point_layer: false,
            ..PulseOptions::default()
        });
        state.points = vec![Vec2::ZERO, Vec2::ONE];

        advance(&mut state, Duration::from_millis(50));

        assert!(state.trail.is_empty());
    }

    #[test]
    fn stop_halts_ticks() {
        let mut state = running_state(PulseOptions::default());

        stop(&mut state);

        assert_eq!(advance(&mut state, Duration::from_millis(100)), 0);
        assert!(!state.animation.scheduler.is_running());
    }
}
