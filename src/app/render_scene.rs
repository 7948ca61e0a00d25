//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use casteljau_pulse_engine::reduce;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Reduktion wird jeden Frame frisch aus der vollständigen Punktliste
/// berechnet. Ohne (oder mit leerer) Zeichenfläche gibt es keine Szene.
pub fn build(state: &AppState) -> Option<RenderScene<'_>> {
    if !state.view.surface.is_some_and(|s| !s.is_degenerate()) {
        return None;
    }

    Some(RenderScene {
        reduction: reduce(&state.points, state.animation.t()),
        trail: state
            .options
            .persistent_point_layer
            .then_some(&state.trail),
        options: &state.options,
    })
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::shared::{PulseOptions, SurfaceSize};
    use glam::Vec2;

    #[test]
    fn no_scene_without_surface() {
        let mut state = AppState::new();
        state.points.push(Vec2::new(1.0, 1.0));

        assert!(build(&state).is_none());

        state.view.surface = Some(SurfaceSize::new(0.0, 600.0));
        assert!(build(&state).is_none());
    }

    #[test]
    fn scene_carries_fresh_reduction() {
        let mut state = AppState::new();
        state.view.surface = Some(SurfaceSize::new(800.0, 600.0));
        state.points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];

        let scene = build(&state).expect("Szene erwartet");

        // t = 1.0 im Reset-Zustand
        assert_eq!(scene.reduction.rounds, 3);
        assert_eq!(scene.reduction.innermost(), Some(Vec2::new(10.0, 10.0)));
        assert!(scene.trail.is_some());
        assert!(scene.has_content());
    }

    #[test]
    fn single_layer_mode_has_no_trail() {
        let mut state = AppState::with_options(PulseOptions {
            persistent_point_layer: false,
            ..PulseOptions::default()
        });
        state.view.surface = Some(SurfaceSize::new(800.0, 600.0));

        let scene = build(&state).expect("Szene erwartet");

        assert!(scene.trail.is_none());
        assert!(!scene.has_content());
    }
}
