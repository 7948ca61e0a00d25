//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos } => vec![AppCommand::AddPoint { pos }],
        AppIntent::FrameElapsed { elapsed } => {
            if state.animation.scheduler.is_running() {
                vec![AppCommand::AdvanceAnimation { elapsed }]
            } else {
                Vec::new()
            }
        }
        AppIntent::SurfaceResized { size } => {
            // Der Host meldet die Größe jeden Frame, nur Änderungen sind relevant
            if state.view.surface == Some(size) {
                Vec::new()
            } else {
                vec![AppCommand::SetSurfaceSize { size }]
            }
        }
        AppIntent::ViewMounted => vec![AppCommand::StartAnimation],
        AppIntent::ViewTornDown => vec![AppCommand::StopAnimation],
    }
}
