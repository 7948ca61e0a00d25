//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Alle Handler sind derzeit infallibel, das Ergebnis ist immer `Ok(())`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichenfläche ===
            AppCommand::AddPoint { pos } => handlers::canvas::add_point(state, pos),
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),

            // === Animation ===
            AppCommand::AdvanceAnimation { elapsed } => handlers::animation::advance(state, elapsed),
            AppCommand::StartAnimation => handlers::animation::start(state),
            AppCommand::StopAnimation => handlers::animation::stop(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    ///
    /// `None`, solange keine nutzbare Zeichenfläche angebunden ist.
    pub fn build_render_scene<'a>(&self, state: &'a AppState) -> Option<RenderScene<'a>> {
        render_scene::build(state)
    }
}
