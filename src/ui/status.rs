//! Status-Bar am oberen Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let clock = &state.animation.clock;
            ui.label(format!("timeleft: {}", clock.time_left()));

            ui.separator();

            ui.label(format!("t = {:.3}", clock.t()));

            ui.separator();

            let n = state.point_count();
            ui.label(format!(
                "Punkte: {} | Ebenen-Punkte: {} | Segmente: {}",
                n,
                n * (n + 1) / 2,
                n.saturating_sub(1) * n / 2
            ));

            if state.options.persistent_point_layer {
                ui.separator();
                ui.label(format!("Spur: {}", state.trail.len()));
            }

            if !state.animation.scheduler.is_running() {
                ui.separator();
                ui.label(egui::RichText::new("⏸ gestoppt").color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
