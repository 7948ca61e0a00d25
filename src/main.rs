//! Casteljau-Pulse.
//!
//! Klicks setzen Punkte, die iterative Mittelpunkt-Reduktion über alle Punkte
//! pulsiert mit dem Animationsparameter `t`.

use casteljau_pulse::{ui, AppController, AppIntent, AppState, PulseOptions};
use eframe::egui;
use std::time::Duration;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Casteljau-Pulse v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Casteljau-Pulse"),
            ..Default::default()
        };

        eframe::run_native(
            "Casteljau-Pulse",
            options,
            Box::new(|cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
                Ok(Box::new(PulseApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PulseApp {
    state: AppState,
    controller: AppController,
    /// egui-Zeitstempel des letzten Frames (Sekunden)
    last_frame_time: Option<f64>,
}

impl PulseApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PulseOptions::config_path();
        let pulse_options = PulseOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(pulse_options),
            controller: AppController::new(),
            last_frame_time: None,
        };
        app.process_events(vec![AppIntent::ViewMounted]);
        app
    }
}

impl eframe::App for PulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let elapsed = self
            .last_frame_time
            .map_or(Duration::ZERO, |last| {
                Duration::from_secs_f64((now - last).max(0.0))
            });
        self.last_frame_time = Some(now);
        self.process_events(vec![AppIntent::FrameElapsed { elapsed }]);

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let events = ui::collect_canvas_intents(&response, rect);
                self.process_events(events);

                // Ohne nutzbare Fläche wird der Frame still übersprungen
                if let Some(scene) = self.controller.build_render_scene(&self.state) {
                    ui::paint_scene(ui.painter(), rect, &scene);
                }
            });

        self.maybe_request_repaint(ctx);
    }
}

impl PulseApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        let scheduler = &self.state.animation.scheduler;
        if scheduler.is_running() {
            ctx.request_repaint_after(scheduler.period());
        }
    }
}

impl Drop for PulseApp {
    fn drop(&mut self) {
        // Timer mit dem Abbau der View freigeben
        self.process_events(vec![AppIntent::ViewTornDown]);
    }
}
