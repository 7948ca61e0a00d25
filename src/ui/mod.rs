//! UI-Layer mit egui: Zeichenfläche, Input-Handling, Status-Bar.

pub mod canvas;
pub mod input;
pub mod status;

pub use canvas::paint_scene;
pub use input::collect_canvas_intents;
pub use status::render_status_bar;
