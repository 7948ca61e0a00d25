//! Application State — zentrale Datenhaltung.

mod animation;
mod app_state;
mod view;

pub use animation::AnimationState;
pub use app_state::AppState;
pub use view::ViewState;
