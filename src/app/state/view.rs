use crate::shared::SurfaceSize;

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Größe der Zeichenfläche (None = noch keine Fläche angebunden)
    pub surface: Option<SurfaceSize>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand ohne Zeichenfläche.
    pub fn new() -> Self {
        Self { surface: None }
    }
}
