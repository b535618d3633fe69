use std::sync::Arc;

use quotation_export::output::OutputDir;
use quotation_export::Renderer;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
    pub output: OutputDir,
}

impl AppState {
    pub fn new(renderer: Renderer, output: OutputDir) -> Self {
        Self {
            renderer: Arc::new(renderer),
            output,
        }
    }
}
