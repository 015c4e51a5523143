//! Shared state injected into every handler.

use std::sync::Arc;

use crate::api::binding::BindingMode;
use crate::domain::Greeter;

/// Read-only state shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// Greeting component backing the `say` routes.
    pub greeter: Arc<dyn Greeter>,
    /// Process-wide binding mode for object results.
    pub binding_mode: BindingMode,
}

impl AppState {
    pub fn new(greeter: Arc<dyn Greeter>, binding_mode: BindingMode) -> Self {
        Self {
            greeter,
            binding_mode,
        }
    }
}
