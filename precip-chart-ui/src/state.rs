//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;
use precip_core::record::PrecipitationRecord;

/// Shared state for the precipitation chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records from `data.json` (None until the fetch succeeds; set once)
    pub records: Signal<Option<Vec<PrecipitationRecord>>>,
    /// Compact (narrow viewport) layout, fed by the media query hook
    pub compact: Signal<bool>,
}

impl AppState {
    /// Create a new AppState around an externally owned compact signal.
    pub fn new(compact: Signal<bool>) -> Self {
        Self {
            records: Signal::new(None),
            compact,
        }
    }
}
