//! Waterworks Engine - falling-droplet simulation in WASM
//!
//! The host owns the window, input and the locked framebuffer; this crate
//! owns everything that happens inside the pixels:
//! - core/          - Low-level utilities (debug-checked hot-path access)
//! - domain/        - Pixel formats, droplet palette, area, settings
//! - spatial/       - Framebuffer view + droplet storage
//! - systems/       - Motion rules, drift table, landscape terrain
//! - simulation/    - Orchestration and the wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps external paths short)
pub use domain::area::LandscapeArea;
pub use domain::format::PixelFormat;
pub use domain::palette::{DropletPalette, KIND_BLUE, KIND_RED};
pub use domain::settings::SimSettings;
pub use spatial::droplets::DropletSet;
pub use spatial::framebuffer::FramebufferView;
pub use systems::drift::DriftTable;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Waterworks WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{PerfStats, Simulation};

// Export droplet kind constants for JS
#[wasm_bindgen]
pub fn kind_red() -> u8 { domain::palette::KIND_RED }
#[wasm_bindgen]
pub fn kind_blue() -> u8 { domain::palette::KIND_BLUE }
