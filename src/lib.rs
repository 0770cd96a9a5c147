//! # Snowfield - decorative falling-snow effect
//!
//! Animates a bounded pool of snowflake particles inside a host region,
//! recycling flakes that drift out of view and rebalancing the pool when
//! the region resizes.

pub mod config;
pub mod field;
pub mod flake;
pub mod surface;

// In-memory surface for tests and headless runs (native only)
#[cfg(not(target_arch = "wasm32"))]
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod effect;

pub use config::SnowConfig;
pub use field::SnowField;
pub use flake::Snowflake;
pub use surface::{FlakeStyle, SnowError, Surface};

#[cfg(target_arch = "wasm32")]
pub use effect::SnowEffect;

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    // Initialize logging for WASM
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Snowfield WASM module initialized");
}
