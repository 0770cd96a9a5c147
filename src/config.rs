//! Snow effect configuration
//!
//! All options have defaults and are immutable once the effect is built.
//! Field names serialize as camelCase so a plain JS options object
//! deserializes directly into [`SnowConfig`].

use serde::{Deserialize, Serialize};

/// Default selector for the host region.
pub const DEFAULT_TARGET_SELECTOR: &str = ".snow-container";

/// Default flake image: a 10x10 white circle as an inline SVG data URI.
pub const DEFAULT_IMAGE_URL: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxMCIgaGVpZ2h0PSIxMCI+PGNpcmNsZSBjeD0iNSIgY3k9IjUiIHI9IjUiIGZpbGw9IndoaXRlIi8+PC9zdmc+";

/// Snow effect options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnowConfig {
    /// CSS selector for the region the snow falls inside
    pub target_selector: String,
    /// Image drawn for every flake
    pub image_url: String,
    /// Smallest flake size, px
    pub min_size: f32,
    /// Largest flake size, px
    pub max_size: f32,
    /// Fall-speed scale: each flake falls 1..speed+1 px per frame
    pub speed: f32,
    /// Rebalance target: flakes per 10000 px² of region area
    pub density: f32,
    /// Hard cap on the number of live flakes
    pub max_flakes: u32,
    /// Max horizontal drift per frame; each flake drifts within [-wind, wind]
    pub wind: f32,
    /// Rotate flakes while they fall
    pub rotation: bool,
    /// Max rotation increment per frame, degrees
    pub rotation_speed: f32,
    /// Flake opacity
    pub opacity: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            target_selector: DEFAULT_TARGET_SELECTOR.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            min_size: 10.0,
            max_size: 30.0,
            speed: 5.0,
            density: 30.0,
            max_flakes: 100,
            wind: 1.0,
            rotation: false,
            rotation_speed: 3.0,
            opacity: 0.8,
        }
    }
}
