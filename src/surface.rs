//! Visual environment abstraction
//!
//! The animator never touches a concrete rendering backend: it drives a
//! [`Surface`], which owns host-region lookup and per-node rendering. The
//! wasm build plugs in a DOM-backed surface; tests use the headless one.

use glam::Vec2;
use thiserror::Error;

/// Errors the snow effect can hit while starting up.
///
/// Nothing after a successful start is fallible: per-frame updates and
/// rebalances are pure in-memory and visual-tree mutations.
#[derive(Debug, Error)]
pub enum SnowError {
    /// No visual environment (window/document) is available.
    #[error("no visual environment available")]
    EnvironmentUnavailable,

    /// The configured selector matched nothing.
    #[error("snow container not found: {0}")]
    RegionNotFound(String),
}

/// Fixed visual attributes a flake node is created with.
#[derive(Debug, Clone, Copy)]
pub struct FlakeStyle<'a> {
    pub size: f32,
    pub image_url: &'a str,
    pub opacity: f32,
}

/// The visual environment the snow falls on.
pub trait Surface {
    /// Handle to one flake's visual node.
    type Node;

    /// Locate the host region and prepare it to clip absolutely-positioned
    /// children. Fails when the selector matches nothing.
    fn attach(&mut self, selector: &str) -> Result<(), SnowError>;

    /// Current host region dimensions (width, height).
    fn region_size(&self) -> Vec2;

    /// Create one flake node as a child of the host region.
    fn create_node(&mut self, style: &FlakeStyle<'_>) -> Self::Node;

    /// Move a node to `pos`, optionally rotated by `rotation` degrees.
    fn place_node(&mut self, node: &Self::Node, pos: Vec2, rotation: Option<f32>);

    /// Detach a node from the host region.
    fn remove_node(&mut self, node: Self::Node);
}
