//! Per-flake motion state

use glam::Vec2;

/// A single falling snowflake.
///
/// All motion state is owned here by the pool; the surface node is held only
/// as a back-reference for rendering, never as the source of truth.
#[derive(Debug)]
pub struct Snowflake<N> {
    pub(crate) node: N,
    /// Region-local position, px
    pub pos: Vec2,
    /// Rendered size, px (fixed at creation)
    pub size: f32,
    /// Fall speed, px/frame (fixed at creation)
    pub fall_speed: f32,
    /// Horizontal drift, px/frame (fixed at creation)
    pub drift: f32,
    /// Rotation angle, degrees
    pub rotation: f32,
    /// Rotation increment, degrees/frame (0 when rotation is disabled)
    pub rotation_speed: f32,
}
