//! In-memory surface for tests and headless runs
//!
//! Tracks live nodes and their last placement so pool invariants can be
//! asserted without any rendering backend.

use std::collections::HashMap;

use glam::Vec2;

use crate::surface::{FlakeStyle, SnowError, Surface};

/// Where a node was last rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placement {
    pub pos: Vec2,
    pub rotation: Option<f32>,
}

/// A [`Surface`] with no visual backend.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    region: Vec2,
    missing: bool,
    next_id: u32,
    nodes: HashMap<u32, Placement>,
    created: usize,
    removed: usize,
}

impl HeadlessSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            region: Vec2::new(width, height),
            ..Default::default()
        }
    }

    /// A surface whose region selector never matches.
    pub fn missing_region() -> Self {
        Self {
            missing: true,
            ..Default::default()
        }
    }

    /// Simulate a host region resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.region = Vec2::new(width, height);
    }

    /// Nodes currently attached to the region.
    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Total nodes created since construction.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Total nodes removed since construction.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Last rendered placement of every live node.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.nodes.values()
    }
}

impl Surface for HeadlessSurface {
    type Node = u32;

    fn attach(&mut self, selector: &str) -> Result<(), SnowError> {
        if self.missing {
            return Err(SnowError::RegionNotFound(selector.to_string()));
        }
        Ok(())
    }

    fn region_size(&self) -> Vec2 {
        self.region
    }

    fn create_node(&mut self, _style: &FlakeStyle<'_>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, Placement::default());
        self.created += 1;
        id
    }

    fn place_node(&mut self, node: &u32, pos: Vec2, rotation: Option<f32>) {
        if let Some(placement) = self.nodes.get_mut(node) {
            *placement = Placement { pos, rotation };
        }
    }

    fn remove_node(&mut self, node: u32) {
        if self.nodes.remove(&node).is_some() {
            self.removed += 1;
        }
    }
}
