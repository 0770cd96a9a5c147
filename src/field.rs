//! The particle field animator
//!
//! Owns the flake pool and drives it against an injected [`Surface`]:
//! seeding on start, per-frame motion in [`SnowField::tick`], density-driven
//! rebalance on resize, and full teardown on stop. Scheduling is the
//! driver's job (the wasm front-end ties `tick` to the display refresh).

use glam::Vec2;
use rand::{Rng as _, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::config::SnowConfig;
use crate::flake::Snowflake;
use crate::surface::{FlakeStyle, SnowError, Surface};

/// Vertical offset flakes spawn and recycle at, just above the visible top.
const SPAWN_Y: f32 = -50.0;

/// How far past the region edge a flake may drift before it is recycled.
const BOUNDS_MARGIN: f32 = 50.0;

/// Region area, px², that `density` flakes are targeted at on rebalance.
const DENSITY_AREA: f32 = 10000.0;

/// Manages the pool of falling snowflakes.
pub struct SnowField<S: Surface> {
    config: SnowConfig,
    flakes: Vec<Snowflake<S::Node>>,
    region: Vec2,
    rng: Xoshiro256StarStar,
}

impl<S: Surface> SnowField<S> {
    pub fn new(config: SnowConfig) -> Self {
        Self::with_rng(config, Xoshiro256StarStar::from_rng(&mut rand::rng()))
    }

    /// Build a field with a fixed seed, for reproducible trajectories.
    pub fn with_seed(config: SnowConfig, seed: u64) -> Self {
        Self::with_rng(config, Xoshiro256StarStar::seed_from_u64(seed))
    }

    fn with_rng(config: SnowConfig, rng: Xoshiro256StarStar) -> Self {
        let capacity = config.max_flakes as usize;
        Self {
            config,
            flakes: Vec::with_capacity(capacity),
            region: Vec2::ZERO,
            rng,
        }
    }

    /// Attach to the host region, capture its dimensions and seed the pool
    /// up to `max_flakes`.
    ///
    /// Fails when the configured selector matches nothing; the pool is left
    /// empty in that case and a later [`SnowField::stop`] stays safe.
    pub fn start(&mut self, surface: &mut S) -> Result<(), SnowError> {
        surface.attach(&self.config.target_selector)?;
        self.region = surface.region_size();

        // The initial seed always fills to the cap, not to density
        for _ in 0..self.config.max_flakes {
            self.spawn_flake(surface);
        }

        log::info!(
            "snow field started: {} flakes in {}x{} region",
            self.flakes.len(),
            self.region.x,
            self.region.y
        );
        Ok(())
    }

    /// Advance every flake by one frame and recycle out-of-bounds ones.
    pub fn tick(&mut self, surface: &mut S) {
        let region = self.region;

        for flake in &mut self.flakes {
            flake.pos.y += flake.fall_speed;
            flake.pos.x += flake.drift;

            if self.config.rotation {
                flake.rotation += flake.rotation_speed;
                surface.place_node(&flake.node, flake.pos, Some(flake.rotation));
            } else {
                surface.place_node(&flake.node, flake.pos, None);
            }

            // Recycle once it falls below the region
            if flake.pos.y > region.y + BOUNDS_MARGIN {
                flake.pos = Vec2::new(self.rng.random::<f32>() * region.x, SPAWN_Y);
            }

            // Recycle once it drifts out sideways. Checked on its own after
            // the vertical reset, never folded into one predicate.
            if flake.pos.x < -BOUNDS_MARGIN || flake.pos.x > region.x + BOUNDS_MARGIN {
                flake.pos = Vec2::new(self.rng.random::<f32>() * region.x, SPAWN_Y);
            }
        }

        // Enforce the cap, dropping the most recently added flakes first
        while self.flakes.len() > self.config.max_flakes as usize {
            if let Some(flake) = self.flakes.pop() {
                surface.remove_node(flake.node);
            }
        }
    }

    /// Re-capture region dimensions and grow or shrink the pool toward
    /// `floor(area / 10000 * density)`, clamped to `max_flakes`.
    pub fn rebalance(&mut self, surface: &mut S) {
        self.region = surface.region_size();

        let desired =
            ((self.region.x * self.region.y / DENSITY_AREA) * self.config.density).floor() as usize;
        let target = desired.min(self.config.max_flakes as usize);

        while self.flakes.len() > target {
            if let Some(flake) = self.flakes.pop() {
                surface.remove_node(flake.node);
            }
        }
        while self.flakes.len() < target {
            self.spawn_flake(surface);
        }

        log::debug!(
            "snow field rebalanced to {} flakes ({}x{} region)",
            self.flakes.len(),
            self.region.x,
            self.region.y
        );
    }

    /// Remove every flake from the surface and empty the pool. Idempotent,
    /// and safe to call before [`SnowField::start`].
    pub fn stop(&mut self, surface: &mut S) {
        for flake in self.flakes.drain(..) {
            surface.remove_node(flake.node);
        }
    }

    /// Create one flake at a random horizontal offset just above the region.
    ///
    /// Refuses silently when the pool is already at the cap.
    fn spawn_flake(&mut self, surface: &mut S) {
        if self.flakes.len() >= self.config.max_flakes as usize {
            return;
        }

        let size = self.rng.random::<f32>() * (self.config.max_size - self.config.min_size)
            + self.config.min_size;
        let node = surface.create_node(&FlakeStyle {
            size,
            image_url: &self.config.image_url,
            opacity: self.config.opacity,
        });

        let pos = Vec2::new(self.rng.random::<f32>() * self.region.x, SPAWN_Y);
        let fall_speed = self.rng.random::<f32>() * self.config.speed + 1.0;
        let drift = (self.rng.random::<f32>() * 2.0 - 1.0) * self.config.wind;
        let rotation = self.rng.random::<f32>() * 360.0;
        let rotation_speed = if self.config.rotation {
            self.rng.random::<f32>() * self.config.rotation_speed
        } else {
            0.0
        };

        surface.place_node(&node, pos, self.config.rotation.then_some(rotation));

        self.flakes.push(Snowflake {
            node,
            pos,
            size,
            fall_speed,
            drift,
            rotation,
            rotation_speed,
        });
    }

    /// Number of live flakes.
    pub fn count(&self) -> usize {
        self.flakes.len()
    }

    /// Iterate over all live flakes.
    pub fn flakes(&self) -> impl Iterator<Item = &Snowflake<S::Node>> {
        self.flakes.iter()
    }

    /// Last captured host region dimensions.
    pub fn region(&self) -> Vec2 {
        self.region
    }
}
