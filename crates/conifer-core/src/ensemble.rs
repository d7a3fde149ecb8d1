//! One animated ensemble: attributes, animation state and transform buffer.
//!
//! This is the object a front-end drives. UI code flips the target mode,
//! the render loop calls `update` once per frame and then reads
//! `transforms()` and `colors()`.

use crate::animator::{Transform, TransformAnimator};
use crate::config::{ConfigError, MorphConfig};
use crate::layout::{generate_with_rng, ParticleAttributes};
use crate::state::TargetMode;
use glam::Vec3;
use rand::Rng;

pub struct Ensemble {
    attributes: ParticleAttributes,
    animator: TransformAnimator,
}

impl Ensemble {
    /// Validate `config` and generate a fresh layout from the thread RNG.
    pub fn new(config: MorphConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: MorphConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let attributes = generate_with_rng(&config, rng);
        let animator = TransformAnimator::new(config, attributes.len());
        Ok(Self {
            attributes,
            animator,
        })
    }

    pub fn attributes(&self) -> &ParticleAttributes {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    pub fn target_mode(&self) -> TargetMode {
        self.animator.target_mode()
    }

    pub fn set_target_mode(&mut self, mode: TargetMode) {
        if mode != self.animator.target_mode() {
            log::info!("target mode -> {:?}", mode);
        }
        self.animator.set_target_mode(mode);
    }

    pub fn toggle_mode(&mut self) {
        self.set_target_mode(self.animator.target_mode().toggled());
    }

    /// Run one frame. `dt` and `elapsed` are in seconds.
    pub fn update(&mut self, dt: f32, elapsed: f32) -> &[Transform] {
        self.animator.advance(&self.attributes, dt, elapsed)
    }

    pub fn transforms(&self) -> &[Transform] {
        self.animator.transforms()
    }

    pub fn colors(&self) -> &[Vec3] {
        self.attributes.colors()
    }

    /// Build a new layout with the same configuration. Progress and target
    /// mode carry over, so a regeneration mid-transition keeps animating.
    pub fn regenerate(&mut self) {
        self.regenerate_with_rng(&mut rand::thread_rng());
    }

    pub fn regenerate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.attributes = generate_with_rng(self.animator.config(), rng);
        self.animator.resize(self.attributes.len());
        log::info!("regenerated layout with {} particles", self.attributes.len());
    }
}
