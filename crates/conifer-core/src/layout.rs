//! Layout generation: two arrangements plus color, scale and phase for every
//! particle.
//!
//! The scattered layout fills a sphere uniformly by volume. The structured
//! layout winds the particles up a cone with a near-golden-angle step so that
//! consecutive particles never line up radially. Both are produced once and
//! stored as index-aligned arrays inside `ParticleAttributes`.

use crate::config::MorphConfig;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Immutable per-particle attributes of one ensemble.
///
/// All arrays have the same length. When the apex element is enabled it sits
/// at the last index.
#[derive(Clone, Debug, Default)]
pub struct ParticleAttributes {
    scattered: Vec<Vec3>,
    structured: Vec<Vec3>,
    colors: Vec<Vec3>,
    base_scales: Vec<f32>,
    phases: Vec<f32>,
    apex_index: Option<usize>,
}

impl ParticleAttributes {
    #[inline]
    pub fn len(&self) -> usize {
        self.scattered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scattered.is_empty()
    }

    pub fn scattered(&self) -> &[Vec3] {
        &self.scattered
    }

    pub fn structured(&self) -> &[Vec3] {
        &self.structured
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn base_scales(&self) -> &[f32] {
        &self.base_scales
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    #[inline]
    pub fn apex_index(&self) -> Option<usize> {
        self.apex_index
    }

    #[inline]
    pub fn is_apex(&self, index: usize) -> bool {
        self.apex_index == Some(index)
    }
}

/// Radius of the cone at `percent` of its height: full base radius at 0,
/// zero at the tip.
#[inline]
pub fn cone_radius(percent: f32, base_radius: f32) -> f32 {
    (1.0 - percent.clamp(0.0, 1.0)) * base_radius
}

/// Structured position of particle `index` out of `count`.
pub fn spiral_position(index: usize, count: usize, config: &MorphConfig) -> Vec3 {
    let percent = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    let y = percent * config.tree_height - config.tree_height / 2.0;
    let r = cone_radius(percent, config.tree_radius);
    let angle = index as f32 * config.spiral_increment;
    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Uniform sample inside a sphere of `radius` centered at the origin.
///
/// The cube root keeps density constant over the volume and
/// `acos(2u - 1)` keeps directions from bunching at the poles.
pub fn sample_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let r = radius * rng.gen::<f32>().cbrt();
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, config: &MorphConfig) -> Vec3 {
    let palette = &config.colors;
    let (first, fallback) = if rng.gen::<f32>() < palette.accent_probability {
        (&palette.accent, &palette.base)
    } else {
        (&palette.base, &palette.accent)
    };
    first
        .choose(rng)
        .or_else(|| fallback.choose(rng))
        .copied()
        .unwrap_or(Vec3::ONE)
}

fn pick_scale<R: Rng + ?Sized>(rng: &mut R, config: &MorphConfig) -> f32 {
    let (min, max) = config.scale_range;
    min + (max - min) * rng.gen::<f32>()
}

/// Generate attributes using the thread-local RNG.
pub fn generate(config: &MorphConfig) -> ParticleAttributes {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate attributes drawing all randomness from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(config: &MorphConfig, rng: &mut R) -> ParticleAttributes {
    let n = config.count;
    let total = config.total_count();
    let center = Vec3::new(0.0, config.scatter_center_y, 0.0);

    let mut attrs = ParticleAttributes {
        scattered: Vec::with_capacity(total),
        structured: Vec::with_capacity(total),
        colors: Vec::with_capacity(total),
        base_scales: Vec::with_capacity(total),
        phases: Vec::with_capacity(total),
        apex_index: None,
    };

    for i in 0..n {
        attrs
            .scattered
            .push(center + sample_in_sphere(rng, config.scatter_radius));
        attrs.structured.push(spiral_position(i, n, config));
        attrs.colors.push(pick_color(rng, config));
        attrs.base_scales.push(pick_scale(rng, config));
        attrs.phases.push(i as f32 * config.phase_spread);
    }

    if config.apex {
        let apex = &config.apex_params;
        let tip = config.apex_position();
        let jitter = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>(),
            rng.gen::<f32>() * 2.0 - 1.0,
        ) * apex.scatter_jitter;
        attrs
            .scattered
            .push(tip + Vec3::new(0.0, apex.scatter_lift, 0.0) + jitter);
        attrs.structured.push(tip);
        attrs.colors.push(apex.color);
        attrs.base_scales.push(apex.scale);
        attrs.phases.push(n as f32 * config.phase_spread);
        attrs.apex_index = Some(n);
    }

    log::debug!(
        "generated {} particles ({} regular, apex: {})",
        attrs.len(),
        n,
        config.apex
    );
    attrs
}
