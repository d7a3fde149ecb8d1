//! Static configuration shared by the layout generator and the animator.
//!
//! A `MorphConfig` is built once (usually from `Default`) and handed to both
//! halves of the core. Nothing in it changes while an ensemble is alive; a new
//! count or palette means a new ensemble.

use crate::constants::*;
use glam::Vec3;
use thiserror::Error;

/// Color choices for non-apex particles.
///
/// Fields:
/// - `base`: the dominant sub-palette
/// - `accent`: the highlight sub-palette
/// - `accent_probability`: chance that a particle draws from `accent`
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub base: Vec<Vec3>,
    pub accent: Vec<Vec3>,
    pub accent_probability: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: BASE_COLORS.iter().copied().map(Vec3::from).collect(),
            accent: ACCENT_COLORS.iter().copied().map(Vec3::from).collect(),
            accent_probability: ACCENT_PROBABILITY,
        }
    }
}

/// How progress approaches its target each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Relaxation {
    /// `alpha = 1 - exp(-k * dt)`; same trajectory at any frame rate.
    #[default]
    Exponential,
    /// `alpha = k * dt`; matches the pacing of per-frame linear damping and
    /// reaches the target in a single frame once `k * dt >= 1`.
    Linear,
}

/// Secondary-motion tuning applied on top of the blended position.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub float_frequency: f32,
    pub float_amplitude_scattered: f32,
    pub float_amplitude_structured: f32,
    pub apex_float_frequency: f32,
    pub apex_float_amplitude: f32,
    pub tumble_rate: f32,
    pub spin_rate: f32,
    pub apex_spin_rate: f32,
    pub scattered_scale_factor: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            float_frequency: FLOAT_FREQUENCY,
            float_amplitude_scattered: FLOAT_AMPLITUDE_SCATTERED,
            float_amplitude_structured: FLOAT_AMPLITUDE_STRUCTURED,
            apex_float_frequency: APEX_FLOAT_FREQUENCY,
            apex_float_amplitude: APEX_FLOAT_AMPLITUDE,
            tumble_rate: TUMBLE_RATE,
            spin_rate: SPIN_RATE,
            apex_spin_rate: APEX_SPIN_RATE,
            scattered_scale_factor: SCATTERED_SCALE_FACTOR,
        }
    }
}

/// Look and scattered placement of the apex element.
///
/// Fields:
/// - `scale`: fixed base scale
/// - `color`: fixed color, outside the regular palette
/// - `scatter_lift`: height of the scattered apex above the structured one
/// - `scatter_jitter`: half-width of the random offset around that lifted point
#[derive(Clone, Debug, PartialEq)]
pub struct ApexParams {
    pub scale: f32,
    pub color: Vec3,
    pub scatter_lift: f32,
    pub scatter_jitter: f32,
}

impl Default for ApexParams {
    fn default() -> Self {
        Self {
            scale: APEX_SCALE,
            color: Vec3::from(APEX_COLOR),
            scatter_lift: APEX_SCATTER_LIFT,
            scatter_jitter: APEX_SCATTER_JITTER,
        }
    }
}

/// Everything needed to generate and animate one ensemble.
///
/// Fields:
/// - `count`: number of regular particles (the apex, if any, is extra)
/// - `scatter_radius`: radius of the scattered sphere
/// - `tree_height`: total height of the cone
/// - `tree_radius`: radius of the cone at its base
/// - `anim_speed`: relaxation rate `k` of the progress value
/// - `colors`: palette for regular particles
/// - `apex`: whether to add the apex element at index `count`
/// - `apex_offset`: gap between the cone tip and the apex
/// - `apex_params`: scale, color and scattered placement of the apex
/// - `scale_range`: `(min, max)` of the per-particle base scale
/// - `spiral_increment`: angular step between consecutive particles
/// - `scatter_center_y`: vertical center of the scattered cloud
/// - `phase_spread`: oscillation phase step between consecutive particles
/// - `relaxation`: progress damping form
/// - `motion`: secondary-motion constants
#[derive(Clone, Debug, PartialEq)]
pub struct MorphConfig {
    pub count: usize,
    pub scatter_radius: f32,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub anim_speed: f32,
    pub colors: Palette,
    pub apex: bool,
    pub apex_offset: f32,
    pub apex_params: ApexParams,
    pub scale_range: (f32, f32),
    pub spiral_increment: f32,
    pub scatter_center_y: f32,
    pub phase_spread: f32,
    pub relaxation: Relaxation,
    pub motion: MotionParams,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            scatter_radius: SCATTER_RADIUS,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            anim_speed: ANIM_SPEED,
            colors: Palette::default(),
            apex: true,
            apex_offset: APEX_OFFSET,
            apex_params: ApexParams::default(),
            scale_range: (SCALE_MIN, SCALE_MAX),
            spiral_increment: SPIRAL_INCREMENT,
            scatter_center_y: SCATTER_CENTER_Y,
            phase_spread: PHASE_SPREAD,
            relaxation: Relaxation::default(),
            motion: MotionParams::default(),
        }
    }
}

/// Reasons a configuration cannot produce a usable ensemble.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("palette has no colors")]
    EmptyPalette,
    #[error("accent probability must lie in [0, 1], got {0}")]
    AccentProbability(f32),
    #[error("color channel out of [0, 1]: {0:?}")]
    ColorOutOfRange([f32; 3]),
    #[error("scale range must satisfy 0 < min <= max, got ({min}, {max})")]
    ScaleRange { min: f32, max: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

impl MorphConfig {
    /// Same defaults with a different particle count.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Number of generated particles, apex included.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.count + usize::from(self.apex)
    }

    /// Structured-layout position of the apex element.
    #[inline]
    pub fn apex_position(&self) -> Vec3 {
        Vec3::new(0.0, self.tree_height / 2.0 + self.apex_offset, 0.0)
    }

    /// Check that the values can drive generation and animation.
    ///
    /// A zero `count` is valid and produces an empty (or apex-only) ensemble.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scatter_radius", self.scatter_radius)?;
        positive("tree_height", self.tree_height)?;
        positive("tree_radius", self.tree_radius)?;
        positive("anim_speed", self.anim_speed)?;
        finite("apex_offset", self.apex_offset)?;
        finite("spiral_increment", self.spiral_increment)?;
        finite("scatter_center_y", self.scatter_center_y)?;
        finite("phase_spread", self.phase_spread)?;

        let apex = &self.apex_params;
        positive("apex_scale", apex.scale)?;
        finite("apex_scatter_lift", apex.scatter_lift)?;
        finite("apex_scatter_jitter", apex.scatter_jitter)?;

        let (min, max) = self.scale_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::ScaleRange { min, max });
        }

        let p = self.colors.accent_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::AccentProbability(p));
        }
        if self.colors.base.is_empty() && self.colors.accent.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let apex_color = std::iter::once(&self.apex_params.color);
        for c in self.colors.base.iter().chain(&self.colors.accent).chain(apex_color) {
            if !c.to_array().iter().all(|v| (0.0..=1.0).contains(v)) {
                return Err(ConfigError::ColorOutOfRange(c.to_array()));
            }
        }

        let m = &self.motion;
        for (name, value) in [
            ("float_frequency", m.float_frequency),
            ("float_amplitude_scattered", m.float_amplitude_scattered),
            ("float_amplitude_structured", m.float_amplitude_structured),
            ("apex_float_frequency", m.apex_float_frequency),
            ("apex_float_amplitude", m.apex_float_amplitude),
            ("tumble_rate", m.tumble_rate),
            ("spin_rate", m.spin_rate),
            ("apex_spin_rate", m.apex_spin_rate),
        ] {
            finite(name, value)?;
        }
        positive("scattered_scale_factor", m.scattered_scale_factor)?;
        Ok(())
    }
}
