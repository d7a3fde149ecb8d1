//! Per-frame transform computation.
//!
//! One shared `progress` value blends every particle between its scattered and
//! structured position. Breathing and rotation are layered on top, and the
//! result is written into a transform buffer that is allocated once and reused
//! every frame.

use crate::config::{MorphConfig, MotionParams, Relaxation};
use crate::constants::SETTLE_EPSILON;
use crate::layout::ParticleAttributes;
use crate::state::{AnimationState, TargetMode};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::TAU;

/// Placement of one particle for the current frame.
///
/// `rotation` holds XYZ Euler angles in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Model matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.rotation_quat(),
            self.position,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[inline]
fn wrap_angle(a: f32) -> f32 {
    finite_or_zero(a.rem_euclid(TAU))
}

/// Progress as a blend factor: clamped to `[0, 1]`, NaN treated as 0.
#[inline]
fn blend_factor(progress: f32) -> f32 {
    finite_or_zero(progress).clamp(0.0, 1.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `progress` one frame toward `target`.
///
/// Negative or non-finite `dt` leaves progress where it is. The result never
/// leaves `[0, 1]` and never passes the target; within `SETTLE_EPSILON` it
/// snaps onto it.
pub fn relax_progress(
    progress: f32,
    target: f32,
    rate: f32,
    dt: f32,
    relaxation: Relaxation,
) -> f32 {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        target
    };
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let alpha = match relaxation {
        Relaxation::Exponential => 1.0 - (-rate * dt).exp(),
        Relaxation::Linear => rate * dt,
    };
    let alpha = if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    };
    let next = lerp(progress, target, alpha).clamp(0.0, 1.0);
    if (target - next).abs() < SETTLE_EPSILON {
        target
    } else {
        next
    }
}

/// Vertical breathing offset of particle `index` at `elapsed` seconds.
pub fn float_offset(
    attributes: &ParticleAttributes,
    index: usize,
    progress: f32,
    elapsed: f32,
    motion: &MotionParams,
) -> f32 {
    let progress = blend_factor(progress);
    let phase = attributes.phases()[index];
    let (frequency, amplitude) = if attributes.is_apex(index) {
        (motion.apex_float_frequency, motion.apex_float_amplitude)
    } else {
        (
            motion.float_frequency,
            lerp(
                motion.float_amplitude_scattered,
                motion.float_amplitude_structured,
                progress,
            ),
        )
    };
    finite_or_zero((elapsed * frequency + phase).sin() * amplitude)
}

/// Compute the transform of particle `index` for one frame.
///
/// `progress` outside `[0, 1]` is clamped first.
pub fn particle_transform(
    attributes: &ParticleAttributes,
    index: usize,
    progress: f32,
    elapsed: f32,
    motion: &MotionParams,
) -> Transform {
    let progress = blend_factor(progress);
    let blended = attributes.scattered()[index].lerp(attributes.structured()[index], progress);
    let float_y = float_offset(attributes, index, progress, elapsed, motion);
    let position = blended + Vec3::new(0.0, float_y, 0.0);
    let base_scale = attributes.base_scales()[index];

    if attributes.is_apex(index) {
        Transform {
            position,
            rotation: Vec3::new(0.0, wrap_angle(elapsed * motion.apex_spin_rate), 0.0),
            scale: base_scale,
        }
    } else {
        let tumble = wrap_angle((1.0 - progress) * elapsed * motion.tumble_rate);
        let spin = wrap_angle(elapsed * motion.spin_rate);
        Transform {
            position,
            rotation: Vec3::new(tumble, spin, 0.0),
            scale: base_scale * lerp(motion.scattered_scale_factor, 1.0, progress),
        }
    }
}

/// Advance `state` by one frame and write every particle's transform to
/// `out`.
///
/// Only the first `min(out.len(), attributes.len())` slots are written.
pub fn advance(
    state: &mut AnimationState,
    attributes: &ParticleAttributes,
    config: &MorphConfig,
    dt: f32,
    elapsed: f32,
    out: &mut [Transform],
) {
    let elapsed = finite_or_zero(elapsed);
    state.progress = relax_progress(
        state.progress,
        state.target_mode.target_value(),
        config.anim_speed,
        dt,
        config.relaxation,
    );
    state.elapsed = elapsed;

    let progress = state.progress;
    for (i, slot) in out.iter_mut().enumerate().take(attributes.len()) {
        *slot = particle_transform(attributes, i, progress, elapsed, &config.motion);
    }
}

/// Owns the animation state and the reusable transform buffer of one
/// ensemble.
#[derive(Clone, Debug)]
pub struct TransformAnimator {
    config: MorphConfig,
    state: AnimationState,
    transforms: Vec<Transform>,
}

impl TransformAnimator {
    pub fn new(config: MorphConfig, particle_count: usize) -> Self {
        Self {
            config,
            state: AnimationState::default(),
            transforms: vec![Transform::default(); particle_count],
        }
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    #[inline]
    pub fn target_mode(&self) -> TargetMode {
        self.state.target_mode
    }

    /// Picked up by the next `advance`; progress itself is untouched.
    pub fn set_target_mode(&mut self, mode: TargetMode) {
        self.state.target_mode = mode;
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Match the buffer length to a new particle count. Only called when the
    /// layout is regenerated, never per frame.
    pub fn resize(&mut self, particle_count: usize) {
        self.transforms.resize(particle_count, Transform::default());
    }

    /// Run one frame and return the refreshed transforms.
    pub fn advance(
        &mut self,
        attributes: &ParticleAttributes,
        dt: f32,
        elapsed: f32,
    ) -> &[Transform] {
        if self.transforms.len() != attributes.len() {
            self.resize(attributes.len());
        }
        advance(
            &mut self.state,
            attributes,
            &self.config,
            dt,
            elapsed,
            &mut self.transforms,
        );
        &self.transforms
    }
}
