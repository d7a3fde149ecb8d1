//! Mode and animation state, plus the camera description used by front-ends.
//!
//! These types avoid platform-specific APIs. The animator mutates
//! `AnimationState` once per frame; front-ends only write `target_mode`.

use glam::{Mat4, Vec3};

/// Which arrangement the ensemble is heading toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetMode {
    #[default]
    Scattered,
    Structured,
}

impl TargetMode {
    /// Numeric progress value this mode relaxes toward.
    #[inline]
    pub fn target_value(self) -> f32 {
        match self {
            TargetMode::Scattered => 0.0,
            TargetMode::Structured => 1.0,
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            TargetMode::Scattered => TargetMode::Structured,
            TargetMode::Structured => TargetMode::Scattered,
        }
    }
}

/// Per-ensemble animation state.
///
/// `progress` is 0 when fully scattered and 1 when fully structured; it is
/// kept inside `[0, 1]` by every update. `elapsed` is the last elapsed time
/// handed to the animator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub progress: f32,
    pub target_mode: TargetMode,
    pub elapsed: f32,
}

impl AnimationState {
    pub fn new(target_mode: TargetMode) -> Self {
        Self {
            progress: target_mode.target_value(),
            target_mode,
            elapsed: 0.0,
        }
    }

    /// True once progress sits exactly on the target value.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.progress == self.target_mode.target_value()
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera circling the Y axis at `distance`, `height` above the origin,
    /// positioned at `angle` radians.
    pub fn orbiting(angle: f32, distance: f32, height: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(angle.sin() * distance, height, angle.cos() * distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 200.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
