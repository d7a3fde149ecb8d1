//! GPU-ready per-instance records.
//!
//! Front-ends upload `InstanceBuffer::as_bytes()` straight into a vertex
//! buffer stepped per instance. The layout matches `PARTICLES_WGSL`: four
//! `vec4` model-matrix columns at locations 1..=4 and an RGBA color at 5.

use crate::animator::Transform;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub const SIZE: usize = std::mem::size_of::<InstanceRaw>();

    pub fn new(transform: &Transform, color: Vec3) -> Self {
        Self {
            model: transform.matrix().to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
        }
    }
}

/// Reusable instance array, one record per particle.
#[derive(Clone, Debug, Default)]
pub struct InstanceBuffer {
    raw: Vec<InstanceRaw>,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
        }
    }

    /// Refresh the records from index-aligned transforms and colors.
    ///
    /// The length follows the shorter input; storage is only reallocated when
    /// that length grows past the current capacity.
    pub fn pack(&mut self, transforms: &[Transform], colors: &[Vec3]) -> &[InstanceRaw] {
        let n = transforms.len().min(colors.len());
        self.raw.resize(n, InstanceRaw::default());
        for ((slot, t), c) in self.raw.iter_mut().zip(transforms).zip(colors) {
            *slot = InstanceRaw::new(t, *c);
        }
        &self.raw
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.raw)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}
