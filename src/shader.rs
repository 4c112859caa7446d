//! WGSL source and the uniform block shared with it.

use bytemuck::{Pod, Zeroable};

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// Per-frame uniforms. Layout matches the `Uniforms` struct in
/// `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Surface width / height. The vertex shader divides sprite X extents
    /// by this to keep particles circular on non-square surfaces.
    pub aspect: f32,
    pub _padding: [f32; 3],
}

impl Uniforms {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            _padding: [0.0; 3],
        }
    }
}
