use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::coords::Vec2;

use super::Texture;

/// How the vertex stream is assembled.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    /// Quads: four vertices in strip order.
    TriangleStrip,
    /// Line segments: vertex pairs.
    Lines,
}

/// Everything a renderer needs to draw one shape.
///
/// Vertices are in the shape's local space. The shape shaders compute
/// `projection * model * view * pos`, applying the view before the model
/// matrix; with the identity view of [`OrthoWorld`](crate::world::OrthoWorld)
/// this is the same as `projection * view * model * pos`.
///
/// `texture`, when present, carries exactly one UV pair per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub primitive: Primitive,
    pub vertices: Vec<Vec2>,
    /// Four normalized floats per vertex.
    pub colors: Vec<f32>,
    pub model: Mat4,
    pub projection: Mat4,
    pub view: Mat4,
    pub texture: Option<Texture>,
}

/// Uniform block layout for the shape shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ShapeUniforms {
    pub model: [f32; 16],
    pub projection: [f32; 16],
    pub view: [f32; 16],
    /// `1.0` samples the texture only, `0.0` uses vertex colors only.
    pub tex_ratio: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

impl DrawCmd {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Column-major matrices plus texture ratio, ready for upload.
    pub fn uniforms(&self) -> ShapeUniforms {
        ShapeUniforms {
            model: self.model.to_cols_array(),
            projection: self.projection.to_cols_array(),
            view: self.view.to_cols_array(),
            tex_ratio: if self.texture.is_some() { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        }
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    #[inline]
    pub fn tex_coord_bytes(&self) -> Option<&[u8]> {
        self.texture
            .as_ref()
            .map(|t| bytemuck::cast_slice(&t.coords))
    }
}
