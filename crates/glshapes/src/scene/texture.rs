use crate::coords::Vec2;

/// Opaque handle to a texture owned by the renderer.
///
/// Shapes only store the handle; creating and freeing GPU memory is the
/// renderer's job. Copies refer to the same texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(pub u32);

/// A texture binding: handle plus UV pairs, consumed one per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub handle: TextureHandle,
    pub coords: Vec<Vec2>,
}

impl Texture {
    #[inline]
    pub fn new(handle: TextureHandle, coords: Vec<Vec2>) -> Self {
        Self { handle, coords }
    }

    /// Builds the binding from a flat `[u0, v0, u1, v1, ...]` slice.
    ///
    /// A trailing odd value is ignored.
    pub fn from_flat(handle: TextureHandle, coords: &[f32]) -> Self {
        let coords = coords
            .chunks_exact(2)
            .map(|uv| Vec2::new(uv[0], uv[1]))
            .collect();
        Self { handle, coords }
    }
}
