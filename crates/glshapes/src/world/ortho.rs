use glam::Mat4;

use super::World;

/// Viewport-sized orthographic world.
///
/// One world unit maps to one pixel, the origin sits at the viewport center
/// and +Y points down. The view matrix is the identity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoWorld {
    width: f32,
    height: f32,
    projection: Mat4,
    view: Mat4,
}

impl OrthoWorld {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            projection: ortho_2d(width, height),
            view: Mat4::IDENTITY,
        }
    }

    /// Rebuilds the projection for a new viewport size.
    ///
    /// Shapes already attached keep their old matrices until they are
    /// attached again.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.projection = ortho_2d(width, height);
    }

    /// Replaces the view (camera) matrix.
    pub fn set_view(&mut self, view: Mat4) {
        self.view = view;
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl World for OrthoWorld {
    #[inline]
    fn projection(&self) -> Mat4 {
        self.projection
    }

    #[inline]
    fn view(&self) -> Mat4 {
        self.view
    }
}

fn ortho_2d(width: f32, height: f32) -> Mat4 {
    let (hw, hh) = (width / 2.0, height / 2.0);
    // bottom = +hh, top = -hh: screen-style +Y down.
    Mat4::orthographic_rh_gl(-hw, hw, hh, -hh, -1.0, 1.0)
}
