//! Projection/view supply.
//!
//! A [`World`] is queried once per `attach_to_world`; shapes keep copies of
//! the matrices and never hold on to the world itself.

mod ortho;

use glam::Mat4;

pub use ortho::OrthoWorld;

/// Source of the projection and view matrices used to render shapes.
pub trait World {
    /// Projection matrix used to render the objects in the world.
    fn projection(&self) -> Mat4;

    /// View matrix, i.e. the camera looking at the world.
    fn view(&self) -> Mat4;
}
