//! Shapes and groups.
//!
//! Extending the set:
//! - add a module holding the new shape type, built on `ShapeBase`
//! - implement [`Shape`] for it
//! - pick the [`Primitive`](crate::scene::Primitive) its vertices form

mod base;
mod box_shape;
mod group;
mod segment;

use core::fmt;

use crate::coords::{Rect, Vec2};
use crate::error::Result;
use crate::paint::Color;
use crate::scene::{Renderer, Texture};
use crate::world::World;

pub use base::ShapeBase;
pub use box_shape::BoxShape;
pub use group::Group;
pub use segment::Segment;

/// Uniform operation set shared by primitives and groups.
///
/// Transform operations follow [`Transform`](crate::transform::Transform):
/// angles are absolute degrees and rotation, scale and translation compose.
pub trait Shape: Send + Sync + fmt::Debug + fmt::Display {
    /// Rotates about the shape's own center.
    fn rotate(&mut self, angle: f32);

    /// Rotates about an arbitrary world-space pivot.
    fn rotate_around(&mut self, pivot: Vec2, angle: f32);

    /// Scales about the shape's own center.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Moves the shape by `(dx, dy)`.
    fn move_by(&mut self, dx: f32, dy: f32);

    /// Moves the center of the shape to `(x, y)`.
    fn move_to(&mut self, x: f32, y: f32);

    /// Submits the shape to `renderer`.
    ///
    /// Fails with [`ShapeError::InvalidState`](crate::ShapeError::InvalidState)
    /// if the shape was never attached to a world.
    fn draw(&self, renderer: &mut dyn Renderer) -> Result<()>;

    /// Local, untransformed geometry.
    fn vertices(&self) -> Vec<Vec2>;

    fn center(&self) -> Vec2;

    fn angle(&self) -> f32;

    /// World-space bounding box.
    fn bounds(&self) -> Rect;

    /// Bounds contributed to an enclosing group. `None` when the shape has
    /// no geometry of its own, like an empty group.
    fn aggregate_bounds(&self) -> Option<Rect> {
        Some(self.bounds())
    }

    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    /// Normalized `[r, g, b, a]` of the current color.
    fn normalized_color(&self) -> [f32; 4] {
        self.color().normalized()
    }

    /// Caches the world's projection and view matrices.
    fn attach_to_world(&mut self, world: &dyn World);

    fn is_attached(&self) -> bool;

    /// Checks that `count` texture coordinates cover every vertex.
    fn check_tex_coords(&self, count: usize) -> Result<()>;

    /// Binds a renderer-owned texture. Extra UVs beyond the vertex count
    /// are kept but not drawn.
    fn set_texture(&mut self, texture: Texture) -> Result<()>;

    /// Deep copy. Texture handles are shared, not duplicated.
    fn clone_shape(&self) -> Box<dyn Shape>;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}
