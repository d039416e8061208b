//! glshapes crate.
//!
//! 2D shapes (boxes, segments) and groups of shapes with pivoted transforms,
//! per-vertex colors and textures, ready to hand to an OpenGL ES 2.0 style
//! renderer through the [`scene::Renderer`] trait.
//!
//! ```rust,ignore
//! let world = OrthoWorld::new(640.0, 480.0);
//! let group = Group::new();
//! group.append(BoxShape::with_center(40.0, 40.0, Vec2::new(-50.0, 0.0)));
//! group.append(Segment::new(0.0, 0.0, 50.0, 25.0));
//! group.attach_to_world(&world);
//! group.rotate(30.0);
//!
//! let mut frame = DrawList::new();
//! group.draw(&mut frame)?;
//! ```

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod shapes;
pub mod transform;
pub mod world;

pub use error::{Result, ShapeError};
pub use shapes::{BoxShape, Group, Segment, Shape};
