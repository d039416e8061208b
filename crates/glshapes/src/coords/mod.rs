//! Coordinate and geometry types shared by shapes, groups and renderers.
//!
//! World space:
//! - floating-point units (the ortho world maps one unit to one pixel)
//! - origin at the viewport center
//! - +X right, +Y down
//!
//! Shapes keep their vertices in local space around their own center and map
//! them into world space through their model matrix.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
