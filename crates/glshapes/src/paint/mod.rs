//! Shape colouring.
//!
//! Colors are stored as straight-alpha RGBA bytes and expanded to normalized
//! floats once per `set_color`, together with the flat per-vertex color
//! buffer consumed by renderers.

mod color;

pub use color::{Color, vertex_colors};
