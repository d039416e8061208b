//! Renderer collaborator contract.
//!
//! Responsibilities:
//! - describe one shape draw as a self-contained [`DrawCmd`] bundle
//! - define the [`Renderer`] sink that GPU backends implement
//! - provide [`DrawList`], a recording renderer that keeps submission order
//!
//! Buffer upload, shader binding and the actual draw calls live behind
//! `Renderer` and are not part of this crate.

mod cmd;
mod list;
mod texture;

pub use cmd::{DrawCmd, Primitive, ShapeUniforms};
pub use list::DrawList;
pub use texture::{Texture, TextureHandle};

/// Sink for draw bundles.
///
/// Submission is fire-and-forget: a renderer reports its own failures and
/// never hands them back to the scene graph.
pub trait Renderer {
    fn submit(&mut self, cmd: DrawCmd);
}
