use core::fmt;

use crate::coords::{Rect, Vec2};
use crate::error::Result;
use crate::paint::Color;
use crate::scene::{Primitive, Renderer, Texture};
use crate::world::World;

use super::{Shape, ShapeBase};

/// Axis-aligned quad built around its center.
///
/// Local vertices are in triangle-strip order:
/// bottom-left, bottom-right, top-left, top-right (with +Y down, "bottom" is
/// the smaller y).
#[derive(Debug, Clone)]
pub struct BoxShape {
    base: ShapeBase,
    width: f32,
    height: f32,
}

impl BoxShape {
    /// Creates a `width` x `height` box centered at the origin, opaque blue,
    /// with an identity model matrix.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_center(width, height, Vec2::zero())
    }

    /// Creates a box centered at `center`.
    pub fn with_center(width: f32, height: f32, center: Vec2) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let vertices = vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(-hw, hh),
            Vec2::new(hw, hh),
        ];
        Self {
            base: ShapeBase::new(vertices, center),
            width,
            height,
        }
    }

    /// Unscaled size.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn base(&self) -> &ShapeBase {
        &self.base
    }
}

impl fmt::Display for BoxShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box {}", self.base)
    }
}

impl Shape for BoxShape {
    fn rotate(&mut self, angle: f32) {
        self.base.rotate(angle);
    }

    fn rotate_around(&mut self, pivot: Vec2, angle: f32) {
        self.base.rotate_around(pivot, angle);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.base.scale(sx, sy);
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        self.base.move_by(dx, dy);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.base.move_to(x, y);
    }

    fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.submit(self.base.draw_cmd(Primitive::TriangleStrip)?);
        Ok(())
    }

    fn vertices(&self) -> Vec<Vec2> {
        self.base.vertices().to_vec()
    }

    fn center(&self) -> Vec2 {
        self.base.center()
    }

    fn angle(&self) -> f32 {
        self.base.angle()
    }

    fn bounds(&self) -> Rect {
        self.base.bounds()
    }

    fn color(&self) -> Color {
        self.base.color()
    }

    fn set_color(&mut self, color: Color) {
        self.base.set_color(color);
    }

    fn attach_to_world(&mut self, world: &dyn World) {
        self.base.attach_to_world(world);
    }

    fn is_attached(&self) -> bool {
        self.base.is_attached()
    }

    fn check_tex_coords(&self, count: usize) -> Result<()> {
        self.base.check_tex_coords(count)
    }

    fn set_texture(&mut self, texture: Texture) -> Result<()> {
        self.base.set_texture(texture)
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;
    use crate::ShapeError;
    use crate::scene::{DrawList, TextureHandle};
    use crate::world::OrthoWorld;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_box_is_centered_quad() {
        let b = BoxShape::new(100.0, 50.0);
        assert_eq!(b.vertices().len(), 4);
        assert_eq!(b.center(), Vec2::zero());
        assert_eq!(b.bounds(), Rect::new(-50.0, -25.0, 100.0, 50.0));
        assert_eq!(b.base().model_matrix(), Mat4::IDENTITY);
        assert_eq!(b.color(), Color::DEFAULT);
        assert_eq!(b.base().vertex_colors().len(), 16);
    }

    #[test]
    fn with_center_places_bounds() {
        let b = BoxShape::with_center(10.0, 10.0, Vec2::new(5.0, 5.0));
        assert_eq!(b.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    // ── color ─────────────────────────────────────────────────────────────

    #[test]
    fn set_color_normalizes() {
        let mut b = BoxShape::new(1.0, 1.0);
        b.set_color(Color::rgba(170, 170, 170, 255));
        let n = b.normalized_color();
        assert!(close(n[0], 0.6667) && close(n[1], 0.6667) && close(n[2], 0.6667));
        assert_eq!(n[3], 1.0);
        assert!(b.base().vertex_colors().chunks(4).all(|c| c == n));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn rotate_quarter_turn_swaps_extent() {
        let mut b = BoxShape::new(100.0, 20.0);
        b.rotate(90.0);
        let r = b.bounds();
        assert!(close(r.width(), 20.0) && close(r.height(), 100.0));
        assert_eq!(b.angle(), 90.0);
    }

    #[test]
    fn scale_keeps_rotation() {
        let mut b = BoxShape::new(10.0, 10.0);
        b.rotate(45.0);
        b.scale(2.0, 2.0);
        assert_eq!(b.angle(), 45.0);
        // 20x20 square rotated 45° spans 20·√2.
        assert!((b.bounds().width() - 20.0 * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn move_shifts_center_and_bounds() {
        let mut b = BoxShape::new(10.0, 10.0);
        b.move_by(3.0, -2.0);
        assert_eq!(b.center(), Vec2::new(3.0, -2.0));
        assert_eq!(b.bounds(), Rect::new(-2.0, -7.0, 10.0, 10.0));
    }

    #[test]
    fn move_to_after_move_returns_home() {
        let mut b = BoxShape::with_center(4.0, 4.0, Vec2::new(7.0, 9.0));
        b.rotate(12.0);
        b.move_by(100.0, -40.0);
        b.move_to(7.0, 9.0);
        let c = b.center();
        assert!(close(c.x, 7.0) && close(c.y, 9.0));
    }

    // ── draw ──────────────────────────────────────────────────────────────

    #[test]
    fn draw_before_attach_fails() {
        let b = BoxShape::new(1.0, 1.0);
        let mut list = DrawList::new();
        assert!(matches!(b.draw(&mut list), Err(ShapeError::InvalidState(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn draw_submits_strip_with_world_matrices() {
        let world = OrthoWorld::new(640.0, 480.0);
        let mut b = BoxShape::new(100.0, 100.0);
        b.attach_to_world(&world);
        b.move_to(10.0, 20.0);

        let mut list = DrawList::new();
        b.draw(&mut list).unwrap();

        let cmd = &list.items()[0];
        assert_eq!(cmd.primitive, Primitive::TriangleStrip);
        assert_eq!(cmd.projection, world.projection());
        assert_eq!(cmd.model, b.base().model_matrix());
        assert!(cmd.texture.is_none());
    }

    // ── texture / clone ───────────────────────────────────────────────────

    #[test]
    fn texture_needs_uv_per_vertex() {
        let mut b = BoxShape::new(1.0, 1.0);
        let bad = Texture::from_flat(TextureHandle(1), &[0.0, 0.0, 1.0, 0.0]);
        assert_eq!(
            b.set_texture(bad),
            Err(ShapeError::TexCoordMismatch { expected: 4, got: 2 })
        );
        let good = Texture::from_flat(TextureHandle(1), &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(b.set_texture(good).is_ok());
    }

    #[test]
    fn extra_uvs_are_trimmed_at_draw() {
        let mut b = BoxShape::new(1.0, 1.0);
        b.attach_to_world(&OrthoWorld::new(10.0, 10.0));
        let uvs = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.5, 0.5];
        b.set_texture(Texture::from_flat(TextureHandle(2), &uvs)).unwrap();

        let mut list = DrawList::new();
        b.draw(&mut list).unwrap();
        let tex = list.items()[0].texture.as_ref().unwrap();
        assert_eq!(tex.handle, TextureHandle(2));
        assert_eq!(tex.coords.len(), 4);
        assert_eq!(tex.coords[3], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn clone_is_independent_but_shares_texture() {
        let mut b = BoxShape::new(1.0, 1.0);
        let tex = Texture::from_flat(TextureHandle(9), &[0.0; 8]);
        b.set_texture(tex).unwrap();

        let mut copy = b.clone_shape();
        copy.set_color(Color::rgb(255, 0, 0));
        copy.move_by(5.0, 5.0);

        assert_eq!(b.color(), Color::DEFAULT);
        assert_eq!(b.center(), Vec2::zero());
        assert!(copy.to_string().contains("TextureHandle(9)"));
    }
}
