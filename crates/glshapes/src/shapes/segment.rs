use core::fmt;

use crate::coords::{Rect, Vec2};
use crate::error::Result;
use crate::paint::Color;
use crate::scene::{Primitive, Renderer, Texture};
use crate::world::World;

use super::{Shape, ShapeBase};

/// Straight line between two points.
///
/// The center is the midpoint; local vertices are the endpoints relative to
/// it, so rotations and scales act around the middle of the segment.
#[derive(Debug, Clone)]
pub struct Segment {
    base: ShapeBase,
}

impl Segment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let a = Vec2::new(x1, y1);
        let b = Vec2::new(x2, y2);
        let center = (a + b) / 2.0;
        Self {
            base: ShapeBase::new(vec![a - center, b - center], center),
        }
    }

    /// Current world-space endpoints.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let t = self.base.transform();
        let v = self.base.vertices();
        (t.apply(v[0]), t.apply(v[1]))
    }

    pub fn length(&self) -> f32 {
        let (a, b) = self.endpoints();
        a.distance(b)
    }

    #[inline]
    pub fn base(&self) -> &ShapeBase {
        &self.base
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.endpoints();
        write!(f, "Segment ({},{})->({},{}) {}", a.x, a.y, b.x, b.y, self.base)
    }
}

impl Shape for Segment {
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
        renderer.submit(self.base.draw_cmd(Primitive::Lines)?);
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
