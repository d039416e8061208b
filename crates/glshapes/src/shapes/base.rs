use core::fmt;

use glam::Mat4;

use crate::coords::{Rect, Vec2};
use crate::error::{Result, ShapeError};
use crate::paint::{Color, vertex_colors};
use crate::scene::{DrawCmd, Primitive, Texture};
use crate::transform::Transform;
use crate::world::World;

/// State shared by every primitive shape.
///
/// Invariants:
/// - `model` always equals `transform.matrix()`
/// - `bounds` is the tight world-space box of the transformed vertices
/// - `vertex_colors.len() == 4 * vertices.len()`
#[derive(Debug, Clone)]
pub struct ShapeBase {
    vertices: Vec<Vec2>,
    transform: Transform,
    bounds: Rect,

    color: Color,
    vertex_colors: Vec<f32>,

    model: Mat4,
    projection: Mat4,
    view: Mat4,
    attached: bool,

    texture: Option<Texture>,
}

impl ShapeBase {
    /// Builds a base from local `vertices` placed at `center`, with the
    /// default color and no texture.
    pub fn new(vertices: Vec<Vec2>, center: Vec2) -> Self {
        let mut base = Self {
            vertex_colors: Vec::new(),
            vertices,
            transform: Transform::at(center),
            bounds: Rect::default(),
            color: Color::DEFAULT,
            model: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            attached: false,
            texture: None,
        };
        base.set_color(Color::DEFAULT);
        base.refresh();
        base
    }

    fn refresh(&mut self) {
        self.model = self.transform.matrix();
        let t = &self.transform;
        self.bounds = Rect::from_points(self.vertices.iter().map(|v| t.apply(*v)))
            .unwrap_or_else(|| Rect::from_origin_size(t.world_center(), Vec2::zero()));
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
        self.refresh();
    }

    pub fn rotate_around(&mut self, pivot: Vec2, angle: f32) {
        self.transform.rotate_around(pivot, angle);
        self.refresh();
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.scale(sx, sy);
        self.refresh();
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let delta = Vec2::new(dx, dy);
        self.transform.move_by(delta);
        self.model = self.transform.matrix();
        self.bounds = self.bounds.translated(delta);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let delta = self.transform.move_to(Vec2::new(x, y));
        self.model = self.transform.matrix();
        self.bounds = self.bounds.translated(delta);
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.transform.world_center()
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.transform.angle()
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn model_matrix(&self) -> Mat4 {
        self.model
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stores `color` and rebuilds the per-vertex color buffer.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.vertex_colors = vertex_colors(color, self.vertices.len());
    }

    /// Flat buffer with four normalized floats per vertex.
    #[inline]
    pub fn vertex_colors(&self) -> &[f32] {
        &self.vertex_colors
    }

    // ── world / texture ───────────────────────────────────────────────────

    pub fn attach_to_world(&mut self, world: &dyn World) {
        self.projection = world.projection();
        self.view = world.view();
        self.attached = true;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn check_tex_coords(&self, count: usize) -> Result<()> {
        if count < self.vertices.len() {
            return Err(ShapeError::TexCoordMismatch {
                expected: self.vertices.len(),
                got: count,
            });
        }
        Ok(())
    }

    pub fn set_texture(&mut self, texture: Texture) -> Result<()> {
        self.check_tex_coords(texture.coords.len())?;
        self.texture = Some(texture);
        Ok(())
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Assembles the renderer bundle for this shape.
    pub fn draw_cmd(&self, primitive: Primitive) -> Result<DrawCmd> {
        if !self.attached {
            log::warn!("draw called before attach_to_world; nothing submitted");
            return Err(ShapeError::InvalidState("shape drawn before attach_to_world"));
        }
        Ok(DrawCmd {
            primitive,
            vertices: self.vertices.clone(),
            colors: self.vertex_colors.clone(),
            model: self.model,
            projection: self.projection,
            view: self.view,
            texture: self.texture.as_ref().map(|t| self.texture_for_draw(t)),
        })
    }

    fn texture_for_draw(&self, texture: &Texture) -> Texture {
        let coords = texture.coords.iter().take(self.vertices.len()).copied().collect();
        Texture::new(texture.handle, coords)
    }
}

/// `(cx,cy)-(w,h)` followed by the geometry and matrices.
impl fmt::Display for ShapeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.center();
        let size = self.bounds.size;
        writeln!(f, "({},{})-({},{})", c.x, c.y, size.x, size.y)?;
        writeln!(f, "Vertices: {:?}", self.vertices)?;
        writeln!(f, "Angle: {} Scale: {:?}", self.angle(), self.transform.scale_factors())?;
        writeln!(f, "Model matrix: {:?}", self.model.to_cols_array())?;
        writeln!(f, "Projection matrix: {:?}", self.projection.to_cols_array())?;
        writeln!(f, "View matrix: {:?}", self.view.to_cols_array())?;
        match &self.texture {
            Some(t) => writeln!(f, "Texture: {:?} {:?}", t.handle, t.coords)?,
            None => writeln!(f, "Texture: none")?,
        }
        write!(f, "Color: {:?} {:?}", self.color, self.color.normalized())
    }
}
