use core::fmt;

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use crate::coords::{Rect, Vec2};
use crate::error::{Result, ShapeError};
use crate::paint::Color;
use crate::scene::{Renderer, Texture};
use crate::transform::Transform;
use crate::world::World;

use super::Shape;

#[derive(Debug)]
struct Child {
    key: Option<String>,
    shape: Box<dyn Shape>,
}

/// Lock-protected group state.
#[derive(Debug)]
struct Members {
    children: Vec<Child>,
    /// Union of the children's bounds; `None` while empty.
    bounds: Option<Rect>,
    /// Group pivot and angle. Its world center is the group center.
    pivot: Transform,
    color: Color,
}

impl Members {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            bounds: None,
            pivot: Transform::default(),
            color: Color::DEFAULT,
        }
    }

    fn center(&self) -> Vec2 {
        self.pivot.world_center()
    }

    fn push(&mut self, key: Option<String>, shape: Box<dyn Shape>) {
        if let Some(b) = shape.aggregate_bounds() {
            let bounds = match self.bounds {
                None => b,
                Some(agg) => agg.union(b),
            };
            self.bounds = Some(bounds);
            self.pivot.move_to(bounds.center());
        }
        self.children.push(Child { key, shape });
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|c| c.key.as_deref() == Some(key))
    }

    fn union_bounds(&self) -> Option<Rect> {
        self.children
            .iter()
            .filter_map(|c| c.shape.aggregate_bounds())
            .reduce(Rect::union)
    }

    /// Re-unions the children's bounds, keeping the pivot where it is.
    fn refresh_bounds(&mut self) {
        self.bounds = self.union_bounds();
    }

    /// Re-unions the children's bounds and re-centers the pivot on them.
    fn recenter(&mut self) {
        self.refresh_bounds();
        if let Some(b) = self.bounds {
            self.pivot.move_to(b.center());
        }
    }
}

/// Ordered collection of shapes acting as one shape.
///
/// Children are owned by the group and drawn in append order. Every
/// operation takes the group's lock for its whole traversal: mutating ones
/// exclusively, read-only ones shared. So a group can be shared between
/// threads through an `Arc<Group>` and no reader ever sees a half-applied
/// append or move.
///
/// The group center is the midpoint of the aggregate bounds after `append`,
/// `insert`, `remove` and `recompute_bounds`. Rotations and scales keep it
/// fixed so repeated rotations pivot around the same point; transforms made
/// through the group refresh the aggregate bounds.
///
/// Primitive children carry no locks of their own. Reach them through
/// [`get_at`](Group::get_at) / [`update_at`](Group::update_at), never by
/// holding on to them outside the group.
pub struct Group {
    members: RwLock<Members>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("members", &*self.members.read())
            .finish()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            members: RwLock::new(Members::new()),
        }
    }

    // ── structure ─────────────────────────────────────────────────────────

    /// Adds `shape` after the existing children.
    pub fn append<S: Shape + 'static>(&self, shape: S) {
        self.append_boxed(Box::new(shape));
    }

    pub fn append_boxed(&self, shape: Box<dyn Shape>) {
        let mut m = self.members.write();
        m.push(None, shape);
        log::debug!(
            "group: appended child #{}, bounds {:?}",
            m.children.len(),
            m.bounds
        );
    }

    /// Adds `shape` after the existing children under a unique `key`.
    pub fn insert<S: Shape + 'static>(&self, key: impl Into<String>, shape: S) -> Result<()> {
        self.insert_boxed(key, Box::new(shape))
    }

    pub fn insert_boxed(&self, key: impl Into<String>, shape: Box<dyn Shape>) -> Result<()> {
        let key = key.into();
        let mut m = self.members.write();
        if m.position(&key).is_some() {
            return Err(ShapeError::DuplicateKey(key));
        }
        log::debug!("group: inserted '{key}'");
        m.push(Some(key), shape);
        Ok(())
    }

    /// Detaches the child stored under `key` and hands it back.
    pub fn remove(&self, key: &str) -> Result<Box<dyn Shape>> {
        let mut m = self.members.write();
        let Some(i) = m.position(key) else {
            return Err(ShapeError::NotFound(key.to_owned()));
        };
        let child = m.children.remove(i);
        m.recenter();
        log::debug!("group: removed '{key}', {} children left", m.children.len());
        Ok(child.shape)
    }

    /// Shared access to the child at `index`.
    ///
    /// The group stays read-locked while the guard lives.
    pub fn get_at(&self, index: usize) -> Result<MappedRwLockReadGuard<'_, dyn Shape>> {
        let m = self.members.read();
        let len = m.children.len();
        if index >= len {
            return Err(ShapeError::IndexOutOfRange { index, len });
        }
        Ok(RwLockReadGuard::map(m, |m| &*m.children[index].shape))
    }

    /// Shared access to the child stored under `key`.
    pub fn get(&self, key: &str) -> Result<MappedRwLockReadGuard<'_, dyn Shape>> {
        let m = self.members.read();
        let Some(i) = m.position(key) else {
            return Err(ShapeError::NotFound(key.to_owned()));
        };
        Ok(RwLockReadGuard::map(m, |m| &*m.children[i].shape))
    }

    /// Mutates the child at `index` under the exclusive lock, then refreshes
    /// the aggregate bounds.
    pub fn update_at<R>(&self, index: usize, f: impl FnOnce(&mut dyn Shape) -> R) -> Result<R> {
        let mut m = self.members.write();
        let len = m.children.len();
        if index >= len {
            return Err(ShapeError::IndexOutOfRange { index, len });
        }
        let out = f(m.children[index].shape.as_mut());
        m.refresh_bounds();
        Ok(out)
    }

    /// Re-unions every child's bounds and re-centers the group on them.
    pub fn recompute_bounds(&self) {
        self.members.write().recenter();
    }

    pub fn len(&self) -> usize {
        self.members.read().children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().children.is_empty()
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Rotates the whole group rigidly about the group center.
    pub fn rotate(&self, angle: f32) {
        let mut m = self.members.write();
        m.pivot.rotate(angle);
        let pivot = m.center();
        for c in &mut m.children {
            c.shape.rotate_around(pivot, angle);
        }
        m.refresh_bounds();
        log::trace!("group: rotated {} children to {angle}° about {pivot:?}", m.children.len());
    }

    /// Rotates the whole group about an arbitrary pivot.
    pub fn rotate_around(&self, pivot: Vec2, angle: f32) {
        let mut m = self.members.write();
        m.pivot.rotate_around(pivot, angle);
        for c in &mut m.children {
            c.shape.rotate_around(pivot, angle);
        }
        m.refresh_bounds();
    }

    /// Scales every child about its own center. Distances between children
    /// are not scaled.
    pub fn scale(&self, sx: f32, sy: f32) {
        let mut m = self.members.write();
        for c in &mut m.children {
            c.shape.scale(sx, sy);
        }
        m.refresh_bounds();
        log::trace!("group: scaled {} children by ({sx}, {sy})", m.children.len());
    }

    pub fn move_by(&self, dx: f32, dy: f32) {
        let mut m = self.members.write();
        Self::shift(&mut m, Vec2::new(dx, dy));
    }

    /// Moves the group center to `(x, y)`, keeping children's relative offsets.
    pub fn move_to(&self, x: f32, y: f32) {
        let mut m = self.members.write();
        let delta = Vec2::new(x, y) - m.center();
        Self::shift(&mut m, delta);
    }

    fn shift(m: &mut Members, delta: Vec2) {
        for c in &mut m.children {
            c.shape.move_by(delta.x, delta.y);
        }
        m.pivot.move_by(delta);
        m.bounds = m.bounds.map(|b| b.translated(delta));
        log::trace!("group: moved {} children by {delta:?}", m.children.len());
    }

    // ── paint / world ─────────────────────────────────────────────────────

    /// Sets the same color on every child.
    pub fn set_color(&self, color: Color) {
        let mut m = self.members.write();
        m.color = color;
        for c in &mut m.children {
            c.shape.set_color(color);
        }
    }

    pub fn attach_to_world(&self, world: &dyn World) {
        let mut m = self.members.write();
        for c in &mut m.children {
            c.shape.attach_to_world(world);
        }
        log::debug!("group: attached {} children to world", m.children.len());
    }

    /// Binds the same texture and UVs to every child. Each child draws the
    /// leading UVs it has vertices for.
    ///
    /// All children are checked first; on error nothing is changed.
    pub fn set_texture(&self, texture: Texture) -> Result<()> {
        let mut m = self.members.write();
        let count = texture.coords.len();
        for c in &m.children {
            c.shape.check_tex_coords(count)?;
        }
        for c in &mut m.children {
            c.shape.set_texture(texture.clone())?;
        }
        Ok(())
    }
}

impl Clone for Group {
    /// Deep copy: every child is cloned in order, keys included.
    fn clone(&self) -> Self {
        let m = self.members.read();
        let children = m
            .children
            .iter()
            .map(|c| Child {
                key: c.key.clone(),
                shape: c.shape.clone_shape(),
            })
            .collect();
        Self {
            members: RwLock::new(Members {
                children,
                bounds: m.bounds,
                pivot: m.pivot,
                color: m.color,
            }),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.members.read();
        let c = m.center();
        let size = m.bounds.map(|b| b.size).unwrap_or_default();
        writeln!(f, "Group ({},{})-({},{}) [{} children]", c.x, c.y, size.x, size.y, m.children.len())?;
        for child in &m.children {
            if let Some(key) = &child.key {
                write!(f, "[{key}] ")?;
            }
            writeln!(f, "{}", child.shape)?;
        }
        Ok(())
    }
}

impl Shape for Group {
    fn rotate(&mut self, angle: f32) {
        Group::rotate(self, angle);
    }

    fn rotate_around(&mut self, pivot: Vec2, angle: f32) {
        Group::rotate_around(self, pivot, angle);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        Group::scale(self, sx, sy);
    }

    fn move_by(&mut self, dx: f32, dy: f32) {
        Group::move_by(self, dx, dy);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        Group::move_to(self, x, y);
    }

    /// Draws children in append order. Nothing is submitted unless every
    /// child has been attached to a world.
    fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let m = self.members.read();
        if !m.children.iter().all(|c| c.shape.is_attached()) {
            log::warn!("group draw called before attach_to_world; nothing submitted");
            return Err(ShapeError::InvalidState("group child drawn before attach_to_world"));
        }
        for c in &m.children {
            c.shape.draw(renderer)?;
        }
        Ok(())
    }

    /// Children's vertices concatenated in append order.
    fn vertices(&self) -> Vec<Vec2> {
        let m = self.members.read();
        m.children.iter().flat_map(|c| c.shape.vertices()).collect()
    }

    fn center(&self) -> Vec2 {
        self.members.read().center()
    }

    fn angle(&self) -> f32 {
        self.members.read().pivot.angle()
    }

    /// Aggregate bounds; a zero-size rect at the center while empty.
    fn bounds(&self) -> Rect {
        let m = self.members.read();
        m.bounds
            .unwrap_or_else(|| Rect::from_origin_size(m.center(), Vec2::zero()))
    }

    fn aggregate_bounds(&self) -> Option<Rect> {
        self.members.read().bounds
    }

    fn color(&self) -> Color {
        self.members.read().color
    }

    fn set_color(&mut self, color: Color) {
        Group::set_color(self, color);
    }

    fn attach_to_world(&mut self, world: &dyn World) {
        Group::attach_to_world(self, world);
    }

    fn is_attached(&self) -> bool {
        let m = self.members.read();
        m.children.iter().all(|c| c.shape.is_attached())
    }

    fn check_tex_coords(&self, count: usize) -> Result<()> {
        let m = self.members.read();
        for c in &m.children {
            c.shape.check_tex_coords(count)?;
        }
        Ok(())
    }

    fn set_texture(&mut self, texture: Texture) -> Result<()> {
        Group::set_texture(self, texture)
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}
