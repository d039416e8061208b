use glam::{Mat4, Vec3};

use crate::coords::Vec2;

/// Position, rotation and scale of a shape, rotated about a pivot.
///
/// Model matrix:
/// `Translate(pivot) · RotateZ(angle) · Translate(center - pivot) · Scale(sx, sy)`
///
/// `center` is where the shape's local origin sits before the rotation is
/// applied. With `pivot == center` the matrix reduces to
/// `Translate(center) · RotateZ(angle) · Scale(sx, sy)`.
///
/// Angles are absolute degrees: `rotate(30.0)` twice leaves the shape at 30°.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    center: Vec2,
    pivot: Vec2,
    angle: f32,
    scale: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec2::zero())
    }
}

impl Transform {
    /// Unrotated, unscaled transform placing the local origin at `center`.
    #[inline]
    pub fn at(center: Vec2) -> Self {
        Self {
            center,
            pivot: center,
            angle: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// World-space position of the local origin.
    #[inline]
    pub fn world_center(&self) -> Vec2 {
        self.pivot + (self.center - self.pivot).rotated(self.angle)
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn scale_factors(&self) -> Vec2 {
        self.scale
    }

    /// Rotates about the current world center.
    pub fn rotate(&mut self, angle: f32) {
        let center = self.world_center();
        self.rotate_around(center, angle);
    }

    /// Rotates about an arbitrary world-space `pivot`.
    ///
    /// The record is first rebased onto `pivot` without moving anything, then
    /// the new absolute angle is applied around it.
    pub fn rotate_around(&mut self, pivot: Vec2, angle: f32) {
        if pivot != self.pivot {
            let world = self.world_center();
            self.center = pivot + (world - pivot).rotated(-self.angle);
            self.pivot = pivot;
        }
        self.angle = angle;
    }

    /// Sets the scale factors. Rotation and position are kept.
    #[inline]
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.scale = Vec2::new(sx, sy);
    }

    /// Rigid world-space translation.
    #[inline]
    pub fn move_by(&mut self, delta: Vec2) {
        self.center += delta;
        self.pivot += delta;
    }

    /// Translates so the world center lands on `target`. Returns the delta
    /// that was applied.
    #[inline]
    pub fn move_to(&mut self, target: Vec2) -> Vec2 {
        let delta = target - self.world_center();
        self.move_by(delta);
        delta
    }

    /// Maps a local vertex into world space.
    #[inline]
    pub fn apply(&self, local: Vec2) -> Vec2 {
        let scaled = Vec2::new(local.x * self.scale.x, local.y * self.scale.y);
        self.pivot + (self.center - self.pivot + scaled).rotated(self.angle)
    }

    /// Freshly composed model matrix.
    pub fn matrix(&self) -> Mat4 {
        let offset = self.center - self.pivot;
        Mat4::from_translation(Vec3::new(self.pivot.x, self.pivot.y, 0.0))
            * Mat4::from_rotation_z(self.angle.to_radians())
            * Mat4::from_translation(Vec3::new(offset.x, offset.y, 0.0))
            * Mat4::from_scale(Vec3::new(self.scale.x, self.scale.y, 1.0))
    }
}
