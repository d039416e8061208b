use super::Vec2;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Builds the rectangle spanning two corners, in any order.
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Rect::from_origin_size(min, max - min).normalized()
    }

    /// Tight bounding box of a point cloud. `None` when `points` is empty.
    pub fn from_points<I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::from_origin_size(min, max - min))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Midpoint of the rectangle.
    #[inline]
    pub fn center(self) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.min(b.origin.x);
        let y0 = a.origin.y.min(b.origin.y);
        let x1 = (a.origin.x + a.size.x).max(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).max(b.origin.y + b.size.y);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Same rectangle shifted by `delta`.
    #[inline]
    pub fn translated(self, delta: Vec2) -> Rect {
        Rect::from_origin_size(self.origin + delta, self.size)
    }
}
