/// Straight-alpha RGBA color, 8 bits per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Default shape color: opaque blue.
    pub const DEFAULT: Color = Color::rgba(0, 0, 0xff, 0xff);

    pub const WHITE: Color = Color::rgba(0xff, 0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0xff);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    /// Components divided by 255, in `[r, g, b, a]` order.
    #[inline]
    pub fn normalized(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 0xff
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Color::DEFAULT
    }
}

/// Replicates the normalized `color` once per vertex.
///
/// The result always holds `4 * vertex_count` floats.
pub fn vertex_colors(color: Color, vertex_count: usize) -> Vec<f32> {
    let n = color.normalized();
    let mut out = Vec::with_capacity(vertex_count * 4);
    for _ in 0..vertex_count {
        out.extend_from_slice(&n);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_divides_by_255() {
        let n = Color::rgba(170, 170, 170, 255).normalized();
        for c in &n[..3] {
            assert!((c - 0.6667).abs() < 1e-4, "got {c}");
        }
        assert_eq!(n[3], 1.0);
    }

    #[test]
    fn default_is_opaque_blue() {
        assert_eq!(Color::default().normalized(), [0.0, 0.0, 1.0, 1.0]);
        assert!(Color::default().is_opaque());
    }

    #[test]
    fn vertex_colors_one_entry_per_vertex() {
        let buf = vertex_colors(Color::rgb(255, 0, 0), 4);
        assert_eq!(buf.len(), 16);
        assert!(buf.chunks(4).all(|c| c == [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn vertex_colors_empty_geometry() {
        assert!(vertex_colors(Color::WHITE, 0).is_empty());
    }
}
