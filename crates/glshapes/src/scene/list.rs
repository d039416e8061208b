use super::{DrawCmd, Renderer};

/// Recorded draw stream for a frame.
///
/// Commands are kept in submission order, which is paint order: later
/// commands draw over earlier ones. There is no depth sorting.
///
/// `submit()` is O(1) amortized; `clear()` keeps the allocation for reuse.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total vertex count across all recorded commands.
    pub fn vertex_count(&self) -> usize {
        self.items.iter().map(DrawCmd::vertex_count).sum()
    }
}

impl Renderer for DrawList {
    #[inline]
    fn submit(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}
