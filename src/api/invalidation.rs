use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::render::Renderer;

use super::SunburstChart;

/// Ordered redraw levels requested by chart mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Hover highlight changed; geometry and selection are unchanged.
    Cursor,
    /// Filter selection changed; slice classes must be re-applied.
    Selection,
    /// Data or layout configuration changed; the partition is recomputed.
    Layout,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

impl<R: Renderer> SunburstChart<R> {
    /// Redraw level accumulated since the last successful render.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.core.runtime.pending_invalidation
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        if level == InvalidationLevel::Layout {
            self.core.layout.clear_partition_cache();
        }
        let merged = self.core.runtime.pending_invalidation.max(level);
        trace!(?level, ?merged, "invalidate chart");
        self.core.runtime.pending_invalidation = merged;
    }

    pub(super) fn clear_pending_invalidation(&mut self) {
        self.core.runtime.pending_invalidation = InvalidationLevel::None;
    }
}

#[cfg(test)]
mod tests {
    use super::InvalidationLevel;

    #[test]
    fn invalidation_level_max_keeps_highest() {
        assert_eq!(
            InvalidationLevel::None.max(InvalidationLevel::Cursor),
            InvalidationLevel::Cursor
        );
        assert_eq!(
            InvalidationLevel::Layout.max(InvalidationLevel::Selection),
            InvalidationLevel::Layout
        );
        assert_eq!(
            InvalidationLevel::Selection.max(InvalidationLevel::Cursor),
            InvalidationLevel::Selection
        );
    }
}
