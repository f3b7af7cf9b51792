mod frame;
mod null_renderer;
mod primitives;

pub use frame::{SliceFrame, SliceLabel, SunburstFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{CATEGORY10, Color, OrdinalColorScale};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SunburstFrame` so
/// drawing code remains isolated from hierarchy, partition and filter logic.
pub trait Renderer {
    fn render(&mut self, frame: &SunburstFrame) -> ChartResult<()>;
}
