use crate::error::ChartResult;
use crate::render::{Renderer, SunburstFrame};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_slice_count: usize,
    pub last_label_count: usize,
    pub last_frame_empty: bool,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SunburstFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_slice_count = frame.slices.len();
        self.last_label_count = frame.label_count();
        self.last_frame_empty = frame.empty;
        self.frames_rendered += 1;
        Ok(())
    }
}
