//! Presentation seam between the render loop and the terminal.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Where rendered frames go.
///
/// `present` may swap `fb` with an internal buffer; callers must re-render into
/// it before every call.
pub trait Surface: Send + 'static {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

/// Keeps the most recent frame in memory instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    last: Option<FrameBuffer>,
    frames: u64,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for MemorySurface {
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.last = Some(fb.clone());
        self.frames += 1;
        Ok(())
    }
}
