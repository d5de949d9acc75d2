use std::num::NonZeroU32;
use std::sync::Arc;
use anyhow::anyhow;
use skia_safe::Canvas;
use softbuffer::{Context, Surface};
use winit::window::Window;
use crate::core::Frame;

/// Paints into a [`Frame`] and pushes it to the window through softbuffer.
pub struct Presenter {
    pub window: Arc<Window>,
    _context: Context<Arc<Window>>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    frame: Frame,
}

impl Presenter {
    pub fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let context = Context::new(window.clone())
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        let size = window.inner_size();
        let mut presenter = Self {
            window,
            _context: context,
            surface,
            frame: Frame::new(size.width, size.height)?,
        };
        presenter.resize(size.width, size.height)?;
        Ok(presenter)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // 最小化时窗口大小为 0，保持原样
            return Ok(());
        };

        self.surface.resize(w, h).map_err(|e| anyhow!("softbuffer resize: {e}"))?;
        if self.frame.size() != (width, height) {
            self.frame = Frame::new(width, height)?;
        }
        log::debug!("Surface resized to {}x{}", width, height);
        Ok(())
    }

    pub fn draw<E, F>(&mut self, paint: F) -> anyhow::Result<()>
    where
        F: FnOnce(&Canvas) -> Result<(), E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        paint(self.frame.canvas())?;

        let mut buffer = self.surface.buffer_mut().map_err(|e| anyhow!("softbuffer buffer: {e}"))?;
        self.frame.copy_to(&mut buffer)?;
        self.window.pre_present_notify();
        buffer.present().map_err(|e| anyhow!("softbuffer present: {e}"))?;
        Ok(())
    }
}
