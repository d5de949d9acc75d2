use anyhow::Context;
use skia_safe::{AlphaType, Canvas, Color, ColorType, ImageInfo, Surface, surfaces};

/// CPU-side skia surface one frame is painted into.
pub struct Frame {
    surface: Surface,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let surface = surfaces::raster_n32_premul((width as i32, height as i32))
            .with_context(|| format!("creating {}x{} raster surface", width, height))?;

        Ok(Self {
            surface,
            width,
            height,
            bytes: vec![0; (width * height * 4) as usize],
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn canvas(&mut self) -> &Canvas {
        self.surface.canvas()
    }

    pub fn pixel(&mut self, x: i32, y: i32) -> Option<Color> {
        self.surface.peek_pixels().map(|p| p.get_color((x, y)))
    }

    /// Writes the frame as `0x00RRGGBB` words, row-major.
    pub fn copy_to(&mut self, dst: &mut [u32]) -> anyhow::Result<()> {
        let info = ImageInfo::new(
            (self.width as i32, self.height as i32),
            ColorType::BGRA8888,
            AlphaType::Premul,
            None,
        );
        let row_bytes = self.width as usize * 4;

        if !self.surface.read_pixels(&info, &mut self.bytes, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {}x{} frame failed", self.width, self.height);
        }

        for (word, px) in dst.iter_mut().zip(self.bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([px[0], px[1], px[2], 0]);
        }
        Ok(())
    }
}
