use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::io::Display;

/// The pixels of a frame, indexed as `[y][x]`, 1 for lit and 0 for dark
pub type Pixels = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// What happens to sprite pixels that land outside the 64x32 surface.
/// The same rule applies to both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WrapMode {
    /// Off-surface pixels are dropped and never collide
    #[default]
    Clip,
    /// Coordinates wrap around the opposite edge
    Wrap,
}

/// # Frame buffer
/// The in-memory 64x32 monochrome display surface.
///
/// Tracks a dirty flag so the host only presents frames that changed.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: Pixels,
    wrap: WrapMode,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new(wrap: WrapMode) -> Self {
        FrameBuffer {
            pixels: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            wrap,
            dirty: true,
        }
    }

    pub fn pixels(&self) -> &Pixels {
        &self.pixels
    }

    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .map_or(false, |&pixel| pixel == 1)
    }

    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&pixel| pixel == 1)
            .count()
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn locate(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self.wrap {
            WrapMode::Wrap => Some((x % DISPLAY_WIDTH, y % DISPLAY_HEIGHT)),
            WrapMode::Clip if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT => Some((x, y)),
            WrapMode::Clip => None,
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(WrapMode::default())
    }
}

impl Display for FrameBuffer {
    fn set_pixel(&mut self, x: usize, y: usize) -> bool {
        let (x, y) = match self.locate(x, y) {
            Some(position) => position,
            None => return false,
        };
        let pixel = &mut self.pixels[y][x];
        let was_lit = *pixel == 1;
        *pixel ^= 1;
        self.dirty = true;
        was_lit
    }

    fn clear(&mut self) {
        self.pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        self.dirty = true;
    }
}
