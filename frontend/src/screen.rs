use log::debug;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use frame8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use frame8_core::Pixels;

/// # Screen
/// The Chip-8 display is composed of 64x32 black/white pixels.
/// The on/off state of these pixels is encoded as 1/0 respectively in a 2d array of 64x32 bytes.
/// The screen only gets a call to `present` when the interpreter's frame buffer has changed.
pub struct Screen {
    canvas: WindowCanvas,
}

impl Screen {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `title` the window title
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, title: &str, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                title,
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        debug!("opened {}x scaled window", scale);

        Ok(Screen { canvas })
    }

    /// Formats Chip-8 pixels for rendering as an SDL2 texture.
    ///
    /// An SDL2 texture is a 1D array of ints that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Flattening the 2D pixel rows into a 1D array by concatenating them
    /// - Triplicating each element of that 1D array to represent the RGB values of each pixel
    /// - Multiplying each value by 255 to convert from a binary state to 0-255 intensity
    ///
    /// # Arguments
    /// * `pixels` the interpreter's pixels
    fn pixels_to_sdl_texture(pixels: &Pixels) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|&pixel| std::iter::repeat(pixel * 255).take(3))
            .collect()
    }

    /// Formats the pixels as an SDL2 RGB24 texture and presents it.
    ///
    /// # Arguments
    /// * `pixels` the interpreter's pixels
    pub fn present(&mut self, pixels: &Pixels) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let rgb = Screen::pixels_to_sdl_texture(pixels);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (row, line) in rgb.chunks(DISPLAY_WIDTH * 3).enumerate() {
                buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_sdl_texture() {
        let mut pixels: Pixels = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
        pixels[0][0..2].copy_from_slice(&[0, 1]);
        pixels[1][0..2].copy_from_slice(&[1, 0]);
        let texture = Screen::pixels_to_sdl_texture(&pixels);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }
}
