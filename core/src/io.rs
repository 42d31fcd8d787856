//! The capabilities the interpreter borrows from its host.
//!
//! The core never renders, polls or plays anything itself; it toggles pixels,
//! asks whether a key is down and switches a tone on or off through these
//! traits.

/// A 1-bit pixel surface that sprites are XORed onto.
pub trait Display {
    /// Toggle the pixel at (`x`, `y`) and return whether it was lit before.
    ///
    /// Coordinates come straight from the registers plus the sprite offset, so
    /// they may lie outside the surface; what happens then is up to the
    /// implementation.
    fn set_pixel(&mut self, x: usize, y: usize) -> bool;

    /// Turn every pixel off.
    fn clear(&mut self);
}

/// The hexadecimal keypad.
pub trait Input {
    /// Whether key `0x0..=0xF` is currently held down.
    fn is_pressed(&self, key: u8) -> bool;
}

/// The buzzer. Both calls must be harmless when repeated.
pub trait Tone {
    fn play(&mut self);
    fn stop(&mut self);
}

/// A tone device that makes no sound
#[derive(Debug, Default)]
pub struct Mute;

impl Tone for Mute {
    fn play(&mut self) {}
    fn stop(&mut self) {}
}
