pub use chip8::{Chip8, Status};
pub use config::{Config, Quirks};
pub use error::{Chip8Error, Fault};
pub use frame_buffer::{FrameBuffer, Pixels, WrapMode};
pub use io::{Display, Input, Mute, Tone};
pub use keypad::Keypad;
pub use state::State;

mod chip8;
mod config;
pub mod constants;
pub mod error;
mod frame_buffer;
mod instruction;
pub mod io;
mod keypad;
mod opcode;
mod operations;
mod state;
