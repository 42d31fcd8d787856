use std::io;

use thiserror::Error;

/// Conditions that stop the interpreter for good.
///
/// A program that hits one of these is defective; there is no sensible way to
/// carry on, so `Chip8::step` keeps returning the same fault once it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("unknown instruction {word:#06X} at {address:#05X}")]
    UnknownInstruction { word: u16, address: u16 },

    #[error("return with an empty call stack at {address:#05X}")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: usize },
}

/// Errors raised while getting a program into memory
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("program is {size} bytes but only {capacity} bytes of program memory exist")]
    ProgramTooLarge { size: usize, capacity: usize },

    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Chip8Error> = std::result::Result<T, E>;
