use std::io::Read;

use log::{debug, error, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{PROGRAM_CAPACITY, PROGRAM_START};
use crate::error::{Chip8Error, Fault, Result};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::from_op;
use crate::io::{Display, Input, Mute, Tone};
use crate::keypad::Keypad;
use crate::operations::Peripherals;
use crate::state::State;

/// Where the interpreter is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    /// Blocked on FX0A until a key is delivered into this register
    AwaitingKey(u8),
    /// Stopped by a fatal fault; `step` keeps returning it
    Halted(Fault),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - the machine `state`
///  - the display, input and tone collaborators it drives
///  - the fault that halted it, if any
///
/// Supplies interfaces for:
/// - loading programs
/// - delivering key presses to a pending FX0A
/// - advancing one frame at a time
/// - inspecting its state and collaborators
pub struct Chip8<D: Display, I: Input, T: Tone> {
    state: State,
    display: D,
    input: I,
    tone: T,
    config: Config,
    rng: StdRng,
    fault: Option<Fault>,
}

impl<D: Display, I: Input, T: Tone> Chip8<D, I, T> {
    pub fn new(config: Config, display: D, input: I, tone: T) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Chip8 {
            state: State::new(),
            display,
            input,
            tone,
            config,
            rng,
            fault: None,
        }
    }

    /// Copy a program image into memory at 0x200
    ///
    /// # Arguments
    /// * `program` the raw bytes of the program
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > PROGRAM_CAPACITY {
            return Err(Chip8Error::ProgramTooLarge {
                size: program.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        info!("loaded {} byte program at {:#05X}", program.len(), PROGRAM_START);
        Ok(())
    }

    /// Load a program from a source file
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Deliver a key-down event
    /// - satisfies a pending FX0A by writing `key` into its register
    /// - otherwise does nothing; held keys are the `Input`'s business
    ///
    /// # Arguments
    /// * `key` the hexadecimal key that went down
    pub fn key_down(&mut self, key: u8) {
        if key > 0xF {
            warn!("ignoring key {:#04X}, the keypad only has keys 0x0-0xF", key);
            return;
        }
        if let Some(register) = self.state.awaiting_key.take() {
            debug!("key {:X} delivered into V{:X}", key, register);
            self.state.v[register as usize] = key;
        }
    }

    /// Advances the machine by one frame
    /// - runs up to `speed` instructions, stopping early if one waits for a key
    /// - counts the timers down unless waiting for a key
    /// - switches the tone on or off to match the sound timer
    pub fn step(&mut self) -> std::result::Result<(), Fault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        for _ in 0..self.config.speed {
            if self.state.awaiting_key.is_some() {
                break;
            }
            if let Err(fault) = self.cycle() {
                error!("halting: {}", fault);
                self.fault = Some(fault);
                self.tone.stop();
                return Err(fault);
            }
        }

        if self.state.awaiting_key.is_none() {
            self.state.tick_timers();
        }

        if self.state.sound_timer > 0 {
            self.tone.play();
        } else {
            self.tone.stop();
        }
        Ok(())
    }

    /// Fetches, decodes and executes a single instruction.
    fn cycle(&mut self) -> std::result::Result<(), Fault> {
        let address = self.state.pc;
        let op = self.state.fetch()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            address
        );
        let operation = from_op(&op).ok_or(Fault::UnknownInstruction { word: op, address })?;
        let mut io = Peripherals {
            display: &mut self.display,
            input: &self.input,
            rng: &mut self.rng,
            quirks: self.config.quirks,
        };
        operation(&op, &mut self.state, &mut io)
    }

    pub fn status(&self) -> Status {
        match (self.fault, self.state.awaiting_key) {
            (Some(fault), _) => Status::Halted(fault),
            (None, Some(register)) => Status::AwaitingKey(register),
            (None, None) => Status::Running,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }
}

impl Default for Chip8<FrameBuffer, Keypad, Mute> {
    fn default() -> Self {
        Self::new(Config::default(), FrameBuffer::default(), Keypad::new(), Mute)
    }
}
