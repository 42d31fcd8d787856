use crate::constants::{FONT_SET, MEMORY_SIZE, PROGRAM_START};
use crate::error::Fault;

/// The CHIP-8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 8-bit registers (V0..VF)
///     - V0..VE are general purpose
///     - VF is also the carry/borrow/collision flag
/// - (i) a 16-bit index register used by memory-relative instructions
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - return addresses pushed by CALL and popped by RET
///
/// Timers
/// - 2 8-bit timers (delay & sound), counting down once per frame
///
/// ## Memory
/// - 4096 bytes; the font lives at 0x000 and programs load at 0x200
///
/// ## Input
/// - Execution halts until a key is written to the register in `awaiting_key`
#[derive(Clone, Debug)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub memory: [u8; MEMORY_SIZE],
    pub awaiting_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            memory,
            awaiting_key: None,
        }
    }

    /// Reads the byte at `address`.
    pub fn byte(&self, address: usize) -> Result<u8, Fault> {
        self.memory
            .get(address)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    /// Mutable access to the byte at `address`.
    pub fn byte_mut(&mut self, address: usize) -> Result<&mut u8, Fault> {
        self.memory
            .get_mut(address)
            .ok_or(Fault::MemoryOutOfBounds { address })
    }

    /// Reads the instruction at the program counter and moves past it.
    /// Memory is stored as bytes, so two subsequent bytes are combined big-endian.
    pub fn fetch(&mut self) -> Result<u16, Fault> {
        let address = self.pc as usize;
        let word = u16::from_be_bytes([self.byte(address)?, self.byte(address + 1)?]);
        self.pc = self.pc.wrapping_add(2);
        Ok(word)
    }

    /// Moves past the next instruction.
    pub fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Counts both timers down by one, stopping at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_installs_font_and_starts_at_program() {
        let state = State::new();
        assert_eq!(state.memory[..FONT_SET.len()], FONT_SET);
        assert!(state.memory[FONT_SET.len()..].iter().all(|&b| b == 0));
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.v, [0; 16]);
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_fetch_combines_bytes_and_advances() {
        let mut state = State::new();
        state.memory[0x200..0x202].copy_from_slice(&[0xAA, 0xBB]);
        assert_eq!(state.fetch(), Ok(0xAABB));
        assert_eq!(state.pc, 0x202);
    }

    #[test]
    fn test_fetch_past_end_of_memory_faults() {
        let mut state = State::new();
        state.pc = 0xFFF;
        assert_eq!(
            state.fetch(),
            Err(Fault::MemoryOutOfBounds { address: 0x1000 })
        );
    }

    #[test]
    fn test_timers_floor_at_zero() {
        let mut state = State::new();
        state.delay_timer = 1;
        for _ in 0..3 {
            state.tick_timers();
        }
        assert_eq!(state.delay_timer, 0);
        assert_eq!(state.sound_timer, 0);
    }
}
