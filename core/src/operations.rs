use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::Quirks;
use crate::constants::{FONT_GLYPH_BYTES, SPRITE_WIDTH};
use crate::error::Fault;
use crate::io::{Display, Input};
use crate::opcode::Opcode;
use crate::state::State;

/// Everything an operation may touch besides the machine state
pub struct Peripherals<'a> {
    pub display: &'a mut dyn Display,
    pub input: &'a dyn Input,
    pub rng: &'a mut StdRng,
    pub quirks: Quirks,
}

/// Executes one decoded instruction. The program counter already points past it.
pub type Operation = fn(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault>;

/// clear
pub fn cls(_op: &dyn Opcode, _state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    io.display.clear();
    Ok(())
}

/// PC = STACK.pop()
pub fn ret(_op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.pc = state.stack.pop().ok_or(Fault::StackUnderflow {
        address: state.pc.wrapping_sub(2),
    })?;
    Ok(())
}

/// PC = addr
pub fn jp(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.stack.push(state.pc);
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn se_byte(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    if state.v[op.x() as usize] == op.byte() {
        state.skip();
    }
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn sne_byte(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    if state.v[op.x() as usize] != op.byte() {
        state.skip();
    }
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn se_reg(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.skip();
    }
    Ok(())
}

/// Vx = kk
pub fn ld_byte(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] = op.byte();
    Ok(())
}

/// Vx += kk
/// Overflow wraps and is dropped; VF is untouched
pub fn add_byte(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let x = op.x() as usize;
    state.v[x] = state.v[x].wrapping_add(op.byte());
    Ok(())
}

/// Vx = Vy
pub fn ld_reg(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.v[op.y() as usize];
    Ok(())
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] |= state.v[op.y() as usize];
    Ok(())
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] &= state.v[op.y() as usize];
    Ok(())
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] ^= state.v[op.y() as usize];
    Ok(())
}

/// Writes the flag, then the result. With x = F the result is what remains in VF.
fn write_with_flag(state: &mut State, x: u8, result: u8, flag: u8) {
    state.v[0xF] = flag;
    state.v[x as usize] = result;
}

/// Vx += Vy; VF = carry
pub fn add_reg(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let (sum, carry) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    write_with_flag(state, op.x(), sum, carry as u8);
    Ok(())
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    write_with_flag(state, op.x(), vx.wrapping_sub(vy), (vx > vy) as u8);
    Ok(())
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    write_with_flag(state, op.x(), vx >> 1, vx & 0x01);
    Ok(())
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    write_with_flag(state, op.x(), vy.wrapping_sub(vx), (vy > vx) as u8);
    Ok(())
}

/// Vx <<= 1; VF = the bit shifted out, left in place (0x80) unless normalized
pub fn shl(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    let vx = state.v[op.x() as usize];
    let flag = if io.quirks.normalize_shift_flag {
        vx >> 7
    } else {
        vx & 0x80
    };
    write_with_flag(state, op.x(), vx << 1, flag);
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn sne_reg(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.skip();
    }
    Ok(())
}

/// I = addr
pub fn ld_i(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.i = op.addr();
    Ok(())
}

/// PC = V0 + addr
pub fn jp_v0(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.pc = u16::from(state.v[0x0]) + op.addr();
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rnd(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] = io.rng.gen::<u8>() & op.byte();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy height=n)
/// XORs the sprite at memory I..I+n onto the display at (Vx, Vy).
/// VF is cleared first and set if any lit pixel was turned off.
pub fn drw(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    state.v[0xF] = 0x0;
    let x = state.v[op.x() as usize] as usize;
    let y = state.v[op.y() as usize] as usize;

    let mut collision = false;
    for row in 0..op.n() as usize {
        let sprite = state.byte(state.i as usize + row)?;
        for col in 0..SPRITE_WIDTH {
            if sprite & (0x80 >> col) != 0 && io.display.set_pixel(x + col, y + row) {
                collision = true;
            }
        }
    }

    if collision {
        state.v[0xF] = 0x1;
    }
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skp(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    if io.input.is_pressed(state.v[op.x() as usize]) {
        state.skip();
    }
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn sknp(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    if !io.input.is_pressed(state.v[op.x() as usize]) {
        state.skip();
    }
    Ok(())
}

/// Vx = DT
pub fn ld_vx_dt(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.v[op.x() as usize] = state.delay_timer;
    Ok(())
}

/// await keypress for Vx
pub fn ld_vx_k(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    debug!("waiting for a key press into V{:X}", op.x());
    state.awaiting_key = Some(op.x());
    Ok(())
}

/// DT = Vx
pub fn ld_dt_vx(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.delay_timer = state.v[op.x() as usize];
    Ok(())
}

/// ST = Vx
pub fn ld_st_vx(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.sound_timer = state.v[op.x() as usize];
    Ok(())
}

/// I += Vx
pub fn add_i(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x() as usize]));
    Ok(())
}

/// I = Vx * 5
/// Points I at the font glyph for the digit in Vx
pub fn ld_f(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    state.i = u16::from(state.v[op.x() as usize]) * FONT_GLYPH_BYTES;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
pub fn ld_b(op: &dyn Opcode, state: &mut State, _io: &mut Peripherals) -> Result<(), Fault> {
    let value = state.v[op.x() as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    let start = state.i as usize;
    for (offset, digit) in digits.iter().enumerate() {
        *state.byte_mut(start + offset)? = *digit;
    }
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn ld_mem_regs(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    let start = state.i as usize;
    for register in 0..=op.x() as usize {
        let value = state.v[register];
        *state.byte_mut(start + register)? = value;
    }
    advance_index(op, state, io.quirks);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn ld_regs_mem(op: &dyn Opcode, state: &mut State, io: &mut Peripherals) -> Result<(), Fault> {
    let start = state.i as usize;
    for register in 0..=op.x() as usize {
        state.v[register] = state.byte(start + register)?;
    }
    advance_index(op, state, io.quirks);
    Ok(())
}

fn advance_index(op: &dyn Opcode, state: &mut State, quirks: Quirks) {
    if quirks.increment_index_on_load_store {
        state.i = state.i.wrapping_add(u16::from(op.x()) + 1);
    }
}
