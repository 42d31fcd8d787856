use crate::opcode::Opcode;
use crate::operations::*;

/// Selects the Operation for an Opcode, or `None` if the word isn't an instruction
pub fn from_op(op: &dyn Opcode) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => cls,
        (0x0, 0x0, 0xE, 0xE) => ret,
        (0x1, ..) => jp,
        (0x2, ..) => call,
        (0x3, ..) => se_byte,
        (0x4, ..) => sne_byte,
        (0x5, ..) => se_reg,
        (0x6, ..) => ld_byte,
        (0x7, ..) => add_byte,
        (0x8, .., 0x0) => ld_reg,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => add_reg,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, ..) => sne_reg,
        (0xA, ..) => ld_i,
        (0xB, ..) => jp_v0,
        (0xC, ..) => rnd,
        (0xD, ..) => drw,
        (0xE, _, 0x9, 0xE) => skp,
        (0xE, _, 0xA, 0x1) => sknp,
        (0xF, _, 0x0, 0x7) => ld_vx_dt,
        (0xF, _, 0x0, 0xA) => ld_vx_k,
        (0xF, _, 0x1, 0x5) => ld_dt_vx,
        (0xF, _, 0x1, 0x8) => ld_st_vx,
        (0xF, _, 0x1, 0xE) => add_i,
        (0xF, _, 0x2, 0x9) => ld_f,
        (0xF, _, 0x3, 0x3) => ld_b,
        (0xF, _, 0x5, 0x5) => ld_mem_regs,
        (0xF, _, 0x6, 0x5) => ld_regs_mem,
        _ => return None,
    };
    Some(operation)
}
