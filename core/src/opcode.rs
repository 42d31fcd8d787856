/// # Opcodes
///
/// Every instruction is one big-endian 16-bit word. Which operation it is
/// depends on:
/// - `(n, _, _, _)` the family; every word has one
/// - `(_, _, _, n)` the operation within the ALU (8) family
/// - `(_, _, n, n)` the operation within the key (E) and misc (F) families
/// - `(_, n, n, n)` a fixed operation with no operands (CLS, RET)
///
/// The remaining nibbles are operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an immediate byte
/// - `(_, n, _, _)` register Vx, or the range V0..=Vx
/// - `(_, _, n, _)` register Vy
/// - `(_, _, _, n)` a sprite height
pub trait Opcode {
    /// The whole instruction word.
    fn word(&self) -> u16;

    /// The four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    /// `[f___]`
    fn family(&self) -> u8 {
        (self.word() >> 12) as u8
    }

    /// `[_x__]`
    fn x(&self) -> u8 {
        ((self.word() & 0x0F00) >> 8) as u8
    }

    /// `[__y_]`
    fn y(&self) -> u8 {
        ((self.word() & 0x00F0) >> 4) as u8
    }

    /// `[___n]`
    fn n(&self) -> u8 {
        (self.word() & 0x000F) as u8
    }

    /// `[__kk]`
    fn byte(&self) -> u8 {
        (self.word() & 0x00FF) as u8
    }

    /// `[_nnn]`
    fn addr(&self) -> u16 {
        self.word() & 0x0FFF
    }
}

impl Opcode for u16 {
    fn word(&self) -> u16 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OP: u16 = 0xD1E5;

    #[test]
    fn test_nibbles_split_most_significant_first() {
        assert_eq!(OP.nibbles(), (0xD, 0x1, 0xE, 0x5));
    }

    #[test]
    fn test_register_operands() {
        assert_eq!(OP.x(), 0x1);
        assert_eq!(OP.y(), 0xE);
    }

    #[test]
    fn test_immediates() {
        assert_eq!(OP.n(), 0x5);
        assert_eq!(OP.byte(), 0xE5);
        assert_eq!(OP.addr(), 0x01E5);
    }

    #[test]
    fn test_family_of_high_word() {
        assert_eq!(0xF065u16.family(), 0xF);
        assert_eq!(0x00E0u16.family(), 0x0);
    }
}
