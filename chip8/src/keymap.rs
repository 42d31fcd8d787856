use sdl2::keyboard::Keycode;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// The keypad layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    const LAYOUT: [Keycode; 16] = [
        Keycode::X,
        Keycode::Num1,
        Keycode::Num2,
        Keycode::Num3,
        Keycode::Q,
        Keycode::W,
        Keycode::E,
        Keycode::A,
        Keycode::S,
        Keycode::D,
        Keycode::Z,
        Keycode::C,
        Keycode::Num4,
        Keycode::R,
        Keycode::F,
        Keycode::V,
    ];
    LAYOUT
        .iter()
        .position(|&mapped| mapped == key)
        .map(|index| index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keymap_covers_every_key_once() {
        let rows = [
            [Keycode::Num1, Keycode::Num2, Keycode::Num3, Keycode::Num4],
            [Keycode::Q, Keycode::W, Keycode::E, Keycode::R],
            [Keycode::A, Keycode::S, Keycode::D, Keycode::F],
            [Keycode::Z, Keycode::X, Keycode::C, Keycode::V],
        ];
        let expected = [
            [0x1, 0x2, 0x3, 0xC],
            [0x4, 0x5, 0x6, 0xD],
            [0x7, 0x8, 0x9, 0xE],
            [0xA, 0x0, 0xB, 0xF],
        ];
        for (keys, values) in rows.iter().zip(expected.iter()) {
            for (&key, &value) in keys.iter().zip(values.iter()) {
                assert_eq!(keymap(key), Some(value));
            }
        }
    }

    #[test]
    fn test_keymap_ignores_unmapped_keys() {
        assert_eq!(keymap(Keycode::Escape), None);
        assert_eq!(keymap(Keycode::Space), None);
        assert_eq!(keymap(Keycode::Num5), None);
    }
}
