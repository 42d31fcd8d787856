use frame8_core::constants::FONT_SET;
use frame8_core::{Chip8, Config, Fault, FrameBuffer, Keypad, Mute, Status};

type Machine = Chip8<FrameBuffer, Keypad, Mute>;

fn boot(program: &[u8], speed: usize) -> Machine {
    let config = Config {
        speed,
        seed: Some(0x8),
        ..Config::default()
    };
    let mut chip8 = Chip8::new(config, FrameBuffer::default(), Keypad::new(), Mute);
    chip8.load_program(program).unwrap();
    chip8
}

#[test]
fn load_then_add_across_two_frames() {
    // LD V0, 0x0A ; ADD V0, 0x05
    let mut chip8 = boot(&[0x60, 0x0A, 0x70, 0x05], 1);
    chip8.step().unwrap();
    assert_eq!(chip8.state().v[0x0], 0x0A);
    chip8.step().unwrap();
    assert_eq!(chip8.state().v[0x0], 0x0F);
    assert_eq!(chip8.state().pc, 0x204);
}

#[test]
fn running_off_the_program_halts_on_zeroed_memory() {
    let mut chip8 = boot(&[0x60, 0x0A, 0x70, 0x05], 10);
    let fault = Fault::UnknownInstruction {
        word: 0x0000,
        address: 0x204,
    };
    assert_eq!(chip8.step(), Err(fault));
    assert_eq!(chip8.state().v[0x0], 0x0F);
    assert_eq!(chip8.status(), Status::Halted(fault));
    assert_eq!(chip8.step(), Err(fault));
}

#[test]
fn clear_then_draw_a_single_pixel() {
    // CLS ; LD I, 0x208 ; DRW V0, V0, 1 ; JP 0x206 ; sprite 0x80
    let mut chip8 = boot(&[0x00, 0xE0, 0xA2, 0x08, 0xD0, 0x01, 0x12, 0x06, 0x80], 3);
    chip8.step().unwrap();

    assert!(chip8.display().is_lit(0, 0));
    assert_eq!(chip8.display().lit_count(), 1);
    assert_eq!(chip8.state().v[0xF], 0);
    assert!(chip8.display_mut().take_dirty());
    assert!(!chip8.display_mut().take_dirty());
}

#[test]
fn font_glyph_draws_from_low_memory() {
    // LD V0, 0x0 ; LD F, V0 ; DRW V1, V1, 5 ; JP 0x206
    let mut chip8 = boot(&[0x60, 0x00, 0xF0, 0x29, 0xD1, 0x15, 0x12, 0x06], 4);
    assert_eq!(chip8.state().memory[..FONT_SET.len()], FONT_SET);

    chip8.step().unwrap();
    assert_eq!(chip8.state().i, 0);
    // "0" is F0 90 90 90 F0
    assert_eq!(chip8.display().lit_count(), 4 + 2 + 2 + 2 + 4);
    assert!(chip8.display().is_lit(0, 0));
    assert!(!chip8.display().is_lit(1, 1));
    assert!(chip8.display().is_lit(3, 4));
}

#[test]
fn call_and_return_resume_after_the_call() {
    // CALL 0x206 ; LD V0, 0x01 ; JP 0x204 ; RET
    let mut chip8 = boot(&[0x22, 0x06, 0x60, 0x01, 0x12, 0x04, 0x00, 0xEE], 1);
    chip8.step().unwrap();
    assert_eq!(chip8.state().pc, 0x206);
    assert_eq!(chip8.state().stack, vec![0x202]);

    chip8.step().unwrap();
    assert_eq!(chip8.state().pc, 0x202);
    assert!(chip8.state().stack.is_empty());

    chip8.step().unwrap();
    assert_eq!(chip8.state().v[0x0], 0x01);
}

#[test]
fn return_with_empty_stack_halts() {
    let mut chip8 = boot(&[0x00, 0xEE], 1);
    let fault = Fault::StackUnderflow { address: 0x200 };
    assert_eq!(chip8.step(), Err(fault));
    assert_eq!(chip8.status(), Status::Halted(fault));
}

#[test]
fn key_wait_blocks_until_a_key_arrives() {
    // LD V3, K ; ADD V0, 0x01 ; JP 0x202
    let mut chip8 = boot(&[0xF3, 0x0A, 0x70, 0x01, 0x12, 0x02], 10);
    for _ in 0..5 {
        chip8.step().unwrap();
        assert_eq!(chip8.status(), Status::AwaitingKey(0x3));
        assert_eq!(chip8.state().pc, 0x202);
        assert_eq!(chip8.state().v[0x0], 0);
    }

    chip8.key_down(0x7);
    assert_eq!(chip8.status(), Status::Running);
    assert_eq!(chip8.state().v[0x3], 0x7);

    chip8.step().unwrap();
    assert!(chip8.state().v[0x0] > 0);
}

#[test]
fn keys_held_on_the_keypad_drive_skips() {
    // LD V1, 0xA ; SKP V1 ; LD V0, 0x01 ; JP 0x206
    let program = [0x61, 0x0A, 0xE1, 0x9E, 0x60, 0x01, 0x12, 0x06];

    let mut held = boot(&program, 4);
    held.input_mut().press(0xA);
    held.step().unwrap();
    assert_eq!(held.state().v[0x0], 0);

    let mut released = boot(&program, 4);
    released.input_mut().press(0xA);
    released.input_mut().release(0xA);
    released.step().unwrap();
    assert_eq!(released.state().v[0x0], 0x01);
}

#[test]
fn delay_timer_counts_down_once_per_frame_and_floors() {
    // LD V0, 0x03 ; LD DT, V0 ; JP 0x204
    let mut chip8 = boot(&[0x60, 0x03, 0xF0, 0x15, 0x12, 0x04], 2);
    chip8.step().unwrap();
    assert_eq!(chip8.state().delay_timer, 2);

    for _ in 0..10 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.state().delay_timer, 0);
}

#[test]
fn bcd_then_load_back_into_registers() {
    // LD V0, 0xFE ; LD I, 0x300 ; LD B, V0 ; LD V2, [I] ; JP 0x208
    let program = [0x60, 0xFE, 0xA3, 0x00, 0xF0, 0x33, 0xF2, 0x65, 0x12, 0x08];
    let mut chip8 = boot(&program, 5);
    chip8.step().unwrap();

    assert_eq!(chip8.state().memory[0x300..0x303], [2, 5, 4]);
    assert_eq!(chip8.state().v[..3], [2, 5, 4]);
    assert_eq!(chip8.state().i, 0x300);
}

#[test]
fn oversized_rom_is_rejected_before_running() {
    let mut chip8: Machine = Chip8::default();
    let rom = vec![0u8; 3585];
    assert!(chip8.load_rom(&mut rom.as_slice()).is_err());
    assert_eq!(chip8.state().memory[0x200], 0);
}
