use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Error};
use log::info;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use frame8_core::{Chip8, Config, FrameBuffer, Keypad, WrapMode};
use frame8_frontend::{Beeper, Screen};

use crate::keymap::keymap;

const TITLE: &str = "Frame-8";

/// Everything the host needs to start a session
pub struct Options {
    pub rom: PathBuf,
    pub config: Config,
    pub wrap: WrapMode,
    pub scale: u32,
    pub fps: u32,
}

pub fn run(options: Options) -> anyhow::Result<()> {
    // Get SDL2 context
    let sdl = sdl2::init()
        .map_err(Error::msg)
        .context("unable to initialise SDL2")?;
    let mut screen = Screen::new(&sdl, TITLE, options.scale)
        .map_err(Error::msg)
        .context("unable to open a window")?;
    let beeper = Beeper::new(&sdl)
        .map_err(Error::msg)
        .context("unable to open an audio device")?;
    let mut events = sdl.event_pump().map_err(Error::msg)?;

    let mut chip8 = Chip8::new(
        options.config,
        FrameBuffer::new(options.wrap),
        Keypad::new(),
        beeper,
    );

    // Load ROM
    let file = File::open(&options.rom)
        .with_context(|| format!("unable to open {}", options.rom.display()))?;
    chip8
        .load_rom(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", options.rom.display()))?;

    let frame_time = Duration::from_secs(1) / options.fps.max(1);
    let mut last_frame = Instant::now();

    // Whether or not the frame rate should be respected
    let mut fast_forward = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => {
                        chip8.input_mut().press(kc);
                        chip8.key_down(kc);
                    }
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.input_mut().release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        chip8.step().context("the interpreter halted")?;

        // Only redraw frames that changed
        if chip8.display_mut().take_dirty() {
            screen
                .present(chip8.display().pixels())
                .map_err(Error::msg)?;
        }

        // Handle timing
        let elapsed = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    info!("window closed, exiting");
    Ok(())
}
