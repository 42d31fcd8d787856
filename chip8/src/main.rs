//! Runs a CHIP-8 ROM in an SDL2 window.
//!
//! ```text
//! frame8 roms/PONG --speed 12 --scale 12
//! ```
//!
//! The keypad sits on the left four columns of the keyboard (see `keymap`).
//! Hold Space to run unthrottled and press Escape to quit. Set `RUST_LOG` to
//! see what the interpreter is doing; `RUST_LOG=trace` logs every instruction.

use std::path::PathBuf;

use clap::Parser;

use frame8_core::constants::{DEFAULT_SPEED, FRAME_RATE};
use frame8_core::{Config, Quirks, WrapMode};

use crate::run::{run, Options};

mod keymap;
mod run;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Instructions executed per frame
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    speed: usize,

    /// Size multiplier for each pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Frames per second; timers count down once per frame
    #[arg(long, default_value_t = FRAME_RATE)]
    fps: u32,

    /// Wrap sprites around the screen edges instead of clipping them
    #[arg(long)]
    wrap: bool,

    /// Make 8xyE store 0 or 1 in VF rather than the raw high bit
    #[arg(long)]
    normalize_shift_flag: bool,

    /// Make Fx55 and Fx65 advance I past the registers they touch
    #[arg(long)]
    increment_index: bool,

    /// Seed for Cxkk, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        speed: args.speed,
        quirks: Quirks {
            normalize_shift_flag: args.normalize_shift_flag,
            increment_index_on_load_store: args.increment_index,
        },
        seed: args.seed,
    };
    let wrap = if args.wrap {
        WrapMode::Wrap
    } else {
        WrapMode::Clip
    };

    run(Options {
        rom: args.rom,
        config,
        wrap,
        scale: args.scale,
        fps: args.fps,
    })
}
