use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use frame8_core::Tone;

const PITCH: f32 = 440.0;
const VOLUME: f32 = 0.15;

struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// A square wave on the default playback device, paused until the sound timer runs
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    is_beeping: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| {
            debug!("opened playback at {} Hz", spec.freq);
            SquareWave {
                phase_inc: PITCH / spec.freq as f32,
                phase: 0.0,
                volume: VOLUME,
            }
        })?;

        Ok(Beeper {
            device,
            is_beeping: false,
        })
    }
}

impl Tone for Beeper {
    fn play(&mut self) {
        if !self.is_beeping {
            self.device.resume();
            self.is_beeping = true;
        }
    }

    fn stop(&mut self) {
        if self.is_beeping {
            self.device.pause();
            self.is_beeping = false;
        }
    }
}
