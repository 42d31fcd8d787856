use crate::constants::DEFAULT_SPEED;

/// Historical behaviors that differ between CHIP-8 interpreters.
///
/// The defaults reproduce the classic interpreter this crate models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quirks {
    /// 8XYE stores the shifted-out bit as 0/1 instead of the raw 0x80 mask
    pub normalize_shift_flag: bool,
    /// FX55/FX65 leave I pointing past the last register transferred
    pub increment_index_on_load_store: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Instructions executed per frame
    pub speed: usize,
    pub quirks: Quirks,
    /// Seed for CXKK; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            speed: DEFAULT_SPEED,
            quirks: Quirks::default(),
            seed: None,
        }
    }
}
