#![no_std]

use embassy_stm32::Config;

pub mod drivers;
pub mod pins;
pub mod tasks;

/// Gap between two songs when cycling through the catalog.
pub const SONG_PAUSE_MS: u64 = 2_000;

pub fn get_system_config() -> Config {
    // the buzzer timer runs fine from the reset clock tree
    Config::default()
}
