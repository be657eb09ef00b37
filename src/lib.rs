#![cfg_attr(not(test), no_std)]

// must come first so every other module sees the logging macros
mod fmt;

pub mod audio;
pub mod drivers;
