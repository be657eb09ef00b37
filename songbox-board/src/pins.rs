#![allow(dead_code)]

use embassy_stm32::peripherals::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use songbox::audio::{AudioControl, AUDIO_COMMAND_DEPTH};

/////////////
//  Audio  //
/////////////

pub type BuzzerTimer = TIM15;
pub type BuzzerPin = PE6;

pub type SharedAudioControl = AudioControl<CriticalSectionRawMutex, AUDIO_COMMAND_DEPTH>;
