#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use embedded_hal_async::delay::DelayNs;
use songbox::{audio::tone_player::TonePlayer, drivers::audio::PlayTone};

pub const BUZZER_MIN_FREQ: u16 = 35;
pub const BUZZER_MAX_FREQ: u16 = 7000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tone(u16),
    Stop,
    Delay(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct FakeBuzzer {
    events: EventLog,
}

impl PlayTone for FakeBuzzer {
    fn play_tone(&mut self, tone: u16) {
        let event = if tone == 0 { Event::Stop } else { Event::Tone(tone) };
        self.events.borrow_mut().push(event);
    }

    fn can_play_tone(&self, tone: u16) -> bool {
        BUZZER_MIN_FREQ < tone && tone < BUZZER_MAX_FREQ
    }
}

/// Returns immediately, recording how long it was asked to wait.
pub struct FakeDelay {
    events: EventLog,
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.events.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.events.borrow_mut().push(Event::Delay(ms));
    }
}

pub fn fake_player() -> (TonePlayer<'static, FakeBuzzer, FakeDelay>, EventLog) {
    let events = EventLog::default();
    let buzzer = FakeBuzzer { events: events.clone() };
    let delay = FakeDelay { events: events.clone() };
    (TonePlayer::new(buzzer, delay), events)
}

pub fn total_delay_ms(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|event| match event {
            Event::Delay(ms) => *ms as u64,
            _ => 0,
        })
        .sum()
}

pub fn tones(events: &[Event]) -> Vec<u16> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Tone(tone) => Some(*tone),
            _ => None,
        })
        .collect()
}
