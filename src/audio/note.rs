use core::iter::FusedIterator;

use embassy_time::Duration;

use super::AudioError;

/// Length of a whole beat. A note's duration code divides this value.
pub const WHOLE_BEAT_MS: u32 = 1000;
/// Silence inserted after every note, including the last one.
pub const NOTE_GAP_MS: u32 = 200;
/// Pitch value that marks a rest.
pub const REST: u16 = 0;

/// A single note resolved to what the output channel has to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Beat {
    Note { tone: u16, duration_ms: u32 },
    Rest(u32),
}

impl Beat {
    pub const fn duration_ms(&self) -> u32 {
        match self {
            Beat::Note { duration_ms, .. } => *duration_ms,
            Beat::Rest(duration_ms) => *duration_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Frequency in Hz, `REST` for silence.
    pub pitch: u16,
    /// 1 = whole beat, 2 = half, 4 = quarter, 8 = eighth.
    pub duration_code: u8,
}

impl Note {
    pub const fn new(pitch: u16, duration_code: u8) -> Self {
        Note { pitch, duration_code }
    }

    pub const fn is_rest(&self) -> bool {
        self.pitch == REST
    }

    /// Sounding time, `WHOLE_BEAT_MS / duration_code` rounded down.
    pub const fn sound_ms(&self) -> u32 {
        WHOLE_BEAT_MS / self.duration_code as u32
    }

    pub const fn beat(&self) -> Beat {
        if self.is_rest() {
            Beat::Rest(self.sound_ms())
        } else {
            Beat::Note {
                tone: self.pitch,
                duration_ms: self.sound_ms(),
            }
        }
    }
}

/// An ordered run of notes kept as two parallel slices.
///
/// Both slices always have the same length and no duration code is zero.
/// `Melody::new` enforces this at compile time for `const` data,
/// `Melody::try_new` reports it at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Melody<'a> {
    title: &'a str,
    pitches: &'a [u16],
    duration_codes: &'a [u8],
}

impl<'a> Melody<'a> {
    pub const fn new(title: &'a str, pitches: &'a [u16], duration_codes: &'a [u8]) -> Self {
        assert!(
            pitches.len() == duration_codes.len(),
            "melody pitch and duration tables differ in length"
        );

        let mut i = 0;
        while i < duration_codes.len() {
            assert!(duration_codes[i] != 0, "melody has a zero duration code");
            i += 1;
        }

        Melody {
            title,
            pitches,
            duration_codes,
        }
    }

    pub fn try_new(
        title: &'a str,
        pitches: &'a [u16],
        duration_codes: &'a [u8],
    ) -> Result<Self, AudioError> {
        if pitches.len() != duration_codes.len() {
            return Err(AudioError::MismatchedLengths {
                pitches: pitches.len(),
                durations: duration_codes.len(),
            });
        }

        if let Some(index) = duration_codes.iter().position(|code| *code == 0) {
            return Err(AudioError::InvalidDurationCode { index });
        }

        Ok(Melody {
            title,
            pitches,
            duration_codes,
        })
    }

    pub const fn title(&self) -> &'a str {
        self.title
    }

    pub const fn len(&self) -> usize {
        self.pitches.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub const fn pitches(&self) -> &'a [u16] {
        self.pitches
    }

    pub const fn duration_codes(&self) -> &'a [u8] {
        self.duration_codes
    }

    pub fn note(&self, index: usize) -> Option<Note> {
        let pitch = *self.pitches.get(index)?;
        let duration_code = *self.duration_codes.get(index)?;
        Some(Note::new(pitch, duration_code))
    }

    pub fn notes(&self) -> Notes<'a> {
        Notes {
            melody: *self,
            index: 0,
        }
    }

    /// Wall clock time of a full playback, gaps included.
    pub fn total_duration(&self) -> Duration {
        let sounding: u64 = self.notes().map(|note| note.sound_ms() as u64).sum();
        let gaps = NOTE_GAP_MS as u64 * self.len() as u64;
        Duration::from_millis(sounding + gaps)
    }
}

pub struct Notes<'a> {
    melody: Melody<'a>,
    index: usize,
}

impl<'a> Iterator for Notes<'a> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        let note = self.melody.note(self.index)?;
        self.index += 1;
        Some(note)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.melody.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Notes<'a> {}
impl<'a> FusedIterator for Notes<'a> {}
