use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embedded_hal_async::delay::DelayNs;

use crate::drivers::audio::PlayTone;
use super::{AudioControl, AudioError};
use super::note::{Beat, Melody, NOTE_GAP_MS};
use super::songs::{SongCatalog, SONG_CATALOG};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Playback {
    Completed,
    Stopped { notes_played: usize },
}

/// Plays melodies note by note on a tone output, one at a time.
///
/// The player owns the output channel for its whole life and never keeps
/// anything between songs, so replaying a selection replays it identically.
pub struct TonePlayer<'a, D: PlayTone, T: DelayNs> {
    audio_driver: D,
    delay: T,
    catalog: &'a SongCatalog<'a>,
}

impl<D: PlayTone, T: DelayNs> TonePlayer<'static, D, T> {
    pub fn new(audio_driver: D, delay: T) -> Self {
        TonePlayer::with_catalog(audio_driver, delay, &SONG_CATALOG)
    }
}

impl<'a, D: PlayTone, T: DelayNs> TonePlayer<'a, D, T> {
    pub fn with_catalog(audio_driver: D, delay: T, catalog: &'a SongCatalog<'a>) -> Self {
        TonePlayer {
            audio_driver,
            delay,
            catalog,
        }
    }

    pub fn catalog(&self) -> &'a SongCatalog<'a> {
        self.catalog
    }

    pub fn release(self) -> (D, T) {
        (self.audio_driver, self.delay)
    }

    /// Checks that the output can produce every pitch of `melody`.
    pub fn check_melody(&self, melody: &Melody<'_>) -> Result<(), AudioError> {
        for (index, note) in melody.notes().enumerate() {
            if !note.is_rest() && !self.audio_driver.can_play_tone(note.pitch) {
                return Err(AudioError::UnplayablePitch {
                    index,
                    pitch: note.pitch,
                });
            }
        }

        Ok(())
    }

    /// Plays catalog entry `selection` (1-based) to completion.
    ///
    /// An unknown selection plays nothing and returns
    /// `AudioError::InvalidSelection`. Its `Display` text is the operator
    /// diagnostic; this method does not print it, the caller does, once.
    pub async fn play_song(&mut self, selection: u8) -> Result<(), AudioError> {
        let melody = self.select(selection)?;
        self.play_melody(melody).await
    }

    /// Plays every note of `melody`, then returns.
    ///
    /// The whole melody is refused with `AudioError::UnplayablePitch` if any
    /// pitch is outside the output's range; nothing sounds in that case.
    pub async fn play_melody(&mut self, melody: &Melody<'_>) -> Result<(), AudioError> {
        self.check_melody(melody)?;

        debug!("playing {} ({} notes)", melody.title(), melody.len());
        for note in melody.notes() {
            self.play_beat(note.beat()).await;
        }

        Ok(())
    }

    /// Plays raw parallel pitch and duration tables.
    pub async fn play_notes(&mut self, pitches: &[u16], duration_codes: &[u8]) -> Result<(), AudioError> {
        let melody = Melody::try_new("", pitches, duration_codes)?;
        self.play_melody(&melody).await
    }

    /// Like `play_melody`, but gives up before the next note once `stop` is
    /// signaled. The signal is always cleared on return, so a stop raised
    /// during the last note does not carry over to the next melody.
    pub async fn play_melody_until<M: RawMutex>(
        &mut self,
        melody: &Melody<'_>,
        stop: &Signal<M, ()>,
    ) -> Result<Playback, AudioError> {
        self.check_melody(melody)?;

        for (notes_played, note) in melody.notes().enumerate() {
            if stop.signaled() {
                stop.reset();
                self.audio_driver.stop_tone();
                info!("stopped {} after {} notes", melody.title(), notes_played);
                return Ok(Playback::Stopped { notes_played });
            }

            self.play_beat(note.beat()).await;
        }

        stop.reset();
        Ok(Playback::Completed)
    }

    /// Waits for the next queued selection and plays it.
    pub async fn serve<M: RawMutex, const N: usize>(
        &mut self,
        control: &AudioControl<M, N>,
    ) -> Result<Playback, AudioError> {
        let selection = control.next_selection().await;

        // a stop raised while idle has nothing left to cut short
        control.stop_signal().reset();

        let melody = self.select(selection)?;
        self.play_melody_until(melody, control.stop_signal()).await
    }

    fn select(&self, selection: u8) -> Result<&'a Melody<'a>, AudioError> {
        match self.catalog.lookup(selection.into()) {
            Some(melody) => Ok(melody),
            None => {
                let song_count = self.catalog.len().min(u8::MAX as usize) as u8;
                debug!("no song {} in a catalog of {}", selection, song_count);
                Err(AudioError::InvalidSelection {
                    selection,
                    song_count,
                })
            }
        }
    }

    async fn play_beat(&mut self, beat: Beat) {
        match beat {
            Beat::Note { tone, duration_ms } => {
                self.audio_driver.play_tone(tone);
                self.delay.delay_ms(duration_ms).await;
            }
            Beat::Rest(duration_ms) => {
                self.audio_driver.stop_tone();
                self.delay.delay_ms(duration_ms).await;
            }
        }

        self.audio_driver.stop_tone();
        self.delay.delay_ms(NOTE_GAP_MS).await;
    }
}
