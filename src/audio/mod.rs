use core::fmt;

use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel, signal::Signal};

pub mod note;
pub mod songs;
pub mod tone_player;

/// Depth of the song selection queue feeding the audio task.
pub const AUDIO_COMMAND_DEPTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    InvalidSelection { selection: u8, song_count: u8 },
    MismatchedLengths { pitches: usize, durations: usize },
    InvalidDurationCode { index: usize },
    UnplayablePitch { index: usize, pitch: u16 },
    QueueFull,
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::InvalidSelection { song_count, .. } => {
                f.write_str("Invalid selection. Please enter ")?;
                write_selection_list(f, *song_count)?;
                f.write_str(".")
            }
            AudioError::MismatchedLengths { pitches, durations } => write!(
                f,
                "melody has {} pitches but {} duration codes",
                pitches, durations
            ),
            AudioError::InvalidDurationCode { index } => {
                write!(f, "note {} has a zero duration code", index)
            }
            AudioError::UnplayablePitch { index, pitch } => {
                write!(f, "note {} asks for {} Hz, outside the buzzer range", index, pitch)
            }
            AudioError::QueueFull => f.write_str("audio command queue is full"),
        }
    }
}

// "1", "1 or 2", "1, 2, or 3", ...
fn write_selection_list(f: &mut fmt::Formatter<'_>, song_count: u8) -> fmt::Result {
    match song_count {
        0 => f.write_str("nothing, no songs are loaded"),
        1 => f.write_str("1"),
        2 => f.write_str("1 or 2"),
        n => {
            for selection in 1..n {
                write!(f, "{}, ", selection)?;
            }
            write!(f, "or {}", n)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    PlaySong(u8),
    Stop,
}

/// Mailbox between the tasks requesting songs and the task owning the buzzer.
///
/// Selections are queued in order. `Stop` bypasses the queue and is observed
/// by the player between notes.
pub struct AudioControl<M: RawMutex, const N: usize = AUDIO_COMMAND_DEPTH> {
    selections: Channel<M, u8, N>,
    stop: Signal<M, ()>,
}

impl<M: RawMutex, const N: usize> AudioControl<M, N> {
    pub const fn new() -> Self {
        AudioControl {
            selections: Channel::new(),
            stop: Signal::new(),
        }
    }

    pub fn request(&self, command: AudioCommand) -> Result<(), AudioError> {
        match command {
            AudioCommand::PlaySong(selection) => self
                .selections
                .try_send(selection)
                .map_err(|_| AudioError::QueueFull),
            AudioCommand::Stop => {
                while self.selections.try_receive().is_ok() {}
                self.stop.signal(());
                Ok(())
            }
        }
    }

    pub async fn next_selection(&self) -> u8 {
        self.selections.receive().await
    }

    pub fn stop_signal(&self) -> &Signal<M, ()> {
        &self.stop
    }
}

impl<M: RawMutex, const N: usize> Default for AudioControl<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    #[test]
    fn invalid_selection_message() {
        let err = AudioError::InvalidSelection { selection: 4, song_count: 3 };
        assert_eq!(err.to_string(), "Invalid selection. Please enter 1, 2, or 3.");

        let err = AudioError::InvalidSelection { selection: 9, song_count: 2 };
        assert_eq!(err.to_string(), "Invalid selection. Please enter 1 or 2.");

        let err = AudioError::InvalidSelection { selection: 9, song_count: 5 };
        assert_eq!(err.to_string(), "Invalid selection. Please enter 1, 2, 3, 4, or 5.");
    }

    #[test]
    fn selections_queue_in_order() {
        let control: AudioControl<NoopRawMutex, 2> = AudioControl::new();

        assert_eq!(control.request(AudioCommand::PlaySong(2)), Ok(()));
        assert_eq!(control.request(AudioCommand::PlaySong(3)), Ok(()));
        assert_eq!(control.request(AudioCommand::PlaySong(1)), Err(AudioError::QueueFull));

        assert_eq!(block_on(control.next_selection()), 2);
        assert_eq!(block_on(control.next_selection()), 3);
    }

    #[test]
    fn stop_flushes_pending_selections() {
        let control: AudioControl<NoopRawMutex> = AudioControl::new();

        control.request(AudioCommand::PlaySong(1)).unwrap();
        control.request(AudioCommand::Stop).unwrap();

        assert!(control.stop_signal().signaled());
        assert!(control.selections.try_receive().is_err());
    }
}
