use super::{note::Melody, AudioError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    TwinkleTwinkle,
    MaryHadALittleLamb,
    WheelsOnTheBus,
}

impl SongId {
    pub const ALL: [SongId; 3] = [
        SongId::TwinkleTwinkle,
        SongId::MaryHadALittleLamb,
        SongId::WheelsOnTheBus,
    ];

    /// 1-based number the operator uses to pick the song.
    pub const fn selection(self) -> u8 {
        match self {
            SongId::TwinkleTwinkle => 1,
            SongId::MaryHadALittleLamb => 2,
            SongId::WheelsOnTheBus => 3,
        }
    }

    pub const fn melody(self) -> &'static Melody<'static> {
        match self {
            SongId::TwinkleTwinkle => &TWINKLE_TWINKLE,
            SongId::MaryHadALittleLamb => &MARY_HAD_A_LITTLE_LAMB,
            SongId::WheelsOnTheBus => &WHEELS_ON_THE_BUS,
        }
    }
}

impl TryFrom<u8> for SongId {
    type Error = AudioError;

    fn try_from(selection: u8) -> Result<Self, Self::Error> {
        SongId::ALL
            .into_iter()
            .find(|id| id.selection() == selection)
            .ok_or(AudioError::InvalidSelection {
                selection,
                song_count: SongId::ALL.len() as u8,
            })
    }
}

/// Fixed table of melodies addressed by a 1-based selection number.
pub struct SongCatalog<'a> {
    melodies: &'a [&'a Melody<'a>],
}

impl<'a> SongCatalog<'a> {
    pub const fn new(melodies: &'a [&'a Melody<'a>]) -> Self {
        SongCatalog { melodies }
    }

    pub const fn len(&self) -> usize {
        self.melodies.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.melodies.is_empty()
    }

    /// Takes the selection as entered, so wide ids are never truncated into
    /// a valid one.
    pub fn lookup(&self, selection: u32) -> Option<&'a Melody<'a>> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        self.melodies.get(index).copied()
    }

    /// Selection numbers paired with their melodies, in menu order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &'a Melody<'a>)> + 'a {
        let melodies = self.melodies;
        (1..=u8::MAX).zip(melodies.iter().copied())
    }
}

pub static SONG_CATALOG: SongCatalog<'static> = SongCatalog::new(&[
    SongId::TwinkleTwinkle.melody(),
    SongId::MaryHadALittleLamb.melody(),
    SongId::WheelsOnTheBus.melody(),
]);

pub const TWINKLE_TWINKLE: Melody<'static> = Melody::new(
    "Twinkle Twinkle Little Star",
    &[
        261, 261, 392, 392, 440, 440, 392, // C C G G A A G
        349, 349, 329, 329, 294, 294, 261, // F F E E D D C
        392, 392, 349, 349, 329, 329, 294, // G G F F E E D
        392, 392, 349, 349, 329, 329, 294, // G G F F E E D
        261, 261, 392, 392, 440, 440, 392, // C C G G A A G
        349, 349, 329, 329, 294, 294, 261, // F F E E D D C
    ],
    &[
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 2,
    ],
);

pub const MARY_HAD_A_LITTLE_LAMB: Melody<'static> = Melody::new(
    "Mary Had a Little Lamb",
    &[
        330, 294, 262, 294, 330, 330, 330, // E D C D E E E
        294, 294, 294, 330, 392, 392,      // D D D E G G
        330, 294, 262, 294, 330, 330, 330, // E D C D E E E
        330, 294, 294, 330, 294, 262,      // E D D E D C
    ],
    &[
        4, 4, 4, 4, 4, 4, 2,
        4, 4, 2, 4, 4, 2,
        4, 4, 4, 4, 4, 4, 4,
        4, 4, 4, 4, 4, 1,
    ],
);

pub const WHEELS_ON_THE_BUS: Melody<'static> = Melody::new(
    "The Wheels on the Bus",
    &[
        262, 349, 349, 349, 349, 440, 262, 440, 349, 0, // C F F F F A C A F -
        392, 392, 392, 330, 294, 262,                   // G G G E D C
        262, 349, 349, 349, 349, 440, 262, 440, 349, 0, // C F F F F A C A F -
        392, 262, 349,                                  // G C F
    ],
    &[
        4, 4, 8, 8, 4, 4, 4, 4, 4, 4,
        4, 4, 2, 4, 4, 4,
        4, 4, 8, 8, 4, 4, 4, 4, 2, 4,
        2, 2, 1,
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_are_one_based() {
        assert!(SONG_CATALOG.lookup(0).is_none());
        assert_eq!(SONG_CATALOG.lookup(1).map(|m| m.title()), Some("Twinkle Twinkle Little Star"));
        assert_eq!(SONG_CATALOG.lookup(3).map(|m| m.title()), Some("The Wheels on the Bus"));
        assert!(SONG_CATALOG.lookup(4).is_none());
        assert!(SONG_CATALOG.lookup(u8::MAX.into()).is_none());
        // 257 must not wrap around to song 1
        assert!(SONG_CATALOG.lookup(257).is_none());
        assert!(SONG_CATALOG.lookup(u32::MAX).is_none());
    }

    #[test]
    fn song_ids_match_catalog_order() {
        for id in SongId::ALL {
            let melody = SONG_CATALOG.lookup(id.selection().into()).unwrap();
            assert_eq!(melody.title(), id.melody().title());
            assert_eq!(SongId::try_from(id.selection()), Ok(id));
        }

        assert_eq!(
            SongId::try_from(4),
            Err(AudioError::InvalidSelection { selection: 4, song_count: 3 })
        );
    }

    #[test]
    fn entries_are_numbered_from_one() {
        let numbers: Vec<u8> = SONG_CATALOG.entries().map(|(n, _)| n).collect();
        assert_eq!(numbers, [1, 2, 3]);
    }
}
