// Copyright (c) 2024 Mike Tsao

use serde::{Deserialize, Serialize};

/// A semitone number on the absolute MIDI scale (60 is middle C). This is
/// deliberately a plain integer rather than a newtype: a melody slot holds
/// either a pitch or [REST], with no type distinction between the two, and
/// the variation step is free to push a pitch outside the nominal 0..=127
/// instrument range. Reduction into the 7-bit MIDI key space happens at the
/// event boundary, not here.
pub type Pitch = i16;

/// The reserved [Pitch] value marking "no note plays" at a melody position.
pub const REST: Pitch = -1;

/// A flat melody: one [Pitch] (or [REST]) per quarter-note slot, four slots
/// per bar. This is the sole artifact handed across the composition/
/// arrangement boundary, and the only one worth persisting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Melody(pub Vec<Pitch>);
impl Melody {
    /// The number of slots, counting rests.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the slots in playback order.
    pub fn slots(&self) -> impl Iterator<Item = &Pitch> {
        self.0.iter()
    }

    /// Returns true if the given slot is a rest.
    pub fn is_rest(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(|&p| p == REST)
    }
}
impl From<Vec<Pitch>> for Melody {
    fn from(slots: Vec<Pitch>) -> Self {
        Self(slots)
    }
}
