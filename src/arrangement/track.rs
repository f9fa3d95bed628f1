// Copyright (c) 2024 Mike Tsao

use crate::types::{MidiChannel, MidiEvent};
use strum_macros::{Display, EnumCount, EnumIter};

/// The four layers of an [Arrangement](crate::arrangement::Arrangement),
/// each confined to its own MIDI channel.
#[derive(Clone, Copy, Debug, Display, EnumCount, EnumIter, PartialEq, Eq)]
pub enum TrackRole {
    /// The melody itself: short notes, loudest layer.
    Lead,
    /// A sustained triad under each melody note.
    Chord,
    /// The same triad broken into three consecutive one-tick notes.
    Arpeggio,
    /// The melody root held well past its slot, quietest layer.
    Pad,
}
impl TrackRole {
    /// The MIDI channel this layer plays on.
    pub const fn channel(&self) -> MidiChannel {
        MidiChannel::new(*self as u8)
    }

    /// The note-on velocity for every note this layer emits.
    pub const fn velocity(&self) -> u8 {
        match self {
            Self::Lead => 100,
            Self::Chord => 60,
            Self::Arpeggio => 50,
            Self::Pad => 30,
        }
    }
}

/// One layer of an arrangement: a sequence of [MidiEvent]s, ordered by tick,
/// all on a single channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    /// Which layer this is.
    pub role: TrackRole,
    /// The channel all of this track's events play on.
    pub channel: MidiChannel,
    /// The events, ordered by tick.
    pub events: Vec<MidiEvent>,
}
impl Track {
    /// Creates an empty [Track] for the given role.
    pub fn new_with_role(role: TrackRole) -> Self {
        Self {
            role,
            channel: role.channel(),
            events: Vec::default(),
        }
    }
}
