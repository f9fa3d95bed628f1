// Copyright (c) 2024 Mike Tsao

//! MIDI-flavored types. The wire-level message vocabulary comes from
//! [midly]; this module adds the newtypes and the timed-event pairing that
//! the arrangement layer works with.

use crate::types::Tick;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

pub use midly::{
    num::{u4, u7},
    MidiMessage,
};

/// Newtype for MIDI channel.
#[derive(Synonym, Serialize, Deserialize)]
pub struct MidiChannel(pub u8);
#[allow(missing_docs)]
impl MidiChannel {
    pub const MIN_VALUE: u8 = 0;
    pub const MAX_VALUE: u8 = 15; // inclusive

    pub const fn new(value: u8) -> Self {
        Self(value)
    }
}
impl From<u4> for MidiChannel {
    fn from(value: u4) -> Self {
        Self(value.as_int())
    }
}

/// One timed MIDI instruction: a [MidiMessage] and the [Tick] at which it
/// fires. A note is represented as a pair of these, note-on at the start of
/// the sounding interval and note-off at its (exclusive) end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiEvent {
    /// What happens.
    pub message: MidiMessage,
    /// When it happens, relative to time zero.
    pub time: Tick,
}
impl MidiEvent {
    #[allow(missing_docs)]
    pub fn new(message: MidiMessage, time: Tick) -> Self {
        Self { message, time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midi_channel_from_u4() {
        assert_eq!(MidiChannel::from(u4::from(3)), MidiChannel(3));
    }

    #[test]
    fn midi_event_carries_time() {
        let e = MidiEvent::new(
            MidiMessage::NoteOn {
                key: u7::from(60),
                vel: u7::from(100),
            },
            Tick(8),
        );
        assert_eq!(e.time, Tick(8));
    }
}
