// Copyright (c) 2024 Mike Tsao

use crate::{
    composition::Pitch,
    types::midi::{u7, MidiMessage},
};

/// Provides MIDI-related utility functionality.
pub struct MidiUtils {}
impl MidiUtils {
    /// Convenience function to make a note-on [MidiMessage]. The melody
    /// pipeline doesn't clamp pitches; the reduction from [Pitch] into the
    /// 7-bit MIDI key space happens here and only here.
    pub fn new_note_on(pitch: Pitch, vel: u8) -> MidiMessage {
        MidiMessage::NoteOn {
            key: Self::pitch_to_key(pitch),
            vel: u7::from_int_lossy(vel),
        }
    }

    /// Convenience function to make a note-off [MidiMessage].
    pub fn new_note_off(pitch: Pitch, vel: u8) -> MidiMessage {
        MidiMessage::NoteOff {
            key: Self::pitch_to_key(pitch),
            vel: u7::from_int_lossy(vel),
        }
    }

    /// Convenience function to make a program-change [MidiMessage].
    pub fn new_program_change(program: u8) -> MidiMessage {
        MidiMessage::ProgramChange {
            program: u7::from_int_lossy(program),
        }
    }

    // Wrap to a byte, then mask to seven bits.
    fn pitch_to_key(pitch: Pitch) -> u7 {
        u7::from_int_lossy(pitch as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_construction() {
        assert_eq!(
            MidiUtils::new_note_on(60, 100),
            MidiMessage::NoteOn {
                key: u7::from(60),
                vel: u7::from(100)
            }
        );
        assert_eq!(
            MidiUtils::new_note_off(60, 100),
            MidiMessage::NoteOff {
                key: u7::from(60),
                vel: u7::from(100)
            }
        );
        assert_eq!(
            MidiUtils::new_program_change(24),
            MidiMessage::ProgramChange {
                program: u7::from(24)
            }
        );
    }

    #[test]
    fn out_of_range_pitches_are_reduced_once_to_seven_bits() {
        // 200 wraps to the byte 200, which masks to 72.
        assert_eq!(
            MidiUtils::new_note_on(200, 100),
            MidiMessage::NoteOn {
                key: u7::from(72),
                vel: u7::from(100)
            }
        );
        // 130 wraps to the byte 130, which masks to 2.
        assert_eq!(
            MidiUtils::new_note_on(130, 100),
            MidiMessage::NoteOn {
                key: u7::from(2),
                vel: u7::from(100)
            }
        );
    }
}
