// Copyright (c) 2024 Mike Tsao

use crate::{
    arrangement::{Track, TrackRole},
    composition::{Melody, Pitch, REST},
    types::{MidiEvent, Tick},
    util::MidiUtils,
};
use strum::IntoEnumIterator;

/// Pulses per quarter note. One melody slot is one quarter note.
pub const PPQ: u16 = 4;

/// How many ticks the global counter advances per melody slot, sounding or
/// resting. A rest consumes time without emitting events.
pub const SLOT_TICKS: usize = 4;

// Per-layer note durations, in ticks.
const LEAD_TICKS: usize = 2;
const CHORD_TICKS: usize = 4;
const ARP_NOTE_TICKS: usize = 1;
const PAD_TICKS: usize = 8;

// Triad intervals above the melody root.
const MAJOR_THIRD: Pitch = 4;
const PERFECT_FIFTH: Pitch = 7;

/// The full four-layer event timeline derived from one [Melody]: one
/// [Track] per [TrackRole], all sharing a tick resolution and a single
/// instrument program. An [Arrangement] is built fresh per request and holds
/// no state across calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    /// The shared tick resolution, in pulses per quarter note.
    pub ppq: u16,
    /// The four layers, in [TrackRole] declaration order.
    pub tracks: Vec<Track>,
}
impl Arrangement {
    /// Returns the [Track] for the given role.
    pub fn track(&self, role: TrackRole) -> &Track {
        &self.tracks[role as usize]
    }
}

/// [Arranger] expands a flat [Melody] into an [Arrangement]. The expansion
/// is deterministic: no randomness, no retained state, so the same melody
/// and program always produce the identical arrangement.
pub struct Arranger {}
impl Arranger {
    /// Expands a melody. Each sounding slot at tick `t` becomes, in
    /// parallel:
    ///
    /// * lead: the root for `[t, t+2)`;
    /// * chord: root, major third, and perfect fifth, each for `[t, t+4)`;
    /// * arpeggio: the same three pitches as consecutive one-tick notes
    ///   starting at `t`, `t+1`, `t+2`;
    /// * pad: the root held for `[t, t+8)`, deliberately sustaining into the
    ///   following slots.
    ///
    /// Each track opens with a program change at tick zero selecting the
    /// given program. Layer tails past the last lead note are left as-is; no
    /// note-off is ever orphaned or synthesized early.
    pub fn expand(melody: &Melody, program: u8) -> Arrangement {
        let mut tracks: Vec<Track> = TrackRole::iter().map(Track::new_with_role).collect();
        for track in tracks.iter_mut() {
            track
                .events
                .push(MidiEvent::new(MidiUtils::new_program_change(program), Tick::ZERO));
        }

        for (slot, &pitch) in melody.slots().enumerate() {
            let tick = Tick(slot * SLOT_TICKS);
            if pitch == REST {
                continue;
            }
            let triad = [pitch, pitch + MAJOR_THIRD, pitch + PERFECT_FIFTH];

            Self::add_note(&mut tracks[TrackRole::Lead as usize], pitch, tick, LEAD_TICKS);
            for note in triad {
                Self::add_note(&mut tracks[TrackRole::Chord as usize], note, tick, CHORD_TICKS);
            }
            for (i, &note) in triad.iter().enumerate() {
                Self::add_note(
                    &mut tracks[TrackRole::Arpeggio as usize],
                    note,
                    tick.offset(i * ARP_NOTE_TICKS),
                    ARP_NOTE_TICKS,
                );
            }
            Self::add_note(&mut tracks[TrackRole::Pad as usize], pitch, tick, PAD_TICKS);
        }

        // The pad layer sustains across slot boundaries, so its offs arrive
        // out of order relative to later ons. Stable sort keeps the
        // on-before-off convention intact at equal ticks.
        for track in tracks.iter_mut() {
            track.events.sort_by_key(|event| event.time);
        }
        Arrangement { ppq: PPQ, tracks }
    }

    fn add_note(track: &mut Track, pitch: Pitch, start: Tick, duration: usize) {
        let vel = track.role.velocity();
        track
            .events
            .push(MidiEvent::new(MidiUtils::new_note_on(pitch, vel), start));
        track.events.push(MidiEvent::new(
            MidiUtils::new_note_off(pitch, vel),
            start.offset(duration),
        ));
    }
}
