// Copyright (c) 2024 Mike Tsao

//! Common data types used throughout the system.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        midi::{u4, u7, MidiChannel, MidiEvent, MidiMessage},
        Instrument, Tick,
    };
}

pub use {
    instrument::Instrument,
    midi::{MidiChannel, MidiEvent},
    time::Tick,
};

mod instrument;
pub mod midi;
mod time;
