// Copyright (c) 2024 Mike Tsao

//! Odds and ends.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{midi::MidiUtils, rng::Rng};
}

pub use {midi::MidiUtils, rng::Rng};

mod midi;
mod rng;
