// Copyright (c) 2024 Mike Tsao

//! Expansion of a flat melody into a four-layer event timeline.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{Arrangement, Arranger, Track, TrackRole, PPQ, SLOT_TICKS};
}

pub use engine::*;
pub use track::*;

mod engine;
mod track;
