// Copyright (c) 2024 Mike Tsao

use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// The atomic time unit of the event grid. Everything this crate emits sits
/// on a fixed quarter-note-resolution grid, so a [Tick] is a plain count of
/// grid units since time zero; the arrangement's pulses-per-quarter-note
/// value gives it wall-clock meaning once a tempo is chosen.
#[derive(Synonym, Serialize, Deserialize)]
pub struct Tick(pub usize);
impl Tick {
    /// Time zero.
    pub const ZERO: Self = Self(0);

    /// Returns a [Tick] this many grid units later.
    pub const fn offset(&self, units: usize) -> Self {
        Self(self.0 + units)
    }
}
