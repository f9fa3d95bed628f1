// Copyright (c) 2024 Mike Tsao

use crate::{
    composition::{Motif, Pitch, NOTES_IN_MOTIF, REST},
    util::Rng,
};

/// The rhythmic gating step. Groove decides which positions of a four-note
/// block actually sound: the downbeats (positions 0 and 2) always do, and
/// each offbeat (positions 1 and 3) independently sounds or rests with equal
/// probability. Gating a position replaces its pitch with [REST]; it never
/// adds or removes positions, so the block stays exactly four slots wide.
pub struct Groove {}
impl Groove {
    /// Applies groove to one block. The block index is accepted for forward
    /// compatibility but doesn't currently vary the gating.
    pub fn apply(
        motif: &Motif,
        _block_index: usize,
        rng: &mut Rng,
    ) -> [Pitch; NOTES_IN_MOTIF] {
        core::array::from_fn(|i| {
            let pitch = motif.notes()[i];
            if i % 2 == 0 || rng.rand_bool() {
                pitch
            } else {
                REST
            }
        })
    }
}
