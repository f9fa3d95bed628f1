// Copyright (c) 2024 Mike Tsao

use crate::{
    composition::{Pitch, Scale},
    util::Rng,
};

/// The number of notes in a [Motif], and equally the number of melody slots
/// in one groove block.
pub const NOTES_IN_MOTIF: usize = 4;

/// A four-note seed pattern. A phrase is built from two motifs that are
/// alternated, re-varied, and rhythmically gated block by block; the motif
/// itself lives only for the duration of one composition call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motif([Pitch; NOTES_IN_MOTIF]);
impl Motif {
    /// Draws a fresh [Motif] from the given [Scale]: each note independently
    /// and uniformly at random from the scale's degrees, repeats allowed.
    ///
    /// The mood is accepted for forward compatibility but doesn't currently
    /// bias the draw.
    pub fn random(scale: &Scale, _mood: &str, rng: &mut Rng) -> Self {
        let pitches = scale.pitches();
        Self(core::array::from_fn(|_| {
            pitches[rng.rand_range(0..pitches.len() as u64) as usize]
        }))
    }

    /// Returns a new [Motif] with each note's register independently
    /// perturbed: half the time it stays put, otherwise it moves a whole
    /// octave, up or down with equal likelihood. Nothing clamps the result;
    /// a shifted pitch may leave the nominal instrument range.
    pub fn vary(&self, rng: &mut Rng) -> Self {
        Self(self.0.map(|pitch| {
            if rng.rand_bool() {
                pitch
            } else if rng.rand_bool() {
                pitch + 12
            } else {
                pitch - 12
            }
        }))
    }

    /// The motif's notes in order.
    pub const fn notes(&self) -> &[Pitch; NOTES_IN_MOTIF] {
        &self.0
    }
}
