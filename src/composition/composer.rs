// Copyright (c) 2024 Mike Tsao

use crate::{
    composition::{Groove, Melody, Motif, Scale, NOTES_IN_MOTIF},
    util::Rng,
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// The key/mood/length selection for one phrase. Defaults match what a
/// first-time user would pick: four bars of a happy C major.
#[derive(Clone, Debug, Builder, PartialEq, Eq, Serialize, Deserialize)]
#[builder(default)]
#[serde(rename_all = "kebab-case")]
pub struct PhraseParams {
    /// The key/mode name, e.g. "C Major". Unrecognized names quietly become
    /// C major.
    pub key: String,
    /// A mood label. Accepted for forward compatibility; it doesn't
    /// currently bias generation.
    pub mood: String,
    /// The phrase length in bars, four melody slots per bar. Zero or
    /// negative lengths produce an empty melody.
    pub bars: i32,
}
impl Default for PhraseParams {
    fn default() -> Self {
        Self {
            key: "C Major".into(),
            mood: "Happy".into(),
            bars: 4,
        }
    }
}

/// [Composer] owns the melody-generation algorithm. It carries no state;
/// every call builds a fresh [Melody] from the given inputs and random
/// source, and two calls with identically seeded [Rng]s build identical
/// melodies.
pub struct Composer {}
impl Composer {
    /// Generates a phrase from a key/mood/length selection, consuming
    /// entropy from the supplied [Rng].
    ///
    /// Two motifs are drawn from the key's scale, then alternated across the
    /// phrase: even-numbered blocks elaborate the first motif, odd-numbered
    /// blocks the second. Each block is independently register-varied and
    /// rhythmically gated, so repeats of a motif are recognizable rather
    /// than literal.
    pub fn compose_with_rng(key: &str, mood: &str, bars: i32, rng: &mut Rng) -> Melody {
        let scale = Scale::lookup(key);
        let blocks = bars.max(0) as usize;

        let motif_a = Motif::random(scale, mood, rng);
        let motif_b = Motif::random(scale, mood, rng);

        let mut slots = Vec::with_capacity(blocks * NOTES_IN_MOTIF);
        for block_index in 0..blocks {
            let motif = if block_index % 2 == 0 {
                &motif_a
            } else {
                &motif_b
            };
            slots.extend(Groove::apply(&motif.vary(rng), block_index, rng));
        }
        Melody(slots)
    }

    /// [Composer::compose_with_rng] with a freshly seeded [Rng], for callers
    /// that don't care about reproducibility.
    pub fn compose(key: &str, mood: &str, bars: i32) -> Melody {
        Self::compose_with_rng(key, mood, bars, &mut Rng::default())
    }

    /// [Composer::compose_with_rng], taking bundled [PhraseParams].
    pub fn compose_params(params: &PhraseParams, rng: &mut Rng) -> Melody {
        Self::compose_with_rng(&params.key, &params.mood, params.bars, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::REST;

    #[test]
    fn melody_length_is_four_slots_per_bar() {
        let mut rng = Rng::new_with_seed(1);
        for bars in [0, 1, 2, 7, 16] {
            let melody = Composer::compose_with_rng("C Major", "Happy", bars, &mut rng);
            assert_eq!(melody.len(), bars as usize * 4);
        }
    }

    #[test]
    fn nonpositive_bar_counts_yield_empty_melodies() {
        let mut rng = Rng::new_with_seed(1);
        assert!(Composer::compose_with_rng("C Major", "Happy", 0, &mut rng).is_empty());
        assert!(
            Composer::compose_with_rng("C Major", "Happy", -3, &mut rng).is_empty(),
            "A negative bar count is tolerated, not an error"
        );
    }

    #[test]
    fn unknown_key_behaves_exactly_like_c_major() {
        let melody_bogus =
            Composer::compose_with_rng("Q Phrygian", "Happy", 8, &mut Rng::new_with_seed(77));
        let melody_c =
            Composer::compose_with_rng("C Major", "Happy", 8, &mut Rng::new_with_seed(77));
        assert_eq!(melody_bogus, melody_c);
    }

    #[test]
    fn same_seed_same_melody() {
        let a = Composer::compose_with_rng("G Major", "Sad", 4, &mut Rng::new_with_seed(123));
        let b = Composer::compose_with_rng("G Major", "Sad", 4, &mut Rng::new_with_seed(123));
        assert_eq!(a, b);
    }

    #[test]
    fn downbeats_never_rest() {
        let mut rng = Rng::new_with_seed(9);
        let melody = Composer::compose_with_rng("A Minor", "Sad", 32, &mut rng);
        for (i, &slot) in melody.slots().enumerate() {
            if i % 4 == 0 || i % 4 == 2 {
                assert_ne!(slot, REST, "Slot {i} is a downbeat and must sound");
            }
        }
    }

    #[test]
    fn sounding_slots_are_scale_degrees_up_to_octave_placement() {
        // Variation may move any note a whole octave before groove gates the
        // block, so melody values are scale members modulo +/-12.
        let scale = Scale::lookup("C Major");
        let mut rng = Rng::new_with_seed(4);
        let melody = Composer::compose_with_rng("C Major", "Happy", 16, &mut rng);
        for &slot in melody.slots() {
            if slot == REST {
                continue;
            }
            assert!(
                scale.contains(slot) || scale.contains(slot - 12) || scale.contains(slot + 12),
                "Melody value {slot} is not a C-major degree in any adjacent octave"
            );
        }
    }

    #[test]
    fn params_are_equivalent_to_loose_arguments() {
        let params = PhraseParamsBuilder::default()
            .key("E Minor".to_string())
            .mood("Moody".to_string())
            .bars(6)
            .build()
            .unwrap();
        let a = Composer::compose_params(&params, &mut Rng::new_with_seed(55));
        let b = Composer::compose_with_rng("E Minor", "Moody", 6, &mut Rng::new_with_seed(55));
        assert_eq!(a, b);
    }

    #[test]
    fn default_params() {
        let params = PhraseParamsBuilder::default().build().unwrap();
        assert_eq!(params.key, "C Major");
        assert_eq!(params.bars, 4);
    }
}
