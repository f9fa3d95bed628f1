// Copyright (c) 2024 Mike Tsao

use crate::composition::Pitch;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The number of pitches in a [Scale]: one octave plus the next tonic.
pub const DEGREES_IN_SCALE: usize = 8;

/// The key name that unrecognized lookups fall back to.
pub const DEFAULT_KEY: &str = "C Major";

static C_MAJOR: Scale = Scale::new(DEFAULT_KEY, [60, 62, 64, 65, 67, 69, 71, 72]);
static A_MINOR: Scale = Scale::new("A Minor", [57, 59, 60, 62, 64, 65, 67, 69]);
static G_MAJOR: Scale = Scale::new("G Major", [55, 57, 59, 60, 62, 64, 66, 67]);
static E_MINOR: Scale = Scale::new("E Minor", [52, 54, 55, 57, 59, 60, 62, 64]);

static SCALES: Lazy<FxHashMap<&'static str, &'static Scale>> = Lazy::new(|| {
    [&C_MAJOR, &A_MINOR, &G_MAJOR, &E_MINOR]
        .into_iter()
        .map(|scale| (scale.name(), scale))
        .collect()
});

/// An ordered, fixed-size set of absolute pitches representing one named
/// key/mode. Scales are process-wide constants; nothing ever mutates one.
#[derive(Debug, PartialEq, Eq)]
pub struct Scale {
    name: &'static str,
    pitches: [Pitch; DEGREES_IN_SCALE],
}
impl Scale {
    const fn new(name: &'static str, pitches: [Pitch; DEGREES_IN_SCALE]) -> Self {
        Self { name, pitches }
    }

    /// Returns the [Scale] registered under the given name. Matching is
    /// exact and case-sensitive; anything unrecognized resolves to
    /// [DEFAULT_KEY] rather than failing.
    pub fn lookup(name: &str) -> &'static Scale {
        SCALES.get(name).copied().unwrap_or(&C_MAJOR)
    }

    #[allow(missing_docs)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The scale's pitches, tonic first.
    pub const fn pitches(&self) -> &[Pitch; DEGREES_IN_SCALE] {
        &self.pitches
    }

    /// Returns true if the given pitch is one of this scale's degrees.
    pub fn contains(&self, pitch: Pitch) -> bool {
        self.pitches.contains(&pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        assert_eq!(Scale::lookup("C Major").pitches()[0], 60);
        assert_eq!(Scale::lookup("A Minor").pitches()[0], 57);
        assert_eq!(Scale::lookup("G Major").pitches()[0], 55);
        assert_eq!(Scale::lookup("E Minor").pitches()[0], 52);
    }

    #[test]
    fn unknown_keys_fall_back_to_c_major() {
        assert_eq!(Scale::lookup("H Mixolydian"), Scale::lookup(DEFAULT_KEY));
        assert_eq!(
            Scale::lookup("c major"),
            Scale::lookup(DEFAULT_KEY),
            "Matching is case-sensitive"
        );
        assert_eq!(Scale::lookup(""), Scale::lookup(DEFAULT_KEY));
    }

    #[test]
    fn scales_span_one_octave_plus_tonic() {
        for name in ["C Major", "A Minor", "G Major", "E Minor"] {
            let scale = Scale::lookup(name);
            let pitches = scale.pitches();
            assert_eq!(
                pitches[DEGREES_IN_SCALE - 1] - pitches[0],
                12,
                "{name} should end an octave above its tonic"
            );
            assert!(
                pitches.windows(2).all(|w| w[0] < w[1]),
                "{name} should ascend strictly"
            );
        }
    }
}
