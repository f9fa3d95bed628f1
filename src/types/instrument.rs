// Copyright (c) 2024 Mike Tsao

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// The instruments a phrase can be rendered with, each mapped to a General
/// MIDI program number. The same program is applied to all four arrangement
/// layers.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Instrument {
    /// Acoustic Grand Piano, the fallback for unrecognized names.
    #[default]
    Piano,
    /// Nylon-string guitar.
    Guitar,
    /// Lead synth.
    Synth,
}
impl Instrument {
    /// Resolves an instrument name. Matching is exact and case-sensitive;
    /// anything unrecognized is [Instrument::Piano].
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or_default()
    }

    /// The General MIDI program used for full arrangements.
    pub const fn program(&self) -> u8 {
        match self {
            Self::Piano => 0,
            Self::Guitar => 24,
            Self::Synth => 81,
        }
    }

    /// The General MIDI program used for single-note previews. This is
    /// deliberately not the same table as [Instrument::program]: the preview
    /// path has always used 80 for [Instrument::Synth], and the two call
    /// sites are kept separate rather than unified.
    pub const fn preview_program(&self) -> u8 {
        match self {
            Self::Piano => 0,
            Self::Guitar => 24,
            Self::Synth => 80,
        }
    }
}
