// Copyright (c) 2024 Mike Tsao

//! Creation and representation of short musical phrases.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        Composer, Groove, Melody, Motif, PhraseParams, PhraseParamsBuilder, Pitch, Scale, REST,
    };
}

pub use composer::*;
pub use groove::*;
pub use melody::*;
pub use motif::*;
pub use scale::*;

mod composer;
mod groove;
mod melody;
mod motif;
mod scale;
