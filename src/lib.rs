// Copyright (c) 2024 Mike Tsao

#![deny(missing_docs, unused_imports, unused_variables)]
#![allow(rustdoc::private_intra_doc_links)]

//! Earworm generates short musical phrases and turns them into layered MIDI
//! arrangements.
//!
//! The pipeline is a straight line. [Composer] picks a scale for the
//! requested key, draws two four-note motifs from it, and alternates them
//! across the requested number of bars, perturbing each block's register and
//! rhythmically gating it. The result is a flat [Melody](composition::Melody)
//! in which a reserved sentinel marks rests. [Arranger] then expands each
//! sounding melody note into four parallel layers -- lead, chord, arpeggio,
//! and pad -- as timed MIDI events on a fixed quarter-note tick grid.
//!
//! Everything is pure computation. The only entropy comes from the
//! [Rng](util::Rng) you pass in, so a fixed seed reproduces a phrase exactly.
//! Consumers that want a `.mid` file hand the finished arrangement to
//! [SmfWriter](export::SmfWriter) along with a tempo.

/// A collection of imports that are useful to users of this crate. `use
/// earworm::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::{
        arrangement::prelude::*, composition::prelude::*, export::prelude::*, types::prelude::*,
        util::prelude::*,
    };
}

// Fundamental structures that are important enough to re-export at top level.
pub use {arrangement::Arranger, composition::Composer};

pub mod arrangement;
pub mod composition;
pub mod export;
pub mod types;
pub mod util;
