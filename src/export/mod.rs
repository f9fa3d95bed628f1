// Copyright (c) 2024 Mike Tsao

//! File-export collaborators that consume a finished
//! [Arrangement](crate::arrangement::Arrangement).

/// The most commonly used imports.
pub mod prelude {
    pub use super::{ExportError, SmfWriter};
}

pub use smf::{ExportError, SmfWriter};

mod smf;
