// Copyright (c) 2024 Mike Tsao

use crate::arrangement::Arrangement;
use midly::{Format, Header, MetaMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::path::Path;
use thiserror::Error;

/// Things that can go wrong while writing a `.mid` file. The arrangement
/// itself can't be malformed by construction, so this is entirely about the
/// filesystem.
#[derive(Debug, Error)]
pub enum ExportError {
    #[allow(missing_docs)]
    #[error("couldn't write MIDI file: {0}")]
    Io(#[from] std::io::Error),
}

/// [SmfWriter] renders an [Arrangement] as a Standard MIDI File, format 1:
/// one file track per arrangement track, each opening with the arrangement's
/// program change, with the tempo embedded as a meta event on the first
/// track. The tempo is a courtesy to the file consumer; it plays no part in
/// the arrangement's tick math.
pub struct SmfWriter {}
impl SmfWriter {
    /// Builds the in-memory SMF document for the given arrangement and tempo.
    pub fn to_smf(arrangement: &Arrangement, tempo_bpm: u32) -> Smf<'static> {
        let mut smf = Smf::new(Header::new(
            Format::Parallel,
            Timing::Metrical(arrangement.ppq.into()),
        ));

        for (index, track) in arrangement.tracks.iter().enumerate() {
            let mut events: Vec<TrackEvent> = Vec::with_capacity(track.events.len() + 2);
            if index == 0 {
                events.push(TrackEvent {
                    delta: 0.into(),
                    kind: TrackEventKind::Meta(MetaMessage::Tempo(
                        Self::microseconds_per_quarter(tempo_bpm).into(),
                    )),
                });
            }

            // Track events are already ordered by tick, so delta encoding is
            // a running difference.
            let mut last_tick = 0;
            for event in &track.events {
                let delta = (event.time.0 - last_tick) as u32;
                last_tick = event.time.0;
                events.push(TrackEvent {
                    delta: delta.into(),
                    kind: TrackEventKind::Midi {
                        channel: track.channel.0.into(),
                        message: event.message,
                    },
                });
            }

            events.push(TrackEvent {
                delta: 0.into(),
                kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
            });
            smf.tracks.push(events);
        }
        smf
    }

    /// Writes the arrangement to disk at the given path.
    pub fn save(
        arrangement: &Arrangement,
        tempo_bpm: u32,
        path: impl AsRef<Path>,
    ) -> Result<(), ExportError> {
        Ok(Self::to_smf(arrangement, tempo_bpm).save(path)?)
    }

    fn microseconds_per_quarter(tempo_bpm: u32) -> u32 {
        60_000_000 / tempo_bpm.max(1)
    }
}
