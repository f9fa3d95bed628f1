// Copyright (c) 2024 Mike Tsao

//! A tiny command-line front end for the earworm pipeline: compose a phrase,
//! expand it into a four-layer arrangement, and save it as a `.mid` file.

use clap::Parser;
use earworm::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Generates a short musical phrase and saves it as a MIDI file")]
struct Args {
    /// Key/mode name. Unrecognized names fall back to "C Major".
    #[arg(long, default_value = "C Major")]
    key: String,

    /// Mood label (accepted but not yet used by generation).
    #[arg(long, default_value = "Happy")]
    mood: String,

    /// Phrase length in bars.
    #[arg(long, default_value_t = 4)]
    bars: i32,

    /// Instrument name: Piano, Guitar, or Synth. Unrecognized names fall
    /// back to Piano.
    #[arg(long, default_value = "Piano")]
    instrument: String,

    /// Tempo in beats per minute.
    #[arg(long, default_value_t = 120)]
    tempo: u32,

    /// RNG seed. Same seed, same phrase. Omit for a fresh one.
    #[arg(long)]
    seed: Option<u128>,

    /// Where to write the MIDI file.
    #[arg(short, long, default_value = "phrase.mid")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => Rng::new_with_seed(seed),
        None => Rng::default(),
    };
    let melody = Composer::compose_with_rng(&args.key, &args.mood, args.bars, &mut rng);
    let instrument = Instrument::from_name(&args.instrument);
    let arrangement = Arranger::expand(&melody, instrument.program());
    SmfWriter::save(&arrangement, args.tempo, &args.output)?;

    let sounding = melody.slots().filter(|&&slot| slot != REST).count();
    println!(
        "Wrote {} slots ({sounding} sounding) as {} at {} BPM to {}",
        melody.len(),
        instrument,
        args.tempo,
        args.output.display()
    );
    Ok(())
}
