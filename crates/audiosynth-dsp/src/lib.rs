//! Audiosynth DSP library — offline synthesis of single instrument notes.
//!
//! Pure DSP math plus a small 16-bit WAV writer. Four voices (piano,
//! organ, acoustic plucked string, EDM lead) share one modulation table
//! and one attack/decay envelope.

pub mod config;
pub mod envelope;
pub mod error;
pub mod instrument;
pub mod modulation;
pub mod pluck;
pub mod tables;
pub mod voice;
pub mod wav;

use rand::Rng;

pub use crate::config::SynthConfig;
pub use crate::error::SynthError;
pub use crate::instrument::Instrument;
pub use crate::tables::{Note, NoteName};
use crate::voice::Voice;

/// Renders notes with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> Self {
        Self { config }
    }

    /// Render one note using the thread RNG for the acoustic pluck.
    pub fn generate(
        &self,
        instrument: Instrument,
        note: &str,
        octave: i32,
        duration_secs: f64,
    ) -> Result<Vec<f64>, SynthError> {
        self.generate_with_rng(instrument, note, octave, duration_secs, &mut rand::rng())
    }

    /// Render one note. `rng` only feeds the acoustic voice's pluck, so a
    /// seeded generator makes every voice bit-reproducible.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        instrument: Instrument,
        note: &str,
        octave: i32,
        duration_secs: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>, SynthError> {
        let note = Note::parse(note, octave)?;
        Ok(Voice::render_note(instrument, note.frequency(), duration_secs, &self.config, rng))
    }

    /// Render `notes` back to back at one octave and duration.
    pub fn render_sequence<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        instrument: Instrument,
        notes: &[S],
        octave: i32,
        duration_secs: f64,
        rng: &mut R,
    ) -> Result<Vec<f64>, SynthError> {
        let mut output = Vec::new();
        for note in notes {
            output.extend(self.generate_with_rng(instrument, note.as_ref(), octave, duration_secs, rng)?);
        }
        Ok(output)
    }
}

/// Render one note with the default configuration.
///
/// Fails with `UnknownVoice` or `InvalidNote`; octave is clamped to 1-8.
pub fn synthesize(voice: &str, note: &str, octave: i32, duration_secs: f64) -> Result<Vec<f64>, SynthError> {
    let instrument: Instrument = voice.parse()?;
    Synthesizer::default().generate(instrument, note, octave, duration_secs)
}
