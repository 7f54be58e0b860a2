//! Single note: instrument timbre shaped by the attack/decay envelope.
//!
//! Signal flow: timbre(i) -> envelope gain(i) -> output[i]
//! The buffer is `ceil(duration * sr)` long. No clipping is applied, so
//! some voice/pitch combinations overshoot the 16-bit range slightly.

use log::{debug, warn};
use rand::Rng;

use crate::config::SynthConfig;
use crate::envelope::{Envelope, buffer_len};
use crate::instrument::{Instrument, edm_wave, organ_wave, piano_wave};
use crate::pluck::PluckedString;

pub struct Voice {
    instrument: Instrument,
    frequency: f64,
    envelope: Envelope,
    string: PluckedString,
    num_samples: usize,
}

impl Voice {
    /// Prepare a note. Envelope parameters are computed here, once.
    pub fn note_on(instrument: Instrument, frequency: f64, duration_secs: f64, config: &SynthConfig) -> Self {
        let sample_rate = config.sample_rate as f64;
        let envelope = Envelope::new(instrument, sample_rate, frequency, config.output_scale, duration_secs);
        let num_samples = buffer_len(sample_rate, duration_secs);

        debug!(
            "{instrument} {frequency:.2} Hz: {num_samples} samples, attack {} decay {} dampen {:.4}",
            envelope.attack_len, envelope.decay_len, envelope.dampen
        );
        if !envelope.has_decay() {
            warn!(
                "{instrument}: duration {duration_secs}s does not exceed attack {}s, rendering attack only",
                envelope.attack
            );
        }

        Self {
            instrument,
            frequency,
            envelope,
            string: PluckedString::new(),
            num_samples,
        }
    }

    /// Output length in samples.
    pub fn len(&self) -> usize {
        self.num_samples
    }

    pub fn is_empty(&self) -> bool {
        self.num_samples == 0
    }

    fn wave<R: Rng + ?Sized>(&mut self, i: usize, rng: &mut R) -> f64 {
        let sr = self.envelope.sample_rate;
        let volume = self.envelope.volume;
        match self.instrument {
            Instrument::Piano => piano_wave(i, sr, self.frequency, volume),
            Instrument::Organ => organ_wave(i, sr, self.frequency, volume),
            Instrument::Edm => edm_wave(i, sr, self.frequency, volume),
            Instrument::Acoustic => self.string.next_sample(sr, self.frequency, rng),
        }
    }

    /// Render the whole note into `output`, which is cleared first.
    ///
    /// Samples are produced strictly in index order: the acoustic voice
    /// advances its string once per written sample. Indices past
    /// `min(decay_len, output.len())` stay zero.
    pub fn render<R: Rng + ?Sized>(&mut self, output: &mut [f64], rng: &mut R) {
        output.fill(0.0);
        self.string.reset();

        let attack_end = self.envelope.attack_len.min(output.len());
        for i in 0..attack_end {
            output[i] = self.envelope.attack_gain(i) * self.wave(i, rng);
        }

        if self.envelope.has_decay() {
            // Decay resumes after the last attack index; slot 0 stays silent
            // even when the attack is shorter than one sample.
            let decay_start = attack_end.max(1);
            let decay_end = self.envelope.decay_len.min(output.len());
            for i in decay_start..decay_end {
                output[i] = self.envelope.decay_gain(i) * self.wave(i, rng);
            }
        }
    }

    /// Render a complete note of given duration to a Vec.
    pub fn render_note<R: Rng + ?Sized>(
        instrument: Instrument,
        frequency: f64,
        duration_secs: f64,
        config: &SynthConfig,
        rng: &mut R,
    ) -> Vec<f64> {
        let mut voice = Voice::note_on(instrument, frequency, duration_secs, config);
        let mut output = vec![0.0f64; voice.len()];
        voice.render(&mut output, rng);
        output
    }
}
