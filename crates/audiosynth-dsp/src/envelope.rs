//! Two-phase amplitude envelope: linear attack, power-law decay to zero.
//!
//! Attack, for `i < attack_len`:
//!   gain = volume * i / (sr * attack)
//! Decay, for `attack_len <= i < decay_len`:
//!   gain = volume * (1 - (i - sr * attack) / (sr * (duration - attack)))^dampen
//!
//! The gain already includes the output scale, so multiplying by a
//! timbre in [-1, 1] lands in the 16-bit PCM range.

use crate::instrument::Instrument;

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub sample_rate: f64,
    pub volume: f64,
    /// Attack time in seconds.
    pub attack: f64,
    /// Note duration in seconds.
    pub duration: f64,
    /// Decay exponent.
    pub dampen: f64,
    /// `floor(sr * attack)`
    pub attack_len: usize,
    /// `floor(sr * duration)`
    pub decay_len: usize,
}

impl Envelope {
    /// Derive the envelope of `instrument` at `frequency`. Evaluated once per note.
    pub fn new(instrument: Instrument, sample_rate: f64, frequency: f64, volume: f64, duration: f64) -> Self {
        let attack = instrument.attack();
        let dampen = instrument.dampen(sample_rate, frequency, volume);
        Self {
            sample_rate,
            volume,
            attack,
            duration,
            dampen,
            attack_len: samples_for(sample_rate, attack),
            decay_len: samples_for(sample_rate, duration),
        }
    }

    /// True when the duration leaves room for at least one decay sample.
    pub fn has_decay(&self) -> bool {
        self.decay_len > self.attack_len
    }

    /// Attack-phase gain at sample `i`.
    #[inline]
    pub fn attack_gain(&self, i: usize) -> f64 {
        self.volume * (i as f64 / (self.sample_rate * self.attack))
    }

    /// Decay-phase gain at sample `i`. Only meaningful when `has_decay()`.
    #[inline]
    pub fn decay_gain(&self, i: usize) -> f64 {
        let sr = self.sample_rate;
        let progress = (i as f64 - sr * self.attack) / (sr * (self.duration - self.attack));
        self.volume * f64::powf(1.0 - progress, self.dampen)
    }

    /// Gain at sample `i`, zero outside `[0, decay_len)` and after a
    /// degenerate attack-only note.
    pub fn gain(&self, i: usize) -> f64 {
        if i < self.attack_len {
            self.attack_gain(i)
        } else if i < self.decay_len && self.has_decay() {
            self.decay_gain(i)
        } else {
            0.0
        }
    }
}

/// `floor(sample_rate * seconds)`, saturating at zero for negative input.
fn samples_for(sample_rate: f64, seconds: f64) -> usize {
    (sample_rate * seconds).floor().max(0.0) as usize
}

/// Buffer length for a note: `ceil(sample_rate * seconds)`.
pub fn buffer_len(sample_rate: f64, seconds: f64) -> usize {
    (seconds * sample_rate).ceil().max(0.0) as usize
}
