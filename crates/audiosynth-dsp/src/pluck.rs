//! Plucked-string model for the acoustic voice.
//!
//! A delay line of `ceil(period) + 1` random ±1 values is filled one
//! sample at a time (the pluck), then replayed with two-point averaging
//! on every read. The averaging is the string's only loss, so the tone
//! darkens and fades without help from the envelope.
//!
//! The read cursor wraps after index `ceil(period)`, or one sample early
//! at `floor(period)` when `period_count % 100 >= p_hundredth`. The
//! early wrap is the only thing that advances `period_count`, so from a
//! fresh string it fires on every period when `p_hundredth == 0` and
//! never otherwise.
//!
//! State lives for one note. Create a fresh `PluckedString` per render.

use log::trace;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct PluckedString {
    value_table: Vec<f64>,
    play_index: usize,
    period_count: u64,
}

impl PluckedString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the delay line and rewind both cursors.
    pub fn reset(&mut self) {
        self.value_table.clear();
        self.play_index = 0;
        self.period_count = 0;
    }

    /// Produce the next output sample.
    pub fn next_sample<R: Rng + ?Sized>(&mut self, sample_rate: f64, frequency: f64, rng: &mut R) -> f64 {
        let period = sample_rate / frequency;
        let period_floor = period.floor() as usize;
        let period_ceil = period.ceil() as usize;

        if self.value_table.len() <= period_ceil {
            let v = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            self.value_table.push(v);
            if self.value_table.len() > period_ceil {
                trace!("plucked string seeded with {} values", self.value_table.len());
            }
            return v;
        }

        let p_hundredth = ((period - period.floor()) * 100.0).floor() as u64;
        let table = &mut self.value_table;
        let play = self.play_index;

        let next = if play >= table.len() - 1 { 0 } else { play + 1 };
        table[play] = (table[next] + table[play]) * 0.5;

        let mut reset_play = false;
        if play >= period_floor {
            if play < period_ceil {
                if self.period_count % 100 >= p_hundredth {
                    reset_play = true;
                    table[play + 1] = (table[0] + table[play + 1]) * 0.5;
                    self.period_count += 1;
                }
            } else {
                reset_play = true;
            }
        }

        let out = table[play];
        self.play_index = if reset_play { 0 } else { play + 1 };
        out
    }
}
