//! Sinusoidal modulation basis shared by the instrument timbres.
//!
//! Ten fixed functions of the form `A * sin(B * pi * (i / sr) * f + x)`.
//! Entries 0-4 have amplitude 1.0, entries 5-9 amplitude 0.5, and both
//! halves use the multipliers {2, 4, 8, 0.5, 0.25} in that order. The
//! timbres address entries by position, so the table order is fixed.

use std::f64::consts::PI;

pub const NUM_MODULATIONS: usize = 10;

/// One basis function: amplitude and multiplier of pi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    pub amplitude: f64,
    pub multiplier: f64,
}

impl Modulation {
    const fn new(amplitude: f64, multiplier: f64) -> Self {
        Self { amplitude, multiplier }
    }

    /// Evaluate at sample `i`. `x` is added to the sine argument; it is a
    /// phase offset in radians, or the output of a nested modulation.
    #[inline]
    pub fn eval(&self, i: usize, sample_rate: f64, frequency: f64, x: f64) -> f64 {
        self.amplitude * (self.multiplier * PI * ((i as f64 / sample_rate) * frequency) + x).sin()
    }
}

pub const MODULATIONS: [Modulation; NUM_MODULATIONS] = [
    Modulation::new(1.0, 2.0),
    Modulation::new(1.0, 4.0),
    Modulation::new(1.0, 8.0),
    Modulation::new(1.0, 0.5),
    Modulation::new(1.0, 0.25),
    Modulation::new(0.5, 2.0),
    Modulation::new(0.5, 4.0),
    Modulation::new(0.5, 8.0),
    Modulation::new(0.5, 0.5),
    Modulation::new(0.5, 0.25),
];

/// Evaluate table entry `k`.
#[inline]
pub fn modulate(k: usize, i: usize, sample_rate: f64, frequency: f64, x: f64) -> f64 {
    MODULATIONS[k].eval(i, sample_rate, frequency, x)
}
