//! Note tables: chromatic names, octave-4 reference frequencies and the
//! equal-tempered octave law.
//!
//! Range: octaves 1 to 8. Out-of-range octaves are clamped, not rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

pub const OCTAVE_LO: i32 = 1;
pub const OCTAVE_HI: i32 = 8;

/// Octave of the reference table below (A4 = 440 Hz).
pub const REFERENCE_OCTAVE: i32 = 4;

/// Octave-4 fundamentals in Hz, rounded to 2 decimals, indexed by `NoteName as usize`.
pub const REFERENCE_FREQUENCIES: [f64; 12] = [
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16, 493.88,
];

/// One of the 12 chromatic note names. Sharps are written with `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }

    /// Fundamental of this name in the reference octave.
    pub fn base_frequency(self) -> f64 {
        REFERENCE_FREQUENCIES[self as usize]
    }
}

impl FromStr for NoteName {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| SynthError::InvalidNote { name: s.to_string() })
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp an octave number into the playable range.
pub fn clamp_octave(octave: i32) -> i32 {
    octave.clamp(OCTAVE_LO, OCTAVE_HI)
}

/// A note name in a specific (clamped) octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub name: NoteName,
    pub octave: i32,
}

impl Note {
    pub fn new(name: NoteName, octave: i32) -> Self {
        Self {
            name,
            octave: clamp_octave(octave),
        }
    }

    /// Resolve a textual note name; fails with `InvalidNote` for unknown names.
    pub fn parse(name: &str, octave: i32) -> Result<Self, SynthError> {
        Ok(Self::new(name.parse()?, octave))
    }

    /// Equal-tempered frequency: `base * 2^(octave - 4)`.
    pub fn frequency(&self) -> f64 {
        self.name.base_frequency() * f64::powf(2.0, (self.octave - REFERENCE_OCTAVE) as f64)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}
