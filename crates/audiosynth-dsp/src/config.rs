//! Engine configuration.

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Peak gain of the envelope; 2^15 maps a unit timbre onto 16-bit PCM.
pub const DEFAULT_OUTPUT_SCALE: f64 = 32768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthConfig {
    pub sample_rate: u32,
    pub output_scale: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            output_scale: DEFAULT_OUTPUT_SCALE,
        }
    }
}

impl SynthConfig {
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_output_scale(mut self, output_scale: f64) -> Self {
        self.output_scale = output_scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SynthConfig::default();
        assert_eq!(c.sample_rate, 44100);
        assert_eq!(c.output_scale, 32768.0);
    }

    #[test]
    fn test_builders() {
        let c = SynthConfig::default().with_sample_rate(22050).with_output_scale(1.0);
        assert_eq!(c, SynthConfig { sample_rate: 22050, output_scale: 1.0 });
    }
}
