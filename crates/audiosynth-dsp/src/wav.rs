//! 16-bit mono PCM WAV export.
//!
//! Samples arrive already scaled to the i16 range. Conversion truncates
//! toward zero and saturates at the i16 bounds instead of wrapping.

use std::path::Path;

use crate::error::SynthError;

pub const BITS_PER_SAMPLE: u16 = 16;
pub const CHANNELS: u16 = 1;

/// Float samples to i16 PCM (truncate, saturate).
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples.iter().map(|&s| s as i16).collect()
}

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|x| x.abs()).fold(0.0f64, f64::max)
}

pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<(), SynthError> {
    let spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for s in to_pcm_i16(samples) {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_truncates_toward_zero() {
        assert_eq!(to_pcm_i16(&[1.9, -1.9, 0.4, -0.4]), vec![1, -1, 0, 0]);
    }

    #[test]
    fn test_pcm_saturates() {
        assert_eq!(to_pcm_i16(&[32768.0, 40000.0, -32769.0, -1e9]), vec![32767, 32767, -32768, -32768]);
    }

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[0.5, -3.0, 2.0]), 3.0);
        assert_eq!(peak(&[]), 0.0);
    }

    #[test]
    fn test_write_wav_round_trip_header() {
        let path = std::env::temp_dir().join("audiosynth_dsp_wav_unit.wav");
        let _ = std::fs::remove_file(&path);

        let samples = [0.0, 1000.5, -1000.5, 32767.0];
        write_wav(&path, &samples, 44100).expect("write failed");

        let mut reader = hound::WavReader::open(&path).expect("invalid WAV file");
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, vec![0, 1000, -1000, 32767]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_wav_bad_path() {
        let path = std::env::temp_dir().join("no_such_dir_audiosynth").join("x.wav");
        match write_wav(&path, &[0.0], 44100) {
            Err(SynthError::Wav(_)) => {}
            other => panic!("expected Wav error, got {other:?}"),
        }
    }
}
