//! Error type shared by the note model, the synthesizer and WAV export.

use std::fmt;

#[derive(Debug)]
pub enum SynthError {
    /// Requested instrument voice is not one of the built-in four.
    UnknownVoice { name: String },
    /// Note name is outside the 12-symbol chromatic set.
    InvalidNote { name: String },
    /// WAV encoding or file I/O failed.
    Wav(hound::Error),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::UnknownVoice { name } => write!(f, "Invalid sound '{name}'"),
            SynthError::InvalidNote { name } => write!(f, "'{name}' is not a valid note"),
            SynthError::Wav(e) => write!(f, "WAV error: {e}"),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::Wav(e) => Some(e),
            _ => None,
        }
    }
}

impl From<hound::Error> for SynthError {
    fn from(e: hound::Error) -> Self {
        SynthError::Wav(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_offending_input() {
        let e = SynthError::InvalidNote { name: "H".to_string() };
        assert_eq!(e.to_string(), "'H' is not a valid note");

        let e = SynthError::UnknownVoice { name: "banjo".to_string() };
        assert!(e.to_string().contains("banjo"));
    }

    #[test]
    fn test_wav_error_has_source() {
        use std::error::Error;
        let e = SynthError::from(hound::Error::Unsupported);
        assert!(e.source().is_some());
    }
}
