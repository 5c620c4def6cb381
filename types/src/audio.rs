use std::fmt;
use std::str::FromStr;

/// Audio data encoded as base64
pub type Base64EncodedAudioBytes = String;

/// The declared encoding of a recorded clip. The API is only ever told
/// one of these two labels; anything else is rejected up front instead of
/// being passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "wav")]
    Wav,
    #[serde(rename = "webm")]
    Webm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
            AudioFormat::Webm => "webm",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wav" => Ok(AudioFormat::Wav),
            "webm" => Ok(AudioFormat::Webm),
            _ => Err(format!("unsupported audio format: {s}")),
        }
    }
}

/// A recorded clip as handed over by the capture surface: raw bytes plus
/// the format tag. Owned transiently by the request builder and discarded
/// after encoding; sample rate and channel count are not inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    bytes: Vec<u8>,
    format: AudioFormat,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_labels() {
        assert_eq!(AudioFormat::Wav.as_str(), "wav");
        assert_eq!(AudioFormat::Webm.as_str(), "webm");
        assert_eq!("wav".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert_eq!("webm".parse::<AudioFormat>().unwrap(), AudioFormat::Webm);
        assert!("mp3".parse::<AudioFormat>().is_err());
    }

    #[test]
    fn test_format_serialize() {
        let json = serde_json::to_string(&AudioFormat::Wav).unwrap();
        assert_eq!(json, r#""wav""#);
        let format: AudioFormat = serde_json::from_str(r#""webm""#).unwrap();
        assert_eq!(format, AudioFormat::Webm);
    }
}
