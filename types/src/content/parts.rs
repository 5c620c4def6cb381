use crate::audio::{AudioFormat, Base64EncodedAudioBytes};

/// One tagged element of a request message's content array.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum InputContent {
    #[serde(rename = "input_audio")]
    InputAudio(InputAudioContent),
    #[serde(rename = "text")]
    Text(TextContent),
}

impl InputContent {
    pub fn input_audio(data: Base64EncodedAudioBytes, format: AudioFormat) -> Self {
        InputContent::InputAudio(InputAudioContent::new(data, format))
    }

    pub fn text(text: &str) -> Self {
        InputContent::Text(TextContent::new(text))
    }
}

/// One tagged element of a reply message's content array. Part types the
/// API may add later deserialize as `Unknown` and are skipped.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputContent {
    #[serde(rename = "text")]
    Text(TextContent),
    #[serde(rename = "output_audio")]
    OutputAudio(OutputAudioContent),
    #[serde(other)]
    Unknown,
}

/// Wire shape: `{"type": "input_audio", "input_audio": {"data": ..., "format": ...}}`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct InputAudioContent {
    input_audio: InputAudioData,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct InputAudioData {
    data: Base64EncodedAudioBytes,
    format: AudioFormat,
}

impl InputAudioContent {
    pub fn new(data: Base64EncodedAudioBytes, format: AudioFormat) -> Self {
        Self {
            input_audio: InputAudioData { data, format },
        }
    }

    pub fn data(&self) -> Base64EncodedAudioBytes {
        self.input_audio.data.clone()
    }

    pub fn format(&self) -> AudioFormat {
        self.input_audio.format
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct TextContent {
    text: String,
}

impl TextContent {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Wire shape: `{"type": "output_audio", "audio": {"data": ...}}`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct OutputAudioContent {
    audio: OutputAudioData,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct OutputAudioData {
    data: Base64EncodedAudioBytes,
}

impl OutputAudioContent {
    pub fn new(data: Base64EncodedAudioBytes) -> Self {
        Self {
            audio: OutputAudioData { data },
        }
    }

    pub fn data(&self) -> Base64EncodedAudioBytes {
        self.audio.data.clone()
    }
}
