//! mms Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all mms crates.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a character source and its adapters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Buffered-reader adapter settings
    pub stream: StreamConfig,
    /// Tokenizer helper settings
    pub token: TokenConfig,
}

/// How much of the mapped file the stream adapter exposes per `fill_buf`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStrategy {
    /// Every remaining byte of the file
    #[default]
    WholeFile,
    /// One byte at a time
    SingleByte,
}

/// Configuration for the buffered-reader adapter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub window: WindowStrategy,
}

/// Configuration for the tokenizer helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Initial capacity reserved for an extracted word
    pub word_capacity: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self { word_capacity: 32 }
    }
}

/// Library component, used to derive log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Buffer,
    Tracker,
    Source,
    Stream,
    Token,
}

impl Component {
    /// Every component, in dependency order
    pub const ALL: [Component; 5] = [
        Component::Buffer,
        Component::Tracker,
        Component::Source,
        Component::Stream,
        Component::Token,
    ];

    /// Get the string name of the component
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Buffer => "buffer",
            Component::Tracker => "tracker",
            Component::Source => "source",
            Component::Stream => "stream",
            Component::Token => "token",
        }
    }

    /// Get the log target name for this component
    pub fn target(&self) -> &'static str {
        match self {
            Component::Buffer => "mms::buffer",
            Component::Tracker => "mms::tracker",
            Component::Source => "mms::source",
            Component::Stream => "mms::stream",
            Component::Token => "mms::token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_config() {
        let cfg = SourceConfig::default();
        assert_eq!(cfg.stream.window, WindowStrategy::WholeFile);
        assert_eq!(cfg.token.word_capacity, 32);
    }

    #[test]
    fn test_component_names() {
        assert_eq!(Component::Tracker.as_str(), "tracker");
        assert_eq!(Component::Stream.target(), "mms::stream");
        for component in Component::ALL {
            assert_eq!(component.target(), format!("mms::{}", component.as_str()));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: SourceConfig =
            serde_json::from_str(r#"{ "stream": { "window": "single_byte" } }"#).unwrap();
        assert_eq!(cfg.stream.window, WindowStrategy::SingleByte);
        assert_eq!(cfg.token.word_capacity, 32);
    }

    #[test]
    fn test_json_roundtrip_of_custom_config() {
        let cfg = SourceConfig {
            stream: StreamConfig {
                window: WindowStrategy::SingleByte,
            },
            token: TokenConfig { word_capacity: 8 },
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("single_byte"));
        let back: SourceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
