use std::path::Path;

use rampfx::Rgba;
use serde::Deserialize;

use crate::output::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid anchor color: {code:?}")]
    InvalidAnchor { code: String },
}

/// An anchor color as written in a config file, either a hex code or a table
/// of unit channels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Anchor {
    Hex(String),
    Channels(Rgba),
}

impl Anchor {
    pub fn to_rgba(&self) -> Result<Rgba, ConfigError> {
        match self {
            Self::Hex(code) => parse_hex(code),
            Self::Channels(color) => Ok(*color),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RampConfig {
    #[serde(default)]
    pub anchors: Vec<Anchor>,
    pub resolution: Option<usize>,
    pub format: Option<OutputFormat>,
}

impl RampConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn anchor_colors(&self) -> Result<Vec<Rgba>, ConfigError> {
        self.anchors.iter().map(Anchor::to_rgba).collect()
    }
}

fn parse_hex(code: &str) -> Result<Rgba, ConfigError> {
    Rgba::from_hex_str(code).ok_or_else(|| ConfigError::InvalidAnchor {
        code: code.to_owned(),
    })
}

/// Parses a comma separated list of hex codes, e.g. `#000,#808080,#fff`.
pub fn parse_anchor_list(list: &str) -> Result<Vec<Rgba>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(parse_hex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_anchors() {
        let config: RampConfig = toml::from_str(
            r##"
            resolution = 16
            format = "csv"
            anchors = [
                "#000000",
                { r = 0.5, g = 0.25, b = 1 },
                { r = 1, g = 1, b = 1, a = 0.5 },
            ]
            "##,
        )
        .unwrap();

        assert_eq!(config.resolution, Some(16));
        assert_eq!(config.format, Some(OutputFormat::Csv));
        let colors = config.anchor_colors().unwrap();
        assert_eq!(
            colors,
            vec![Rgba::BLACK, Rgba::rgb(0.5, 0.25, 1.0), Rgba::WHITE],
            "anchor colors"
        );
        assert_eq!(colors[1].a, 1.0, "alpha defaults to opaque");
        assert_eq!(colors[2].a, 0.5, "explicit alpha");
    }

    #[test]
    fn empty_config_is_default() {
        let config: RampConfig = toml::from_str("").unwrap();
        assert!(config.anchors.is_empty());
        assert_eq!(config.resolution, None);
        assert_eq!(config.format, None);
    }

    #[test]
    fn invalid_hex_anchor() {
        let config: RampConfig = toml::from_str(r##"anchors = ["#000", "nope"]"##).unwrap();
        assert!(matches!(
            config.anchor_colors(),
            Err(ConfigError::InvalidAnchor { code }) if code == "nope"
        ));
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            toml::from_str::<RampConfig>("resolution = \"many\"").map_err(ConfigError::from),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            RampConfig::from_path("does/not/exist/ramp.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn anchor_list() {
        assert_eq!(
            parse_anchor_list("#000, #808080 ,fff,").unwrap(),
            vec![Rgba::BLACK, Rgba::from_hex_str("808080").unwrap(), Rgba::WHITE]
        );
        assert!(matches!(
            parse_anchor_list("#000,#12"),
            Err(ConfigError::InvalidAnchor { code }) if code == "#12"
        ));
    }
}
