//! Runtime settings and dispatch of derivations from untrusted input.

use serde::{Deserialize, Serialize};

use crate::color::{parse, Color};
use crate::error::Result;
use crate::harmony::{Generator, DEFAULT_HUE_STEP, DEFAULT_STEPS};

/// Default number of entries kept by a [`crate::History`].
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Settings for the generators that take a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Degrees between the colors of [`Generator::Hues`].
    pub hue_step: u16,
    /// Number of colors produced by shades, tints and tones.
    pub steps: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            hue_step: DEFAULT_HUE_STEP,
            steps: DEFAULT_STEPS,
        }
    }
}

/// Settings for the whole engine. Every field has a default, so an empty
/// JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// See [`GeneratorConfig`].
    pub generators: GeneratorConfig,
    /// Maximum number of colors remembered by a [`crate::History`].
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generators: GeneratorConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Config {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `hex` and run `generator` on it.
    pub fn try_derive(&self, generator: Generator, hex: &str) -> Result<Vec<Color>> {
        let color = parse(hex)?;
        Ok(generator.apply(&color, &self.generators))
    }

    /// Like [`Config::try_derive`], but a malformed color yields an empty
    /// sequence instead of an error, so a view can still render.
    pub fn derive(&self, generator: Generator, hex: &str) -> Vec<Color> {
        match self.try_derive(generator, hex) {
            Ok(colors) => colors,
            Err(err) => {
                tracing::debug!(%generator, "derivation skipped: {err}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.generators.hue_step, 36);
        assert_eq!(config.generators.steps, 10);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
        assert_eq!(Config::from_json("{}").unwrap(), config);
    }

    #[test]
    fn partial_json() {
        let config = Config::from_json(r#"{ "generators": { "hue_step": 90 } }"#).unwrap();
        assert_eq!(config.generators.hue_step, 90);
        assert_eq!(config.generators.steps, DEFAULT_STEPS);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);

        assert!(matches!(Config::from_json("[1, 2]"), Err(Error::Config(_))));
    }

    #[test]
    fn derive_uses_settings() {
        let config = Config::from_json(r#"{ "generators": { "hue_step": 90, "steps": 4 } }"#).unwrap();
        assert_eq!(config.derive(Generator::Hues, "#f00").len(), 3);
        assert_eq!(config.derive(Generator::Shades, "#f00").len(), 4);
        assert_eq!(config.derive(Generator::Complementary, "f00"), [Color::new(0, 255, 255)]);
    }

    #[test]
    fn malformed_input_degrades_to_empty() {
        let config = Config::default();
        for generator in Generator::ALL {
            assert!(config.derive(generator, "#zzzzzz").is_empty());
            assert!(matches!(
                config.try_derive(generator, "#zzzzzz"),
                Err(Error::InvalidColorFormat(_))
            ));
        }
    }
}
