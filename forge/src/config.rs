use std::path::Path;

use anyhow::Context;
use parser::{ParserOptions, ParserVariant};
use serde::Deserialize;

use crate::{NarrativeStyle, PromptConfig};

/// Variant preset plus optional per-flag overrides.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    pub variant: ParserVariant,
    pub track_duration: Option<bool>,
    pub positional_fallback: Option<bool>,
    pub fold_accents: Option<bool>,
}

impl ParserConfig {
    pub fn options(&self) -> ParserOptions {
        let preset = self.variant.options();
        ParserOptions {
            track_duration: self.track_duration.unwrap_or(preset.track_duration),
            positional_fallback: self
                .positional_fallback
                .unwrap_or(preset.positional_fallback),
            fold_accents: self.fold_accents.unwrap_or(preset.fold_accents),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NarrativeConfig {
    pub style: NarrativeStyle,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ForgeConfig {
    pub seed: Option<u64>,
    pub parser: ParserConfig,
    pub narrative: NarrativeConfig,
    pub prompt: PromptConfig,
}

impl ForgeConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: ForgeConfig = toml::from_str(source).context("Invalid forge config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config `{}`", path.display()))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.prompt.style_suffix.trim().is_empty() {
            anyhow::bail!("`prompt.style_suffix` must not be empty");
        }
        Ok(())
    }
}
