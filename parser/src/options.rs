use serde::Deserialize;

/// Behaviour switches that distinguish the strict parser from the older, looser one.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ParserOptions {
    /// Extract and keep spell durations. When off every card has duration 0.
    pub track_duration: bool,
    /// Read the first three bare numbers as cost, damage and health when no
    /// keyword rule found any of them.
    pub positional_fallback: bool,
    /// Fold accented vowels before matching so "duración" hits "duracion".
    pub fold_accents: bool,
}

impl ParserOptions {
    pub const fn precise() -> Self {
        Self {
            track_duration: true,
            positional_fallback: false,
            fold_accents: true,
        }
    }

    pub const fn legacy() -> Self {
        Self {
            track_duration: false,
            positional_fallback: true,
            fold_accents: false,
        }
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::precise()
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParserVariant {
    #[default]
    Precise,
    Legacy,
}

impl ParserVariant {
    pub fn options(&self) -> ParserOptions {
        match self {
            ParserVariant::Precise => ParserOptions::precise(),
            ParserVariant::Legacy => ParserOptions::legacy(),
        }
    }
}

impl TryFrom<&str> for ParserVariant {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "precise" => Ok(ParserVariant::Precise),
            "legacy" => Ok(ParserVariant::Legacy),
            variant => anyhow::bail!("invalid parser variant {variant}"),
        }
    }
}

impl std::fmt::Display for ParserVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserVariant::Precise => write!(f, "precise"),
            ParserVariant::Legacy => write!(f, "legacy"),
        }
    }
}
