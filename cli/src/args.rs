use std::path::PathBuf;

use clap::Parser;
use forge::NarrativeStyle;
use parser::ParserVariant;

/// Forge a playable card from a free-text description
#[derive(Parser, Debug)]
#[command(name = "card-forge")]
#[command(version)]
pub struct Cli {
    /// Card description, e.g. "Golem de hielo con 400 de daño y 200 de vida"
    pub description: String,

    /// Forge config (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rng seed for the narrative. Overrides the config seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Parser preset, `precise` or `legacy`. Overrides the config
    #[arg(long, value_parser = parse_variant)]
    pub variant: Option<ParserVariant>,

    /// Narrative style, `templated` or `descriptive`. Overrides the config
    #[arg(long, value_parser = parse_style)]
    pub style: Option<NarrativeStyle>,

    /// Image file used as the card art instead of a generated one
    #[arg(short, long)]
    pub art: Option<PathBuf>,

    /// Write the composed card to this PNG file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the card as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_variant(value: &str) -> anyhow::Result<ParserVariant> {
    ParserVariant::try_from(value)
}

fn parse_style(value: &str) -> anyhow::Result<NarrativeStyle> {
    NarrativeStyle::try_from(value)
}
