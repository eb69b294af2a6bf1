use std::path::PathBuf;

use forge::{CardForge, ForgeConfig, ForgedCard};
use image::{Rgba, RgbaImage};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

#[allow(unused)]
pub static SEED: u64 = 0x3a3f7af8085da7a2;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A forge config file that also carries the input text and what to expect.
/// The extra keys are ignored when the same file is read as a `ForgeConfig`.
#[derive(Debug, Deserialize)]
pub struct ForgeCase {
    pub input: String,
    #[serde(default)]
    pub expect: Expectation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub name: Option<String>,
    pub narrative: Option<String>,
    pub narrative_contains: Vec<String>,
    pub steps: Option<u32>,
    pub prompt_ends_with: Option<String>,
}

impl Expectation {
    #[allow(unused)]
    pub fn mismatches(&self, card: &ForgedCard) -> Vec<String> {
        let mut mismatches = Vec::new();
        if let Some(name) = &self.name {
            if *name != card.name {
                mismatches.push(format!("name: expected `{name}` got `{}`", card.name));
            }
        }
        if let Some(narrative) = &self.narrative {
            if *narrative != card.narrative {
                mismatches.push(format!(
                    "narrative: expected `{narrative}` got `{}`",
                    card.narrative
                ));
            }
        }
        for fragment in &self.narrative_contains {
            if !card.narrative.contains(fragment.as_str()) {
                mismatches.push(format!(
                    "narrative `{}` lacks `{fragment}`",
                    card.narrative
                ));
            }
        }
        if let Some(steps) = self.steps {
            if steps != card.request.params.steps {
                mismatches.push(format!(
                    "steps: expected {steps} got {}",
                    card.request.params.steps
                ));
            }
        }
        if let Some(suffix) = &self.prompt_ends_with {
            if !card.request.prompt.ends_with(suffix.as_str()) {
                mismatches.push(format!(
                    "prompt `{}` does not end with `{suffix}`",
                    card.request.prompt
                ));
            }
        }
        mismatches
    }
}

#[allow(unused)]
pub fn read_case(path: &PathBuf) -> Result<(ForgeConfig, ForgeCase), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    let config = ForgeConfig::from_toml_str(&source)?;
    let case = toml::from_str::<ForgeCase>(&source)?;
    Ok((config, case))
}

#[allow(unused)]
pub fn forge_case(name: String, config: &ForgeConfig, case: &ForgeCase) -> ForgedCard {
    let name = name.replace('"', "");
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(SEED));
    let forge = CardForge::new(config);
    tracing::info_span!("forge", %name).in_scope(|| forge.forge(&case.input, &mut rng))
}

#[allow(unused)]
pub fn solid_art(color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(forge::IMAGE_WIDTH, forge::IMAGE_HEIGHT, color)
}

#[allow(unused)]
pub fn close_to(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    a.0.iter().zip(b.0.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}
