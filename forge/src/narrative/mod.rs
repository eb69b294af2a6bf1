mod describe;
mod sanitize;
mod templates;

pub use describe::describe;
pub use sanitize::{finalize, sanitize};
pub use templates::{fill, templates_for, FALLBACK_TEMPLATE};

use models::CardDescriptor;
use rand::{seq::IndexedRandom, Rng};
use serde::Deserialize;

use crate::TemplateKey;

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeStyle {
    /// One of three bucket templates, picked with the caller's rng.
    #[default]
    Templated,
    /// Composed from elements and stats; ignores the rng.
    Descriptive,
}

impl NarrativeStyle {
    pub fn narrate<R: Rng + ?Sized>(&self, card: &CardDescriptor, rng: &mut R) -> String {
        match self {
            NarrativeStyle::Templated => narrate(card, rng),
            NarrativeStyle::Descriptive => describe(card),
        }
    }
}

impl TryFrom<&str> for NarrativeStyle {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "templated" => Ok(NarrativeStyle::Templated),
            "descriptive" => Ok(NarrativeStyle::Descriptive),
            _ => anyhow::bail!("Unknown narrative style `{value}`"),
        }
    }
}

pub fn narrate<R: Rng + ?Sized>(card: &CardDescriptor, rng: &mut R) -> String {
    let key = TemplateKey::from(card);
    let template = templates_for(&key)
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_TEMPLATE);
    finalize(
        &fill(template, card.cost(), card.damage(), card.health()),
        card.cost(),
    )
}
