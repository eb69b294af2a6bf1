use models::{Archetype, CardDescriptor, CardStats, ExtractedNumbers};

use crate::{classify_normalized, extract_normalized, normalize, Classification, ParserOptions};

pub const TROOP_DAMAGE_PER_COST: u32 = 50;
pub const SPELL_DAMAGE_PER_COST: u32 = 70;
pub const TROOP_HEALTH_PER_COST: u32 = 150;
pub const SPAWNER_HEALTH_PER_COST: u32 = 300;

/// Merges explicit numbers with the classified profile. User numbers win over
/// defaults; defaults depend on the already resolved cost and the archetype.
pub fn build(
    extracted: &ExtractedNumbers,
    classification: &Classification,
    source_text: &str,
) -> CardDescriptor {
    merge(extracted, classification, source_text, true)
}

fn merge(
    extracted: &ExtractedNumbers,
    classification: &Classification,
    source_text: &str,
    track_duration: bool,
) -> CardDescriptor {
    let profile = &classification.profile;
    let archetype = profile.archetype;
    let cost = extracted.cost.unwrap_or(profile.base_cost).max(1);

    let damage = extracted.damage.unwrap_or_else(|| match archetype {
        Archetype::Spawner => 0,
        Archetype::Spell => cost.saturating_mul(SPELL_DAMAGE_PER_COST),
        Archetype::Troop => cost.saturating_mul(TROOP_DAMAGE_PER_COST),
    });
    let health = extracted.health.unwrap_or_else(|| match archetype {
        Archetype::Spell => 0,
        Archetype::Spawner => cost.saturating_mul(SPAWNER_HEALTH_PER_COST),
        Archetype::Troop => cost.saturating_mul(TROOP_HEALTH_PER_COST),
    });
    let duration = match archetype {
        Archetype::Spell if track_duration => extracted.duration.unwrap_or(profile.base_duration),
        _ => 0,
    };

    CardDescriptor::new(
        archetype,
        profile.character,
        CardStats {
            cost,
            damage,
            health,
            duration,
        },
        classification.elements.clone(),
        source_text,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn extract(&self, text: &str) -> ExtractedNumbers {
        extract_normalized(&normalize(text, &self.options), &self.options)
    }

    pub fn classify(&self, text: &str) -> Classification {
        classify_normalized(&normalize(text, &self.options))
    }

    pub fn build(
        &self,
        extracted: &ExtractedNumbers,
        classification: &Classification,
        source_text: &str,
    ) -> CardDescriptor {
        merge(
            extracted,
            classification,
            source_text,
            self.options.track_duration,
        )
    }

    pub fn parse(&self, text: &str) -> CardDescriptor {
        let normalized = normalize(text, &self.options);
        let extracted = extract_normalized(&normalized, &self.options);
        let classification = classify_normalized(&normalized);
        let descriptor = self.build(&extracted, &classification, text);
        #[cfg(feature = "trace")]
        tracing::debug!(%extracted, %classification, %descriptor, "parsed card description");
        descriptor
    }
}

/// Parses with the precise options.
pub fn parse(text: &str) -> CardDescriptor {
    Parser::default().parse(text)
}
