use std::path::PathBuf;

use models::{Archetype, CardDescriptor, Element};
use parser::{Parser, ParserVariant};
use serde::Deserialize;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub input: String,
    #[serde(default)]
    pub variant: ParserVariant,
    pub expected: ExpectedCard,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedCard {
    pub cost: u32,
    pub damage: u32,
    pub health: u32,
    pub duration: u32,
    #[serde(rename = "type")]
    pub archetype: Archetype,
    pub character: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl ExpectedCard {
    #[allow(unused)]
    pub fn mismatches(&self, card: &CardDescriptor) -> Vec<String> {
        let mut mismatches = Vec::new();
        let mut check = |field: &str, expected: String, actual: String| {
            if expected != actual {
                mismatches.push(format!("{field}: expected `{expected}` got `{actual}`"));
            }
        };
        check("cost", self.cost.to_string(), card.cost().to_string());
        check("damage", self.damage.to_string(), card.damage().to_string());
        check("health", self.health.to_string(), card.health().to_string());
        check("duration", self.duration.to_string(), card.duration().to_string());
        check("type", self.archetype.to_string(), card.archetype().to_string());
        check("character", self.character.clone(), card.character().to_string());
        let elements: models::ElementSet = self.elements.iter().copied().collect();
        check("elements", elements.to_string(), card.elements().to_string());
        mismatches
    }
}

#[allow(unused)]
pub fn read_scenario(path: &PathBuf) -> Result<Scenario, Box<dyn std::error::Error>> {
    let scenario_str = std::fs::read_to_string(path)?;
    let scenario = toml::from_str::<Scenario>(&scenario_str)?;
    Ok(scenario)
}

#[allow(unused)]
pub fn run_scenario(scenario: &Scenario) -> CardDescriptor {
    Parser::new(scenario.variant.options()).parse(&scenario.input)
}

#[allow(unused)]
pub fn assert_invariants(card: &CardDescriptor) {
    assert!(card.cost() >= 1, "cost below 1 in {card}");
    if card.archetype() != Archetype::Spell {
        assert_eq!(card.duration(), 0, "non-spell with duration in {card}");
    }
    if card.archetype() == Archetype::Spawner {
        assert_eq!(card.damage(), 0, "spawner with damage in {card}");
    }
}
