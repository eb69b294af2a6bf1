use serde::Serialize;

use super::{Archetype, ElementSet, Rarity};

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardStats {
    pub cost: u32,
    pub damage: u32,
    pub health: u32,
    pub duration: u32,
}

/// Fully resolved card. Construction enforces the category gates:
/// cost is at least 1, only spells keep a duration and spawners deal no damage.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor {
    cost: u32,
    damage: u32,
    health: u32,
    duration: u32,
    #[serde(rename = "type")]
    archetype: Archetype,
    character: String,
    elements: ElementSet,
    source_text: String,
}

impl CardDescriptor {
    pub fn new<C: Into<String>, S: Into<String>>(
        archetype: Archetype,
        character: C,
        stats: CardStats,
        elements: ElementSet,
        source_text: S,
    ) -> Self {
        Self {
            cost: stats.cost.max(1),
            damage: if archetype.deals_damage() {
                stats.damage
            } else {
                0
            },
            health: stats.health,
            duration: if archetype.has_duration() {
                stats.duration
            } else {
                0
            },
            archetype,
            character: character.into(),
            elements,
            source_text: source_text.into(),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn stats(&self) -> CardStats {
        CardStats {
            cost: self.cost,
            damage: self.damage,
            health: self.health,
            duration: self.duration,
        }
    }

    pub fn rarity(&self) -> Rarity {
        Rarity::from_cost(self.cost)
    }
}

impl std::fmt::Display for CardDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card<type={}, character={}, cost={}, damage={}, health={}, duration={}, elements={}>",
            self.archetype,
            self.character,
            self.cost,
            self.damage,
            self.health,
            self.duration,
            self.elements
        )
    }
}
