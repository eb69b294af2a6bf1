use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Troop,
    Spell,
    Spawner,
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Troop => "TROPA",
            Archetype::Spell => "HECHIZO",
            Archetype::Spawner => "EDIFICIO",
        }
    }

    pub fn has_duration(&self) -> bool {
        matches!(self, Archetype::Spell)
    }

    pub fn deals_damage(&self) -> bool {
        !matches!(self, Archetype::Spawner)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Archetype::Troop => write!(f, "Troop"),
            Archetype::Spell => write!(f, "Spell"),
            Archetype::Spawner => write!(f, "Spawner"),
        }
    }
}

/// Base stats a classified card falls back on when the description omits them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub base_cost: u32,
    pub character: &'static str,
    pub base_duration: u32,
}

impl ArchetypeProfile {
    pub const fn troop(character: &'static str, base_cost: u32) -> Self {
        Self {
            archetype: Archetype::Troop,
            base_cost,
            character,
            base_duration: 0,
        }
    }

    pub const fn spell(character: &'static str, base_cost: u32, base_duration: u32) -> Self {
        Self {
            archetype: Archetype::Spell,
            base_cost,
            character,
            base_duration,
        }
    }

    pub const fn spawner(character: &'static str, base_cost: u32) -> Self {
        Self {
            archetype: Archetype::Spawner,
            base_cost,
            character,
            base_duration: 0,
        }
    }
}

impl std::fmt::Display for ArchetypeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<character={}, base_cost={}, base_duration={}>",
            self.archetype, self.character, self.base_cost, self.base_duration
        )
    }
}
