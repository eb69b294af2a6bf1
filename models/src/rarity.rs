use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn from_cost(cost: u32) -> Self {
        match cost {
            0..=2 => Rarity::Common,
            3..=4 => Rarity::Rare,
            5..=6 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "COMÚN",
            Rarity::Rare => "RARO",
            Rarity::Epic => "ÉPICO",
            Rarity::Legendary => "LEGENDARIO",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
