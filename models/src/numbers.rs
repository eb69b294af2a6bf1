use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Cost,
    Damage,
    Health,
    Duration,
}

impl Stat {
    pub const ALL: [Stat; 4] = [Stat::Cost, Stat::Damage, Stat::Health, Stat::Duration];
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stat::Cost => write!(f, "cost"),
            Stat::Damage => write!(f, "damage"),
            Stat::Health => write!(f, "health"),
            Stat::Duration => write!(f, "duration"),
        }
    }
}

/// Numbers the user wrote explicitly. `None` means "not mentioned", never zero.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractedNumbers {
    pub cost: Option<u32>,
    pub damage: Option<u32>,
    pub health: Option<u32>,
    pub duration: Option<u32>,
}

impl ExtractedNumbers {
    pub fn get(&self, stat: Stat) -> Option<u32> {
        match stat {
            Stat::Cost => self.cost,
            Stat::Damage => self.damage,
            Stat::Health => self.health,
            Stat::Duration => self.duration,
        }
    }

    pub fn set(&mut self, stat: Stat, value: Option<u32>) {
        match stat {
            Stat::Cost => self.cost = value,
            Stat::Damage => self.damage = value,
            Stat::Health => self.health = value,
            Stat::Duration => self.duration = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Stat::ALL.iter().all(|s| self.get(*s).is_none())
    }
}

impl std::fmt::Display for ExtractedNumbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = Stat::ALL
            .iter()
            .map(|s| match self.get(*s) {
                Some(v) => format!("{s}={v}"),
                None => format!("{s}=_"),
            })
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "ExtractedNumbers<{fields}>")
    }
}
