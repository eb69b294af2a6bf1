use forge::{CardComposition, ForgedCard, TextRun};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Report<'a> {
    pub card: &'a ForgedCard,
    pub rarity: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a [TextRun]>,
}

impl<'a> Report<'a> {
    pub fn new(card: &'a ForgedCard, composition: Option<&'a CardComposition>) -> Self {
        Self {
            card,
            rarity: card.descriptor.rarity().label(),
            text: composition.map(|c| c.text.as_slice()),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let card = &self.card.descriptor;
        writeln!(f, "{} ({})", self.card.name, self.rarity)?;
        writeln!(f, "  Tipo:     {}", card.archetype().label())?;
        writeln!(f, "  Coste:    {} elixir", card.cost())?;
        writeln!(f, "  Daño:     {}", card.damage())?;
        writeln!(f, "  Vida:     {}", card.health())?;
        if card.archetype().has_duration() {
            writeln!(f, "  Duración: {}s", card.duration())?;
        }
        if !card.elements().is_empty() {
            writeln!(f, "  Elementos: {}", card.elements())?;
        }
        writeln!(f, "  Narrativa: {}", self.card.narrative)?;
        write!(f, "  Prompt:   {} (seed {})", self.card.request.prompt, self.card.request.seed)
    }
}
