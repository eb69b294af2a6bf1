use md5::{Digest, Md5};
use models::{Archetype, CardDescriptor, Element};
use serde::{Deserialize, Serialize};

use crate::{IMAGE_HEIGHT, IMAGE_WIDTH, SEED_MODULUS};

const SPELL_SUBJECT: &str = "magical spell effect, mystical energy projectile, spell casting magic";
const BUILDING_SUBJECT: &str = "defensive tower building, cannon tower, medieval fortress";
const STYLE_SUFFIX: &str =
    "mobile strategy game art style, cartoonish 3D render, detailed character design";
const NEGATIVE_PROMPT: &str =
    "realistic photo, blurry, low quality, text, watermark, modern clothing";

/// Matched against the lower-cased character label; first hit wins.
const SUBJECTS: &[(&[&str], &str)] = &[
    (
        &["golem"],
        "massive stone golem creature, rock giant warrior, elemental golem",
    ),
    (
        &["gigante"],
        "giant warrior, towering giant fighter, massive giant",
    ),
    (
        &["caballero"],
        "armored knight warrior, medieval knight champion",
    ),
    (
        &["dragón", "dragon"],
        "majestic dragon creature, flying dragon beast, fantasy dragon",
    ),
    (
        &["arquero"],
        "skilled archer warrior, bow-wielding archer, archer champion",
    ),
    (
        &["mago"],
        "magical wizard sorcerer, staff-wielding wizard, arcane mage",
    ),
    (
        &[
            "hechizo",
            "rayo",
            "veneno",
            "bola de fuego",
            "flechas",
            "ralentizar",
            "congelar",
        ],
        SPELL_SUBJECT,
    ),
    (&["torre", "cañón", "mortero"], BUILDING_SUBJECT),
];

fn element_effects(element: Element) -> &'static [&'static str] {
    match element {
        Element::Ice => &["ice crystals", "frozen effects", "blue frost aura", "winter magic"],
        Element::Fire => &["flames", "fire effects", "orange burning", "blazing aura"],
        Element::Electric => &["lightning bolts", "electrical energy", "yellow sparks"],
        Element::Poison => &["poison effects", "toxic aura", "green poison"],
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    pub style_suffix: String,
    pub negative_prompt: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            style_suffix: STYLE_SUFFIX.to_string(),
            negative_prompt: NEGATIVE_PROMPT.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub steps: u32,
    pub guidance_scale: f32,
    pub width: u32,
    pub height: u32,
}

impl GenerationParams {
    pub fn for_cost(cost: u32) -> Self {
        let (steps, guidance_scale) = if cost >= 6 { (40, 9.5) } else { (30, 8.5) };
        Self {
            steps,
            guidance_scale,
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        }
    }
}

/// Everything an image generator needs to render the card art.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub params: GenerationParams,
    pub seed: u32,
}

impl std::fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GenerationRequest<seed={}, steps={}, guidance={}, {}x{}>",
            self.seed,
            self.params.steps,
            self.params.guidance_scale,
            self.params.width,
            self.params.height
        )
    }
}

pub fn subject_for(card: &CardDescriptor) -> String {
    let character = card.character().to_lowercase();
    if let Some((_, subject)) = SUBJECTS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| character.contains(k)))
    {
        return subject.to_string();
    }
    match card.archetype() {
        Archetype::Spell => SPELL_SUBJECT.to_string(),
        Archetype::Spawner => BUILDING_SUBJECT.to_string(),
        Archetype::Troop => format!("medieval fantasy warrior, {character} fighter"),
    }
}

/// First eight hex digits of the prompt's MD5, reduced to a six digit seed.
pub fn seed_for_prompt(prompt: &str) -> u32 {
    let digest = Md5::digest(prompt.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % SEED_MODULUS
}

pub fn synthesize(card: &CardDescriptor) -> GenerationRequest {
    synthesize_with(card, &PromptConfig::default())
}

pub fn synthesize_with(card: &CardDescriptor, config: &PromptConfig) -> GenerationRequest {
    let mut fragments = vec![subject_for(card)];
    fragments.extend(
        card.elements()
            .iter()
            .flat_map(element_effects)
            .map(|effect| effect.to_string()),
    );
    fragments.push(config.style_suffix.clone());
    let prompt = fragments.join(", ");
    GenerationRequest {
        seed: seed_for_prompt(&prompt),
        prompt,
        negative_prompt: config.negative_prompt.clone(),
        params: GenerationParams::for_cost(card.cost()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{CardStats, ElementSet};

    fn card(
        archetype: Archetype,
        character: &str,
        cost: u32,
        elements: &[Element],
    ) -> CardDescriptor {
        CardDescriptor::new(
            archetype,
            character,
            CardStats {
                cost,
                ..Default::default()
            },
            elements.iter().copied().collect::<ElementSet>(),
            "",
        )
    }

    #[test]
    fn subject_table_beats_archetype() {
        let dragon = card(Archetype::Troop, "Dragón", 4, &[]);
        assert!(subject_for(&dragon).starts_with("majestic dragon"));
        let cannon = card(Archetype::Spawner, "Cañón", 3, &[]);
        assert_eq!(subject_for(&cannon), BUILDING_SUBJECT);
        let warrior = card(Archetype::Troop, "Guerrero", 4, &[]);
        assert_eq!(
            subject_for(&warrior),
            "medieval fantasy warrior, guerrero fighter"
        );
    }

    #[test]
    fn element_fragments_follow_canonical_order() {
        let golem = card(Archetype::Troop, "Golem", 8, &[Element::Fire, Element::Ice]);
        let request = synthesize(&golem);
        let ice = request.prompt.find("ice crystals");
        let fire = request.prompt.find("flames");
        assert!(ice.is_some() && fire.is_some());
        assert!(ice < fire);
        assert!(request.prompt.ends_with(&PromptConfig::default().style_suffix));
    }

    #[test]
    fn params_depend_on_cost() {
        assert_eq!(GenerationParams::for_cost(6).steps, 40);
        assert_eq!(GenerationParams::for_cost(6).guidance_scale, 9.5);
        assert_eq!(GenerationParams::for_cost(5).steps, 30);
        assert_eq!(GenerationParams::for_cost(5).guidance_scale, 8.5);
        assert_eq!(GenerationParams::for_cost(1).width, 512);
        assert_eq!(GenerationParams::for_cost(1).height, 640);
    }

    #[test]
    fn seed_matches_md5_prefix() {
        assert_eq!(seed_for_prompt("a golem"), 902291);
        assert_eq!(seed_for_prompt(""), 706393);
        assert_eq!(seed_for_prompt("massive stone golem creature"), 91262);
    }

    #[test]
    fn seed_is_stable_and_bounded() {
        let a = seed_for_prompt("a golem");
        assert_eq!(a, seed_for_prompt("a golem"));
        assert!(a < SEED_MODULUS);
        assert!(seed_for_prompt("") < SEED_MODULUS);
    }
}
