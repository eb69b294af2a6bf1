use image::RgbaImage;
use models::CardDescriptor;
use parser::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{
    card_name, synthesize_with, ForgeConfig, GenerationRequest, ImageGenerator, NarrativeStyle,
    PromptConfig,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ForgedCard {
    pub descriptor: CardDescriptor,
    pub name: String,
    pub narrative: String,
    pub request: GenerationRequest,
}

impl std::fmt::Display for ForgedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForgedCard<name={}, {}>", self.name, self.descriptor)
    }
}

/// Description in, card out. Holds no per-card state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardForge {
    parser: Parser,
    narrative_style: NarrativeStyle,
    prompt: PromptConfig,
}

impl CardForge {
    pub fn new(config: &ForgeConfig) -> Self {
        Self {
            parser: Parser::new(config.parser.options()),
            narrative_style: config.narrative.style,
            prompt: config.prompt.clone(),
        }
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn create_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn forge<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ForgedCard {
        let descriptor = self.parser.parse(text);
        let card = ForgedCard {
            name: card_name(&descriptor),
            narrative: self.narrative_style.narrate(&descriptor, rng),
            request: synthesize_with(&descriptor, &self.prompt),
            descriptor,
        };
        #[cfg(feature = "trace")]
        tracing::info!(%card, request = %card.request, "forged card");
        card
    }

    /// Art is all-or-nothing: a failing generator leaves the card without it.
    pub fn forge_with_art<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
        generator: &dyn ImageGenerator,
    ) -> (ForgedCard, Option<RgbaImage>) {
        let card = self.forge(text, rng);
        let art = match generator.generate(&card.request) {
            Ok(art) => Some(art),
            Err(_error) => {
                #[cfg(feature = "trace")]
                tracing::warn!(
                    error = %_error,
                    seed = card.request.seed,
                    "artwork generation failed"
                );
                None
            }
        };
        (card, art)
    }
}
