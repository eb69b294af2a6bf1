mod scheme;
mod shapes;
mod text;

pub use scheme::*;
pub use shapes::*;
pub use text::*;

use std::path::Path;

use anyhow::Context;
use image::{imageops::FilterType, RgbaImage};
use models::Archetype;

use crate::{
    ForgedCard, ART_HEIGHT, ART_WIDTH, CARD_HEIGHT, CARD_WIDTH, DAMAGE_BAR_REFERENCE,
    DESCRIPTION_LINE_CHARS, DESCRIPTION_MAX_LINES, HEALTH_BAR_REFERENCE,
};

const FRAME: Rect = Rect::new(15, 15, CARD_WIDTH as i64 - 15, CARD_HEIGHT as i64 - 15);
const ART_AREA: Rect = Rect::new(40, 120, CARD_WIDTH as i64 - 40, 420);
const INFO_AREA: Rect = Rect::new(40, 440, CARD_WIDTH as i64 - 40, CARD_HEIGHT as i64 - 20);
const COST_CENTER: (i64, i64) = (75, 75);
const COST_RADIUS: i64 = 40;
const ART_ORIGIN: (i64, i64) = (45, 125);

const TITLE_Y: u32 = 460;
const TYPE_Y: u32 = 485;
const STATS_Y: u32 = 510;
const BAR_Y: i64 = 532;
const BAR_WIDTH: i64 = 200;
const BAR_HEIGHT: i64 = 5;
const NARRATIVE_Y: u32 = 545;
const NARRATIVE_LINE_HEIGHT: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct CardComposition {
    pub image: RgbaImage,
    pub text: Vec<TextRun>,
}

impl CardComposition {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Could not write card image `{}`", path.display()))
    }
}

pub fn compose(card: &ForgedCard, art: Option<&RgbaImage>) -> CardComposition {
    let descriptor = &card.descriptor;
    let rarity = descriptor.rarity();
    let scheme = RarityScheme::from(rarity);
    let mut image = RgbaImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, CANVAS);
    let mut text = Vec::new();

    rounded_panel(&mut image, FRAME, 25, scheme.background, scheme.border, 6);

    let (cx, cy) = COST_CENTER;
    ringed_circle(&mut image, cx, cy, COST_RADIUS + 4, WHITE, scheme.border, 3);
    ringed_circle(&mut image, cx, cy, COST_RADIUS, scheme.cost_badge, WHITE, 2);
    let cost = descriptor.cost().to_string();
    text.push(TextRun::new(cost, cx as u32, cy as u32, 32, WHITE).centered());

    rounded_panel(&mut image, ART_AREA, 20, ART_PANEL, scheme.border, 4);
    if let Some(art) = art {
        let resized = image::imageops::resize(art, ART_WIDTH, ART_HEIGHT, FilterType::Lanczos3);
        image::imageops::overlay(&mut image, &resized, ART_ORIGIN.0, ART_ORIGIN.1);
    }

    rounded_panel(&mut image, INFO_AREA, 15, INFO_PANEL, scheme.border, 3);
    text.push(TextRun::new(card.name.as_str(), 60, TITLE_Y, 18, WHITE));
    text.push(TextRun::new(rarity.label(), CARD_WIDTH - 120, TITLE_Y, 16, scheme.border));
    text.push(TextRun::new(descriptor.archetype().label(), 60, TYPE_Y, 16, TYPE_LABEL));

    let (damage, health) = (descriptor.damage(), descriptor.health());
    match descriptor.archetype() {
        Archetype::Spell => {
            text.push(TextRun::new("DAÑO", 60, STATS_Y, 16, DAMAGE_LABEL));
            text.push(TextRun::new(damage.to_string(), 150, STATS_Y, 16, WHITE));
            text.push(TextRun::new("DURACIÓN", 250, STATS_Y, 16, DURATION_LABEL));
            let shown = match descriptor.duration() {
                1 => "Instant.".to_string(),
                d => format!("{d}s"),
            };
            text.push(TextRun::new(shown, 360, STATS_Y, 16, WHITE));
            stat_bar(&mut image, 60, damage, DAMAGE_BAR_REFERENCE, DAMAGE_LABEL);
        }
        Archetype::Spawner => {
            text.push(TextRun::new("VIDA", 60, STATS_Y, 16, HEALTH_LABEL));
            text.push(TextRun::new(health.to_string(), 150, STATS_Y, 16, WHITE));
            stat_bar(&mut image, 60, health, HEALTH_BAR_REFERENCE, HEALTH_LABEL);
        }
        Archetype::Troop => {
            text.push(TextRun::new("DAÑO", 60, STATS_Y, 16, DAMAGE_LABEL));
            text.push(TextRun::new(damage.to_string(), 140, STATS_Y, 16, WHITE));
            text.push(TextRun::new("VIDA", 220, STATS_Y, 16, HEALTH_LABEL));
            text.push(TextRun::new(health.to_string(), 300, STATS_Y, 16, WHITE));
            stat_bar(&mut image, 60, damage, DAMAGE_BAR_REFERENCE, DAMAGE_LABEL);
            stat_bar(&mut image, 300, health, HEALTH_BAR_REFERENCE, HEALTH_LABEL);
        }
    }

    let lines = clamp_lines(&card.narrative, DESCRIPTION_LINE_CHARS, DESCRIPTION_MAX_LINES);
    for (i, line) in lines.into_iter().enumerate() {
        let y = NARRATIVE_Y + i as u32 * NARRATIVE_LINE_HEIGHT;
        text.push(TextRun::new(line, 60, y, 11, NARRATIVE_TEXT));
    }

    CardComposition { image, text }
}

fn stat_bar(image: &mut RgbaImage, x: i64, value: u32, reference: u32, color: image::Rgba<u8>) {
    let track = Rect::new(x, BAR_Y, x + BAR_WIDTH - 1, BAR_Y + BAR_HEIGHT - 1);
    fill_rounded_rect(image, track, 2, ART_PANEL);
    let filled = i64::from(value.min(reference)) * BAR_WIDTH / i64::from(reference.max(1));
    if filled > 0 {
        let bar = Rect::new(x, BAR_Y, x + filled - 1, BAR_Y + BAR_HEIGHT - 1);
        fill_rounded_rect(image, bar, 2, color);
    }
}
