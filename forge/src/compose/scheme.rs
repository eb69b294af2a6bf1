use image::Rgba;
use models::Rarity;

pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

pub const CANVAS: Rgba<u8> = rgb(0x1A, 0x1A, 0x1A);
pub const ART_PANEL: Rgba<u8> = rgb(0x2C, 0x3E, 0x50);
pub const INFO_PANEL: Rgba<u8> = rgb(0x34, 0x49, 0x5E);
pub const WHITE: Rgba<u8> = rgb(0xFF, 0xFF, 0xFF);
pub const TYPE_LABEL: Rgba<u8> = rgb(0x34, 0x98, 0xDB);
pub const DAMAGE_LABEL: Rgba<u8> = rgb(0xE7, 0x4C, 0x3C);
pub const HEALTH_LABEL: Rgba<u8> = rgb(0x27, 0xAE, 0x60);
pub const DURATION_LABEL: Rgba<u8> = rgb(0xF3, 0x9C, 0x12);
pub const NARRATIVE_TEXT: Rgba<u8> = rgb(0xBD, 0xC3, 0xC7);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityScheme {
    pub border: Rgba<u8>,
    pub background: Rgba<u8>,
    pub cost_badge: Rgba<u8>,
}

impl From<Rarity> for RarityScheme {
    fn from(rarity: Rarity) -> Self {
        let (border, background, cost_badge) = match rarity {
            Rarity::Common => (
                rgb(0xC0, 0xC0, 0xC0),
                rgb(0xE8, 0xE8, 0xE8),
                rgb(0x4A, 0x90, 0xE2),
            ),
            Rarity::Rare => (
                rgb(0xFF, 0x8C, 0x00),
                rgb(0xFF, 0xE4, 0xB5),
                rgb(0xFF, 0x6B, 0x35),
            ),
            Rarity::Epic => (
                rgb(0x99, 0x32, 0xCC),
                rgb(0xE6, 0xE6, 0xFA),
                rgb(0x8E, 0x44, 0xAD),
            ),
            Rarity::Legendary => (
                rgb(0xFF, 0xD7, 0x00),
                rgb(0xFF, 0xF8, 0xDC),
                rgb(0xF3, 0x9C, 0x12),
            ),
        };
        Self {
            border,
            background,
            cost_badge,
        }
    }
}
