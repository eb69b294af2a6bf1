pub const IMAGE_WIDTH: u32 = 512;
pub const IMAGE_HEIGHT: u32 = 640;
pub const SEED_MODULUS: u32 = 1_000_000;

pub const MIN_NARRATIVE_WORDS: usize = 8;

pub const CARD_WIDTH: u32 = 600;
pub const CARD_HEIGHT: u32 = 800;
pub const ART_WIDTH: u32 = 520;
pub const ART_HEIGHT: u32 = 290;
pub const DESCRIPTION_LINE_CHARS: usize = 45;
pub const DESCRIPTION_MAX_LINES: usize = 8;

// Stat bars are drawn relative to these values and clamp above them.
pub const DAMAGE_BAR_REFERENCE: u32 = 1000;
pub const HEALTH_BAR_REFERENCE: u32 = 4000;
