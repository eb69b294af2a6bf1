use image::{Rgba, RgbaImage};
use models::Element;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::GenerationRequest;

/// Turns a generation request into card art. Implementations own their
/// timeout and retry policy; an `Err` means no art for this card.
pub trait ImageGenerator {
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<RgbaImage>;
}

impl<F> ImageGenerator for F
where
    F: Fn(&GenerationRequest) -> anyhow::Result<RgbaImage>,
{
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<RgbaImage> {
        self(request)
    }
}

/// Offline stand-in: a vertical gradient tinted by the card's first element
/// with seeded speckles, so the same request always yields the same image.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderArtwork {
    pub element: Option<Element>,
}

impl PlaceholderArtwork {
    pub fn new(element: Option<Element>) -> Self {
        Self { element }
    }

    fn palette(&self) -> ([u8; 3], [u8; 3]) {
        match self.element {
            Some(Element::Ice) => ([0xD6, 0xF0, 0xFF], [0x2E, 0x6F, 0xB5]),
            Some(Element::Fire) => ([0xFF, 0xC8, 0x57], [0xA8, 0x20, 0x10]),
            Some(Element::Electric) => ([0xFF, 0xF5, 0x9D], [0x4B, 0x2C, 0x8F]),
            Some(Element::Poison) => ([0xC5, 0xF2, 0x7A], [0x1E, 0x5B, 0x2A]),
            None => ([0x9F, 0xB8, 0xC8], [0x2C, 0x3E, 0x50]),
        }
    }
}

impl ImageGenerator for PlaceholderArtwork {
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<RgbaImage> {
        let (width, height) = (request.params.width, request.params.height);
        if width == 0 || height == 0 {
            anyhow::bail!("Cannot render {width}x{height} artwork");
        }
        let (top, bottom) = self.palette();
        let mut rng = StdRng::seed_from_u64(u64::from(request.seed));
        let mut art = RgbaImage::from_fn(width, height, |_, y| {
            let t = y as f32 / height as f32;
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
            Rgba([
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                255,
            ])
        });
        for _ in 0..(width * height / 400) {
            let (x, y) = (rng.random_range(0..width), rng.random_range(0..height));
            art.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
        Ok(art)
    }
}
