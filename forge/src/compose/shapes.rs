use image::{Rgba, RgbaImage};

/// Inclusive pixel bounds, clipped to the image when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn inset(&self, by: i64) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    fn contains_rounded(&self, x: i64, y: i64, radius: i64) -> bool {
        let cx = x.clamp(self.x0 + radius, self.x1 - radius);
        let cy = y.clamp(self.y0 + radius, self.y1 - radius);
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy <= radius * radius
    }
}

fn fill_where(
    image: &mut RgbaImage,
    area: Rect,
    color: Rgba<u8>,
    inside: impl Fn(i64, i64) -> bool,
) {
    let (width, height) = (image.width() as i64, image.height() as i64);
    for y in area.y0.max(0)..=area.y1.min(height - 1) {
        for x in area.x0.max(0)..=area.x1.min(width - 1) {
            if inside(x, y) {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

pub fn fill_rounded_rect(image: &mut RgbaImage, rect: Rect, radius: i64, color: Rgba<u8>) {
    if rect.is_empty() {
        return;
    }
    let radius = radius
        .max(0)
        .min((rect.x1 - rect.x0) / 2)
        .min((rect.y1 - rect.y0) / 2);
    fill_where(image, rect, color, |x, y| rect.contains_rounded(x, y, radius));
}

/// Outline of `width` pixels drawn inward, interior filled with `fill`.
pub fn rounded_panel(
    image: &mut RgbaImage,
    rect: Rect,
    radius: i64,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: i64,
) {
    fill_rounded_rect(image, rect, radius, outline);
    fill_rounded_rect(image, rect.inset(width), radius - width, fill);
}

pub fn fill_circle(image: &mut RgbaImage, cx: i64, cy: i64, radius: i64, color: Rgba<u8>) {
    if radius <= 0 {
        return;
    }
    let area = Rect::new(cx - radius, cy - radius, cx + radius, cy + radius);
    fill_where(image, area, color, |x, y| {
        let (dx, dy) = (x - cx, y - cy);
        dx * dx + dy * dy <= radius * radius
    });
}

pub fn ringed_circle(
    image: &mut RgbaImage,
    cx: i64,
    cy: i64,
    radius: i64,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    width: i64,
) {
    fill_circle(image, cx, cy, radius, outline);
    fill_circle(image, cx, cy, radius - width, fill);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn rounded_corners_stay_clear() {
        let mut image = RgbaImage::new(20, 20);
        fill_rounded_rect(&mut image, Rect::new(0, 0, 19, 19), 6, RED);
        assert_eq!(*image.get_pixel(0, 0), CLEAR);
        assert_eq!(*image.get_pixel(10, 0), RED);
        assert_eq!(*image.get_pixel(10, 10), RED);
    }

    #[test]
    fn panel_outline_surrounds_fill() {
        let mut image = RgbaImage::new(30, 30);
        rounded_panel(&mut image, Rect::new(0, 0, 29, 29), 4, BLUE, RED, 3);
        assert_eq!(*image.get_pixel(15, 1), RED);
        assert_eq!(*image.get_pixel(15, 15), BLUE);
    }

    #[test]
    fn shapes_clip_to_the_image() {
        let mut image = RgbaImage::new(10, 10);
        fill_circle(&mut image, -5, -5, 8, RED);
        fill_rounded_rect(&mut image, Rect::new(5, 5, 40, 40), 2, BLUE);
        assert_eq!(*image.get_pixel(0, 0), RED);
        assert_eq!(*image.get_pixel(9, 9), BLUE);
    }
}
