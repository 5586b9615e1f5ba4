//! Raster primitives over an RGB canvas
//!
//! The `image` crate gives us the pixel buffer and the PNG encoder but no shape
//! rasterizer, so the handful of shapes the icon needs are drawn here directly.
//! Coordinates are integer pixel positions and bounding boxes are inclusive on
//! both ends. Every primitive clips to the canvas.

use image::{Rgb, RgbImage};

/// Fully opaque, the source color replaces the canvas pixel.
pub const OPAQUE: u8 = 255;

/// A rectangle whose corners are replaced by circular arcs of `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: i32,
}

impl RoundedRect {
    /// Creates a rounded rectangle from two inclusive corners.
    ///
    /// The radius is clamped so two opposite arcs never overlap.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32, radius: i32) -> Self {
        let half_extent = ((right - left).min(bottom - top) / 2).max(0);
        Self {
            left,
            top,
            right,
            bottom,
            radius: radius.clamp(0, half_extent),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// Whether the pixel at `(x, y)` lies inside the shape.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.is_empty()
            || x < self.left
            || x > self.right
            || y < self.top
            || y > self.bottom
        {
            return false;
        }

        // Distance from the straight part of the nearest edge; zero away from corners
        let r = self.radius;
        let dx = (self.left + r - x).max(x - (self.right - r)).max(0);
        let dy = (self.top + r - y).max(y - (self.bottom - r)).max(0);
        dx * dx + dy * dy <= r * r
    }

    /// Shrinks the shape by `amount` on every side, keeping the corners concentric.
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
            radius: (self.radius - amount).max(0),
        }
    }
}

/// Mixes `src` over `dst` with `alpha` in 0..=255.
pub fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    if alpha == OPAQUE {
        return src;
    }

    let a = alpha as u32;
    let mix = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
    Rgb([mix(dst[0], src[0]), mix(dst[1], src[1]), mix(dst[2], src[2])])
}

/// Paints the whole row `y` with a single solid color.
pub fn fill_row(img: &mut RgbImage, y: u32, color: Rgb<u8>) {
    if y >= img.height() {
        return;
    }
    for x in 0..img.width() {
        img.put_pixel(x, y, color);
    }
}

/// Fills the interior of `rect`.
pub fn fill_rounded_rect(img: &mut RgbImage, rect: &RoundedRect, color: Rgb<u8>, alpha: u8) {
    paint_where(img, rect, alpha, color, |x, y| rect.contains(x, y));
}

/// Draws the outline of `rect`, `width` pixels thick, growing inward from its edge.
pub fn stroke_rounded_rect(
    img: &mut RgbImage,
    rect: &RoundedRect,
    width: i32,
    color: Rgb<u8>,
    alpha: u8,
) {
    let inner = rect.inset(width.max(1));
    paint_where(img, rect, alpha, color, |x, y| {
        rect.contains(x, y) && !inner.contains(x, y)
    });
}

/// Fills a circle of `radius` centered on `(cx, cy)`.
pub fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>, alpha: u8) {
    let bounds = RoundedRect::new(cx - radius, cy - radius, cx + radius, cy + radius, 0);
    let r2 = radius * radius;
    paint_where(img, &bounds, alpha, color, |x, y| {
        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= r2
    });
}

// Visits every canvas pixel inside `bounds` and blends `color` where `inside` holds
fn paint_where<F>(img: &mut RgbImage, bounds: &RoundedRect, alpha: u8, color: Rgb<u8>, inside: F)
where
    F: Fn(i32, i32) -> bool,
{
    if bounds.is_empty() || img.width() == 0 || img.height() == 0 {
        return;
    }

    let x0 = bounds.left.max(0);
    let y0 = bounds.top.max(0);
    let x1 = bounds.right.min(img.width() as i32 - 1);
    let y1 = bounds.bottom.min(img.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside(x, y) {
                let pixel = img.get_pixel_mut(x as u32, y as u32);
                *pixel = blend(*pixel, color, alpha);
            }
        }
    }
}
