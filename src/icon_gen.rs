use crate::draw::{self, RoundedRect, OPAQUE};
use crate::error::IconError;
use crate::manifest::{ManifestFile, ManifestIcon};
use anyhow::{Context, Result};
use image::{DynamicImage, ImageError, ImageFormat, ImageOutputFormat, Rgb, RgbImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Cursor, Write},
    path::{Path, PathBuf},
};

/// Icon sizes a PWA manifest needs, smallest first.
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Largest side length accepted, keeping pixel coordinates well inside `i32`.
pub const MAX_SIZE: u32 = 16384;

/// Top row of the background (#4F46E5).
pub const GRADIENT_START: Rgb<u8> = Rgb([79, 70, 229]);

/// Color the background heads towards at the bottom (#7C3AED).
pub const GRADIENT_END: Rgb<u8> = Rgb([124, 58, 237]);

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Opacity of the decorative frame drawn inside the icon edge.
pub const FRAME_ALPHA: u8 = 50;

/// Vertical two-color background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: GRADIENT_START,
            end: GRADIENT_END,
        }
    }
}

impl Gradient {
    /// Color of row `y` on a canvas `size` pixels tall.
    ///
    /// The ratio is `y / size`, so the last row stops one step short of `end`.
    pub fn color_at(&self, y: u32, size: u32) -> Rgb<u8> {
        let ratio = y as f64 / size as f64;
        let channel = |start: u8, end: u8| {
            (start as f64 + (end as f64 - start as f64) * ratio) as u8
        };

        Rgb([
            channel(self.start[0], self.end[0]),
            channel(self.start[1], self.end[1]),
            channel(self.start[2], self.end[2]),
        ])
    }
}

/// Everything a generation run needs, fixed before the first icon is drawn.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub gradient: Gradient,
    pub manifest: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            gradient: Gradient::default(),
            manifest: false,
        }
    }
}

/// Geometry of the cart glyph for one icon size.
///
/// All values come from integer division of `size`, so small icons round
/// slightly differently from large ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartGlyph {
    pub cart_size: u32,
    pub x: u32,
    pub y: u32,
    pub body_radius: u32,
    pub wheel_radius: u32,
}

impl CartGlyph {
    pub fn new(size: u32) -> Self {
        let cart_size = size / 3;
        Self {
            cart_size,
            x: size / 2 - cart_size / 2,
            y: size / 2 - cart_size / 4,
            body_radius: cart_size / 20,
            wheel_radius: cart_size / 8,
        }
    }

    /// The cart body, half as tall as it is wide.
    pub fn body(&self) -> RoundedRect {
        RoundedRect::new(
            self.x as i32,
            self.y as i32,
            (self.x + self.cart_size) as i32,
            (self.y + self.cart_size / 2) as i32,
            self.body_radius as i32,
        )
    }

    /// Centers of the two wheels, one wheel diameter below the body's bottom edge.
    pub fn wheel_centers(&self) -> [(i32, i32); 2] {
        let cy = self.y + self.cart_size / 2 + 2 * self.wheel_radius;
        [
            ((self.x + self.cart_size / 4) as i32, cy as i32),
            ((self.x + 3 * self.cart_size / 4) as i32, cy as i32),
        ]
    }
}

/// Build a square canvas filled with the vertical gradient, one solid row at a time
pub fn create_gradient(size: u32, gradient: &Gradient) -> RgbImage {
    let mut image = RgbImage::new(size, size);
    for y in 0..size {
        draw::fill_row(&mut image, y, gradient.color_at(y, size));
    }
    image
}

/// Draw the translucent frame and the white cart on top of the background
pub fn decorate(image: &mut RgbImage, size: u32) {
    let border_width = (size / 50).max(2) as i32;
    let padding = (size / 20) as i32;
    let frame = RoundedRect::new(
        padding,
        padding,
        size as i32 - padding,
        size as i32 - padding,
        (size / 10) as i32,
    );
    draw::stroke_rounded_rect(image, &frame, border_width, WHITE, FRAME_ALPHA);

    let cart = CartGlyph::new(size);
    draw::fill_rounded_rect(image, &cart.body(), WHITE, OPAQUE);

    for (cx, cy) in cart.wheel_centers() {
        draw::fill_circle(image, cx, cy, cart.wheel_radius as i32, WHITE, OPAQUE);
    }
}

/// Render the complete icon for one size
pub fn create_icon(size: u32, gradient: &Gradient) -> RgbImage {
    let mut image = create_gradient(size, gradient);
    decorate(&mut image, size);
    image
}

/// File name an icon of `size` is written under.
pub fn icon_filename(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Check that this build can encode PNG before anything is written
pub fn ensure_png_support() -> std::result::Result<(), IconError> {
    probe_encoder(ImageFormat::Png)
}

/// Encode a 1x1 RGB image in memory as `format`
///
/// Formats whose encoder was compiled out map to `ImageOutputFormat::Unsupported`,
/// which the encoder reports as `ImageError::Unsupported`.
pub fn probe_encoder(format: ImageFormat) -> std::result::Result<(), IconError> {
    let name = format!("{format:?}").to_uppercase();
    let probe = DynamicImage::ImageRgb8(RgbImage::new(1, 1));
    let mut buf = Cursor::new(Vec::new());

    match probe.write_to(&mut buf, ImageOutputFormat::from(format)) {
        Ok(()) => Ok(()),
        Err(source @ ImageError::Unsupported(_)) => {
            Err(IconError::MissingRenderingCapability {
                format: name,
                source,
            })
        }
        Err(source) => Err(IconError::Encode {
            format: name,
            source,
        }),
    }
}

/// Generate every icon in `config`, returning the written paths in order
pub fn generate_icons(config: &IconConfig) -> Result<Vec<PathBuf>> {
    generate_with_probe(config, ensure_png_support)
}

fn generate_with_probe<P>(config: &IconConfig, probe: P) -> Result<Vec<PathBuf>>
where
    P: FnOnce() -> std::result::Result<(), IconError>,
{
    probe()?;

    // Ensure the output directory exists
    create_dir_all(&config.output).with_context(|| {
        format!(
            "Can't create output directory {}",
            config.output.display()
        )
    })?;

    println!("Generating PWA icons...");

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = create_icon(size, &config.gradient);
        let output_path = config.output.join(icon_filename(size));
        save_png(icon, &output_path)?;
        println!("  ✓ Generated {}", output_path.display());
        written.push(output_path);
    }

    if config.manifest {
        write_manifest(&config.output, &config.sizes)?;
    }

    println!("\nIcons generated successfully!");
    println!("The icons are in the '{}/' folder", config.output.display());

    Ok(written)
}

fn save_png(image: RgbImage, path: &Path) -> Result<()> {
    let img = DynamicImage::ImageRgb8(image);

    let mut file = BufWriter::new(
        File::create(path)
            .with_context(|| format!("Failed to create PNG file {}", path.display()))?,
    );
    img.write_to(&mut file, ImageOutputFormat::from(ImageFormat::Png))
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

/// Write the `icons` array for the web app manifest next to the PNGs
fn write_manifest(out_dir: &Path, sizes: &[u32]) -> Result<()> {
    // `src` is relative to the site root: folder name only
    let folder = out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut manifest = ManifestFile::new();
    for &size in sizes {
        manifest.add_icon(ManifestIcon::png(&folder, size, &icon_filename(size)));
    }

    manifest.write_to_dir(out_dir)?;
    println!("  ✓ Generated {}", out_dir.join(crate::manifest::MANIFEST_FILENAME).display());
    Ok(())
}
