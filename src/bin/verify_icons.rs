use anyhow::{Context, Result};
use image::{ColorType, RgbImage};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("icons"));

    let mut icons = find_icons(&dir)?;
    icons.sort_by_key(|(size, _)| *size);

    if icons.is_empty() {
        println!("⚠ No icon-*x*.png files in {}", dir.display());
        return Ok(());
    }

    println!("Checking {} icons in: {}", icons.len(), dir.display());

    let mut failures = 0;
    for (size, path) in &icons {
        if !check_icon(*size, path)? {
            failures += 1;
        }
    }

    if failures == 0 {
        println!("\n✓ All icons look right");
    } else {
        println!("\n⚠ {} of {} icons need attention", failures, icons.len());
    }
    Ok(())
}

/// Collect `(size, path)` for every file named like `icon-{n}x{n}.png`
fn find_icons(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let mut icons = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(size) = parse_icon_name(name) {
            icons.push((size, path));
        }
    }
    Ok(icons)
}

fn parse_icon_name(name: &str) -> Option<u32> {
    let dims = name.strip_prefix("icon-")?.strip_suffix(".png")?;
    let (w, h) = dims.split_once('x')?;
    let w: u32 = w.parse().ok()?;
    let h: u32 = h.parse().ok()?;
    (w == h).then_some(w)
}

fn check_icon(size: u32, path: &Path) -> Result<bool> {
    let img = image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let (width, height) = (img.width(), img.height());
    let color = img.color();

    println!("\n{}", path.display());
    println!("  Dimensions: {}x{}", width, height);
    println!("  Color type: {:?}", color);

    let rgb = img.to_rgb8();
    if height > 0 {
        let top = row_average(&rgb, 0);
        let bottom = row_average(&rgb, height - 1);
        println!("  Top row average:    ({:.0}, {:.0}, {:.0})", top[0], top[1], top[2]);
        println!("  Bottom row average: ({:.0}, {:.0}, {:.0})", bottom[0], bottom[1], bottom[2]);
    }

    let ok = width == size && height == size && color == ColorType::Rgb8;
    if ok {
        println!("  ✓ {}x{} RGB", size, size);
    } else {
        println!("  ⚠ expected {}x{} RGB", size, size);
    }
    Ok(ok)
}

fn row_average(img: &RgbImage, y: u32) -> [f64; 3] {
    let mut sum = [0.0; 3];
    for x in 0..img.width() {
        let p = img.get_pixel(x, y);
        for (acc, channel) in sum.iter_mut().zip(p.0) {
            *acc += channel as f64;
        }
    }
    sum.map(|s| s / img.width().max(1) as f64)
}
