use crate::{
    config::{Density, IconConfig},
    glyph,
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbImage, RgbaImage,
};
use std::{
    fs::create_dir_all,
    io::Write,
    path::{Path, PathBuf},
};

pub const REGULAR_ICON: &str = "ic_launcher.png";
pub const ROUND_ICON: &str = "ic_launcher_round.png";

// Options for a generation run, decoupled from the CLI parser.
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub create_dirs: bool,
    pub round_mask: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            config: None,
            create_dirs: false,
            round_mask: false,
        }
    }
}

/// Android resource directory under a project root.
pub fn res_dir(root: &Path) -> PathBuf {
    root.join("app").join("src").join("main").join("res")
}

pub fn mipmap_dir(res_dir: &Path, density: &str) -> PathBuf {
    res_dir.join(format!("mipmap-{density}"))
}

pub fn generate_icons(args: Args) -> Result<()> {
    ensure_png_encoder()?;

    let config = match &args.config {
        Some(path) => IconConfig::load(path)?,
        None => IconConfig::builtin()?,
    };

    let written = generate_android_icons(&config, &args)?;

    println!("✓ Generated {written} launcher icons");
    Ok(())
}

/// Fail early, before any file is touched, when PNG encoding is not available.
fn ensure_png_encoder() -> Result<()> {
    let probe = RgbImage::new(1, 1);
    let mut buf = Vec::new();
    write_png(probe.as_raw(), &mut buf, 1, ColorType::Rgb8).context(
        "PNG encoding is unavailable; rebuild with the `png` feature of the `image` crate enabled",
    )?;
    Ok(())
}

/// Render and write the regular and round launcher icons for every density.
/// Returns the number of files written.
fn generate_android_icons(config: &IconConfig, args: &Args) -> Result<usize> {
    let res_dir = res_dir(&args.output);
    let mut written = 0;

    println!("Generating Android launcher icons...");

    for Density { name, size } in &config.densities {
        let mipmap_dir = mipmap_dir(&res_dir, name);
        if args.create_dirs {
            create_dir_all(&mipmap_dir).with_context(|| {
                format!("Can't create output directory: {}", mipmap_dir.display())
            })?;
        }

        let icon = glyph::create_icon_with(*size, &config.palette);

        // One encoding serves both variants so they stay byte-identical.
        let mut png = Vec::new();
        write_png(icon.as_raw(), &mut png, *size, ColorType::Rgb8)?;

        let regular_path = mipmap_dir.join(REGULAR_ICON);
        save_png(&png, &regular_path)?;
        println!(
            "  ✓ Generated {name:8} ({size:3}x{size:3}px): {}",
            regular_path.display()
        );

        let round_path = mipmap_dir.join(ROUND_ICON);
        if args.round_mask {
            let round = apply_circular_mask(&icon);
            let mut masked = Vec::new();
            write_png(round.as_raw(), &mut masked, *size, ColorType::Rgba8)?;
            save_png(&masked, &round_path)?;
        } else {
            save_png(&png, &round_path)?;
        }
        println!(
            "  ✓ Generated {name:8} ({size:3}x{size:3}px): {}",
            round_path.display()
        );

        written += 2;
    }

    Ok(written)
}

fn save_png(png: &[u8], path: &Path) -> Result<()> {
    std::fs::write(path, png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32, color: ColorType) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, color)?;
    Ok(())
}

/// Clip an icon to a circle with a one pixel anti-aliased edge.
pub fn apply_circular_mask(img: &RgbImage) -> RgbaImage {
    let width = img.width();
    let height = img.height();
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = width.min(height) as f32 / 2.0;

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = img.get_pixel(x, y).0;

        // Sample at the pixel center
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();

        let alpha = if distance > radius {
            0
        } else if distance > radius - 1.0 {
            ((radius - distance) * 255.0) as u8
        } else {
            255
        };
        Rgba([r, g, b, alpha])
    })
}

/// Result of checking one density's pair of launcher icons.
#[derive(Debug, Clone)]
pub struct IconReport {
    pub density: String,
    pub size: u32,
    pub regular: PathBuf,
    pub round: PathBuf,
    pub identical: bool,
}

/// Decode every generated icon under `res_dir` and check it has the size its
/// density calls for.
pub fn verify_android_icons(res_dir: &Path, densities: &[Density]) -> Result<Vec<IconReport>> {
    let mut reports = Vec::with_capacity(densities.len());

    for Density { name, size } in densities {
        let mipmap_dir = mipmap_dir(res_dir, name);
        let regular = mipmap_dir.join(REGULAR_ICON);
        let round = mipmap_dir.join(ROUND_ICON);

        for path in [&regular, &round] {
            let icon = image::open(path)
                .with_context(|| format!("Failed to load icon: {}", path.display()))?;
            if icon.width() != *size || icon.height() != *size {
                anyhow::bail!(
                    "{} is {}x{}, expected {size}x{size}",
                    path.display(),
                    icon.width(),
                    icon.height()
                );
            }
        }

        let identical = std::fs::read(&regular)? == std::fs::read(&round)?;

        reports.push(IconReport {
            density: name.clone(),
            size: *size,
            regular,
            round,
            identical,
        });
    }

    Ok(reports)
}
