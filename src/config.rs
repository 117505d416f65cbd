//! Palette and density table used for every render.
//!
//! The built-in values reproduce the shipped launcher icon. A JSON file can
//! override either part:
//!
//! ```json
//! {
//!   "palette": { "gradient_start": "#6200EE", "gradient_end": "#3700B3" },
//!   "densities": [{ "name": "mdpi", "size": 48 }]
//! }
//! ```

use anyhow::{Context, Result};
use image::Rgb;
use serde::Deserialize;
use std::{collections::HashSet, ops::RangeInclusive, path::Path, str::FromStr};

/// Icon sizes the glyph ratios are laid out for.
pub const SUPPORTED_SIZES: RangeInclusive<u32> = 48..=192;

pub const GRADIENT_START: Rgb<u8> = Rgb([98, 0, 238]); // #6200EE
pub const GRADIENT_END: Rgb<u8> = Rgb([55, 0, 179]); // #3700B3
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const LIGHT_GRAY: Rgb<u8> = Rgb([240, 240, 240]);

const DEFAULT_DENSITIES_JSON: &str = r#"
[
  { "name": "mdpi", "size": 48 },
  { "name": "hdpi", "size": 72 },
  { "name": "xhdpi", "size": 96 },
  { "name": "xxhdpi", "size": 144 },
  { "name": "xxxhdpi", "size": 192 }
]
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub gradient_start: Rgb<u8>,
    pub gradient_end: Rgb<u8>,
    pub white: Rgb<u8>,
    pub light_gray: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_start: GRADIENT_START,
            gradient_end: GRADIENT_END,
            white: WHITE,
            light_gray: LIGHT_GRAY,
        }
    }
}

/// An Android density bucket and the launcher icon size it needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Density {
    pub name: String,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub palette: Palette,
    pub densities: Vec<Density>,
}

impl IconConfig {
    /// The built-in configuration.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            palette: Palette::default(),
            densities: default_densities()?,
        })
    }

    /// Built-in configuration with the overrides from a JSON file applied.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let mut config = Self::builtin()?;
        if let Some(palette) = file.palette {
            palette.apply(&mut config.palette)?;
        }
        if let Some(densities) = file.densities {
            validate_densities(&densities)?;
            config.densities = densities;
        }

        Ok(config)
    }
}

pub fn default_densities() -> Result<Vec<Density>> {
    serde_json::from_str(DEFAULT_DENSITIES_JSON).context("Failed to parse built-in density table")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    palette: Option<PaletteOverrides>,
    densities: Option<Vec<Density>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteOverrides {
    gradient_start: Option<String>,
    gradient_end: Option<String>,
    white: Option<String>,
    light_gray: Option<String>,
}

impl PaletteOverrides {
    fn apply(&self, palette: &mut Palette) -> Result<()> {
        let slots = [
            (&self.gradient_start, &mut palette.gradient_start),
            (&self.gradient_end, &mut palette.gradient_end),
            (&self.white, &mut palette.white),
            (&self.light_gray, &mut palette.light_gray),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                *slot = parse_color(value)?;
            }
        }
        Ok(())
    }
}

/// Parse a CSS color string into an opaque RGB color. Alpha is ignored.
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid color: {color}"))?;

    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok(Rgb([
        channel(srgb.red),
        channel(srgb.green),
        channel(srgb.blue),
    ]))
}

fn validate_densities(densities: &[Density]) -> Result<()> {
    if densities.is_empty() {
        anyhow::bail!("Density table must not be empty");
    }

    let mut seen = HashSet::new();
    for density in densities {
        if density.name.trim().is_empty() {
            anyhow::bail!("Density name must not be empty");
        }
        if !seen.insert(density.name.as_str()) {
            anyhow::bail!("Duplicate density: {}", density.name);
        }
        if !SUPPORTED_SIZES.contains(&density.size) {
            anyhow::bail!(
                "Unsupported size {} for {}: sizes must be within {}-{}px",
                density.size,
                density.name,
                SUPPORTED_SIZES.start(),
                SUPPORTED_SIZES.end()
            );
        }
    }

    Ok(())
}
