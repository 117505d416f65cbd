//! Procedural rendering of the camera launcher icon.
//!
//! An icon is a vertical gradient with a camera glyph layered on top. Every
//! coordinate derives from the canvas size through fixed ratios, so the same size
//! always produces the same pixels.

use crate::{
    config::Palette,
    draw::{self, Bounds, Circle, Polygon, RoundedRect, Shape, Style},
};
use image::{Rgb, RgbImage};
use std::f64::consts::PI;

const APERTURE_BLADES: usize = 6;

/// Pixel geometry of every glyph part for one canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraLayout {
    pub size: u32,
    pub body: RoundedRect,
    pub viewfinder: RoundedRect,
    pub lens: Circle,
    pub aperture: Circle,
    pub blades: Polygon,
    pub flash: Circle,
}

impl CameraLayout {
    pub fn new(size: u32) -> Self {
        let center = (size / 2) as i32;
        let scaled = |ratio: f64| (size as f64 * ratio) as i32;

        let body_width = scaled(0.6);
        let body_height = scaled(0.45);
        let body_offset = scaled(0.05);
        let body = RoundedRect {
            left: center - body_width / 2,
            top: center - body_height / 2 + body_offset,
            right: center + body_width / 2,
            bottom: center + body_height / 2 + body_offset,
            radius: scaled(0.08),
        };

        // Sits 2px above the body, nudged right of center.
        let vf_width = scaled(0.15);
        let vf_height = scaled(0.08);
        let vf_left = center - vf_width / 2 + scaled(0.1);
        let viewfinder = RoundedRect {
            left: vf_left,
            top: body.top - vf_height - 2,
            right: vf_left + vf_width,
            bottom: body.top - 2,
            radius: scaled(0.02),
        };

        let lens = Circle {
            cx: center,
            cy: center + body_offset,
            radius: scaled(0.18),
        };
        let aperture = Circle {
            radius: (lens.radius as f64 * 0.6) as i32,
            ..lens
        };
        let blades = blade_polygon(lens.cx, lens.cy, (aperture.radius as f64 * 0.5) as i32);

        let flash_radius = scaled(0.04);
        let flash = Circle {
            cx: body.right - flash_radius * 3,
            cy: body.top + flash_radius * 2,
            radius: flash_radius,
        };

        Self {
            size,
            body,
            viewfinder,
            lens,
            aperture,
            blades,
            flash,
        }
    }

    /// Bounding boxes of every part, in painting order.
    pub fn part_bounds(&self) -> [(&'static str, Bounds); 6] {
        [
            ("body", self.body.bounds()),
            ("viewfinder", self.viewfinder.bounds()),
            ("lens", self.lens.bounds()),
            ("aperture", self.aperture.bounds()),
            ("blades", self.blades.bounds()),
            ("flash", self.flash.bounds()),
        ]
    }
}

/// Regular hexagon of radius `radius` around `(cx, cy)`, first vertex pointing up.
fn blade_polygon(cx: i32, cy: i32, radius: i32) -> Polygon {
    let points = (0..APERTURE_BLADES)
        .map(|i| {
            let angle = (i as f64 * 2.0 * PI / APERTURE_BLADES as f64) - PI / 2.0;
            // Rounded, since r·sin(30°) lands just below the integer it should hit.
            let x = cx + (radius as f64 * angle.cos()).round() as i32;
            let y = cy + (radius as f64 * angle.sin()).round() as i32;
            (x, y)
        })
        .collect();

    Polygon { points }
}

/// Vertical gradient from `palette.gradient_start` at the top row towards
/// `palette.gradient_end` at the bottom.
pub fn render_background(size: u32, palette: &Palette) -> RgbImage {
    let mut canvas = RgbImage::new(size, size);

    for y in 0..size {
        let ratio = y as f64 / size as f64;
        let color = lerp(palette.gradient_start, palette.gradient_end, ratio);
        draw::hline(&mut canvas, y, color);
    }

    canvas
}

// Channels are truncated towards zero, not rounded.
fn lerp(start: Rgb<u8>, end: Rgb<u8>, ratio: f64) -> Rgb<u8> {
    let channel = |i: usize| {
        let (a, b) = (start[i] as f64, end[i] as f64);
        (a + (b - a) * ratio) as u8
    };
    Rgb([channel(0), channel(1), channel(2)])
}

/// Paint the camera glyph for `layout` over `canvas`.
pub fn draw_camera_glyph(canvas: &mut RgbImage, layout: &CameraLayout, palette: &Palette) {
    draw::draw(
        canvas,
        &layout.body,
        &Style::solid(palette.white).with_width(2),
    );
    draw::draw(canvas, &layout.viewfinder, &Style::solid(palette.white));
    draw::draw(canvas, &layout.lens, &Style::solid(palette.gradient_end));
    draw::draw(canvas, &layout.aperture, &Style::solid(palette.gradient_start));
    draw::draw(canvas, &layout.blades, &Style::solid(palette.light_gray));
    draw::draw(canvas, &layout.flash, &Style::solid(palette.light_gray));
}

/// Render the complete icon at `size` with the shipped palette.
pub fn create_icon(size: u32) -> RgbImage {
    create_icon_with(size, &Palette::default())
}

pub fn create_icon_with(size: u32, palette: &Palette) -> RgbImage {
    let mut canvas = render_background(size, palette);
    draw_camera_glyph(&mut canvas, &CameraLayout::new(size), palette);
    canvas
}
