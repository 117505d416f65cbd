//! Minimal filled/outlined shape rasterizer over an RGB canvas.
//!
//! Coordinates are integer pixel positions and every bounding box is inclusive on
//! both ends, so a circle of radius `r` spans `2r + 1` pixels. Anything falling
//! outside the canvas is clipped.

use image::{Rgb, RgbImage};

/// Inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Whether the whole box lies inside a `size`×`size` canvas.
    pub fn fits_within(&self, size: u32) -> bool {
        let size = size as i32;
        self.left >= 0
            && self.top >= 0
            && self.right < size
            && self.bottom < size
            && self.left <= self.right
            && self.top <= self.bottom
    }
}

pub trait Shape {
    fn bounds(&self) -> Bounds;

    /// Whether the pixel at `(x, y)` belongs to the shape's interior.
    fn contains(&self, x: i32, y: i32) -> bool;

    /// Whether the pixel at `(x, y)` lies on an outline of the given stroke width.
    fn on_outline(&self, x: i32, y: i32, width: u32) -> bool;
}

/// Paint colors for a single shape.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub fill: Option<Rgb<u8>>,
    pub outline: Option<Rgb<u8>>,
    pub width: u32,
}

impl Style {
    /// Fill and outline with the same color, the way every glyph part is painted.
    pub fn solid(color: Rgb<u8>) -> Self {
        Self {
            fill: Some(color),
            outline: Some(color),
            width: 1,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: i32,
}

impl RoundedRect {
    fn inset(&self, by: i32) -> Self {
        Self {
            left: self.left + by,
            top: self.top + by,
            right: self.right - by,
            bottom: self.bottom - by,
            radius: (self.radius - by).max(0),
        }
    }
}

impl Shape for RoundedRect {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }

        let r = self
            .radius
            .min((self.right - self.left) / 2)
            .min((self.bottom - self.top) / 2);
        if r <= 0 {
            return true;
        }

        // Pixels outside the corner squares are always inside.
        let cx = if x < self.left + r {
            self.left + r
        } else if x > self.right - r {
            self.right - r
        } else {
            return true;
        };
        let cy = if y < self.top + r {
            self.top + r
        } else if y > self.bottom - r {
            self.bottom - r
        } else {
            return true;
        };

        within_radius(x - cx, y - cy, r)
    }

    fn on_outline(&self, x: i32, y: i32, width: u32) -> bool {
        self.contains(x, y) && !self.inset(width as i32).contains(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Shape for Circle {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.cx - self.radius,
            top: self.cy - self.radius,
            right: self.cx + self.radius,
            bottom: self.cy + self.radius,
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.radius >= 0 && within_radius(x - self.cx, y - self.cy, self.radius)
    }

    fn on_outline(&self, x: i32, y: i32, width: u32) -> bool {
        let inner = Circle {
            radius: self.radius - width as i32,
            ..*self
        };
        self.contains(x, y) && !inner.contains(x, y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub points: Vec<(i32, i32)>,
}

impl Polygon {
    fn edges(&self) -> impl Iterator<Item = ((i32, i32), (i32, i32))> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl Shape for Polygon {
    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        };
        for &(x, y) in &self.points {
            bounds.left = bounds.left.min(x);
            bounds.top = bounds.top.min(y);
            bounds.right = bounds.right.max(x);
            bounds.bottom = bounds.bottom.max(y);
        }
        bounds
    }

    // Even-odd ray casting from the pixel towards +x.
    fn contains(&self, x: i32, y: i32) -> bool {
        let (px, py) = (x as f64, y as f64);
        let mut inside = false;
        for ((x0, y0), (x1, y1)) in self.edges() {
            let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
            if (y0 > py) != (y1 > py) {
                let cross_x = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
                if px < cross_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn on_outline(&self, x: i32, y: i32, width: u32) -> bool {
        let reach = (width.max(1) as f64) / 2.0;
        self.edges().any(|(a, b)| distance_to_segment((x, y), a, b) <= reach)
    }
}

/// Paint `shape` onto `canvas`. Outline pixels take precedence over fill pixels.
pub fn draw<S: Shape + ?Sized>(canvas: &mut RgbImage, shape: &S, style: &Style) {
    let bounds = shape.bounds();
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    let x_range = bounds.left.max(0)..=bounds.right.min(width - 1);
    let y_range = bounds.top.max(0)..=bounds.bottom.min(height - 1);

    for y in y_range {
        for x in x_range.clone() {
            let color = match (style.outline, style.fill) {
                (Some(outline), _) if shape.on_outline(x, y, style.width) => Some(outline),
                (_, Some(fill)) if shape.contains(x, y) => Some(fill),
                _ => None,
            };
            if let Some(color) = color {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Fill row `y` across the full canvas width.
pub fn hline(canvas: &mut RgbImage, y: u32, color: Rgb<u8>) {
    for x in 0..canvas.width() {
        canvas.put_pixel(x, y, color);
    }
}

// Half a pixel of slack so the extreme pixels `(c ± r, c)` are covered.
fn within_radius(dx: i32, dy: i32, radius: i32) -> bool {
    let reach = radius as f64 + 0.5;
    ((dx * dx + dy * dy) as f64) <= reach * reach
}

fn distance_to_segment(p: (i32, i32), a: (i32, i32), b: (i32, i32)) -> f64 {
    let (px, py) = (p.0 as f64, p.1 as f64);
    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (bx, by) = (b.0 as f64, b.1 as f64);

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (nx, ny) = (ax + t * dx, ay + t * dy);
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}
