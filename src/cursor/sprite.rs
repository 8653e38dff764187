use std::path::Path;

use anyhow::Context;
use image::imageops::FilterType;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{GlimmerError, GlimmerResult},
    render::canvas::{Canvas, Ink},
};

/// Channel value above which a pixel counts as background white.
const WHITE_KEY: u8 = 240;

/// Straight-alpha cursor image, ready to stamp.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorSprite {
    width: u32,
    height: u32,
    color: Vec<Rgb8>,
    alpha: Vec<f32>,
}

impl CursorSprite {
    /// Load an image, key out near-white background and scale by `scale` (at least 1x1).
    pub fn load(path: &Path, scale: f32) -> GlimmerResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GlimmerError::validation(format!(
                "cursor scale must be finite and > 0, got {scale}"
            )));
        }
        let img = image::open(path)
            .with_context(|| format!("read cursor image {}", path.display()))?
            .to_rgba8();
        Ok(Self::from_rgba(img, scale))
    }

    pub fn from_rgba(mut img: image::RgbaImage, scale: f32) -> Self {
        for px in img.pixels_mut() {
            let [r, g, b, _] = px.0;
            if r > WHITE_KEY && g > WHITE_KEY && b > WHITE_KEY {
                px.0[3] = 0;
            }
        }

        if scale != 1.0 {
            let w = ((img.width() as f32 * scale) as u32).max(1);
            let h = ((img.height() as f32 * scale) as u32).max(1);
            // resample premultiplied so keyed-out white does not bleed into the edges
            premultiply_in_place(&mut img);
            img = image::imageops::resize(&img, w, h, FilterType::Triangle);
            unpremultiply_in_place(&mut img);
        }

        let (width, height) = img.dimensions();
        let mut color = Vec::with_capacity((width * height) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for px in img.pixels() {
            let [r, g, b, a] = px.0;
            color.push(Rgb8::new(r, g, b));
            alpha.push(f32::from(a) / 255.0);
        }
        Self {
            width,
            height,
            color,
            alpha,
        }
    }

    /// Procedural pointer arrow: white body with a one-pixel black outline.
    pub fn arrow(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(3), height.max(3));
        let (w, h) = (f64::from(width), f64::from(height));
        let inside = |x: i64, y: i64| -> bool {
            if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                return false;
            }
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let head = in_triangle(
                (px, py),
                (0.0, 0.0),
                (0.0, h * 0.8),
                (w * 0.72, h * 0.62),
            );
            let tail = segment_distance((px, py), (w * 0.3, h * 0.6), (w * 0.58, h * 0.97)) <= w * 0.1;
            head || tail
        };

        let mut color = Vec::with_capacity((width * height) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for y in 0..i64::from(height) {
            for x in 0..i64::from(width) {
                if !inside(x, y) {
                    color.push(Rgb8::BLACK);
                    alpha.push(0.0);
                    continue;
                }
                let edge = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                    .iter()
                    .any(|(dx, dy)| !inside(x + dx, y + dy));
                color.push(if edge {
                    Rgb8::BLACK
                } else {
                    Rgb8::new(255, 255, 255)
                });
                alpha.push(1.0);
            }
        }
        Self {
            width,
            height,
            color,
            alpha,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.alpha[(y * self.width + x) as usize])
    }

    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb8> {
        (x < self.width && y < self.height).then(|| self.color[(y * self.width + x) as usize])
    }

    /// Write the sprite with its top-left corner at `(x, y)`.
    pub fn stamp(&self, canvas: &mut Canvas, x: i32, y: i32) {
        for sy in 0..self.height {
            for sx in 0..self.width {
                let i = (sy * self.width + sx) as usize;
                canvas.put_weighted(
                    x + sx as i32,
                    y + sy as i32,
                    Ink::solid(self.color[i], 1.0),
                    self.alpha[i],
                );
            }
        }
    }
}

fn premultiply_in_place(img: &mut image::RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px.0[3]);
        for c in &mut px.0[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_in_place(img: &mut image::RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px.0[3]);
        if a == 0 {
            continue;
        }
        for c in &mut px.0[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let cross = |o: (f64, f64), u: (f64, f64), v: (f64, f64)| {
        (u.0 - o.0) * (v.1 - o.1) - (u.1 - o.1) * (v.0 - o.0)
    };
    let d1 = cross(p, a, b);
    let d2 = cross(p, b, c);
    let d3 = cross(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

fn segment_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (ex, ey) = (p.0 - (a.0 + t * abx), p.1 - (a.1 + t * aby));
    (ex * ex + ey * ey).sqrt()
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/sprite.rs"]
mod tests;
