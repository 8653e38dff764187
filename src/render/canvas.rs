use crate::foundation::core::{FrameSize, Rgb8};

/// How a single rasterized pixel affects the alpha accumulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coverage {
    /// Leave alpha untouched (color-only stroke).
    Keep,
    /// `alpha += w`.
    Add(f32),
    /// `alpha = max(alpha, w)`.
    Lift(f32),
}

/// What a shape writes into the canvas: an optional color and an alpha contribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ink {
    pub color: Option<Rgb8>,
    pub coverage: Coverage,
}

impl Ink {
    /// Color only.
    pub fn paint(color: Rgb8) -> Self {
        Self {
            color: Some(color),
            coverage: Coverage::Keep,
        }
    }

    /// Alpha only, accumulated.
    pub fn mask(weight: f32) -> Self {
        Self {
            color: None,
            coverage: Coverage::Add(weight),
        }
    }

    /// Color plus accumulated alpha.
    pub fn solid(color: Rgb8, weight: f32) -> Self {
        Self {
            color: Some(color),
            coverage: Coverage::Add(weight),
        }
    }

    /// Color plus alpha raised to at least `weight`.
    pub fn glow(color: Rgb8, weight: f32) -> Self {
        Self {
            color: Some(color),
            coverage: Coverage::Lift(weight),
        }
    }

    /// Alpha only, raised to at least `weight`.
    pub fn lift(weight: f32) -> Self {
        Self {
            color: None,
            coverage: Coverage::Lift(weight),
        }
    }

    fn scaled(self, s: f32) -> Self {
        let coverage = match self.coverage {
            Coverage::Keep => Coverage::Keep,
            Coverage::Add(w) => Coverage::Add(w * s),
            Coverage::Lift(w) => Coverage::Lift(w * s),
        };
        Self { coverage, ..self }
    }
}

/// Per-frame overlay layer: an RGB color buffer and an unclamped alpha accumulator.
///
/// Lives for exactly one frame. Producers only ever add coverage; the compositor clamps.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: FrameSize,
    color: Vec<Rgb8>,
    alpha: Vec<f32>,
}

impl Canvas {
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            color: vec![Rgb8::BLACK; size.pixel_count()],
            alpha: vec![0.0; size.pixel_count()],
        }
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width as i32
    }

    pub fn height(&self) -> i32 {
        self.size.height as i32
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    /// Apply `ink` at one pixel; out-of-bounds coordinates are ignored.
    pub fn put(&mut self, x: i32, y: i32, ink: Ink) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        if let Some(c) = ink.color {
            self.color[i] = c;
        }
        match ink.coverage {
            Coverage::Keep => {}
            Coverage::Add(w) => self.alpha[i] += w.max(0.0),
            Coverage::Lift(w) => self.alpha[i] = self.alpha[i].max(w),
        }
    }

    /// Apply `ink` with its alpha contribution scaled by `weight` (glyph/sprite coverage).
    pub fn put_weighted(&mut self, x: i32, y: i32, ink: Ink, weight: f32) {
        if weight <= 0.0 {
            return;
        }
        self.put(x, y, ink.scaled(weight.min(1.0)));
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<Rgb8> {
        self.index(x, y).map(|i| self.color[i])
    }

    pub fn alpha_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|i| self.alpha[i])
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.color
    }

    pub fn alphas(&self) -> &[f32] {
        &self.alpha
    }

    pub fn has_coverage(&self) -> bool {
        self.alpha.iter().any(|&a| a > 0.0)
    }

    /// Clamp alpha to `[0, 1]` then scale it by `factor` (opacity times fade).
    pub fn finalize_alpha(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        for a in &mut self.alpha {
            *a = a.clamp(0.0, 1.0) * factor;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
