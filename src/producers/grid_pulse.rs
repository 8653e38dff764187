use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer},
    render::canvas::{Canvas, Ink},
    render::raster::fill_rect,
};

/// Static grid lines with softly pulsing cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridPulse;

impl GridPulse {
    pub const NAME: &'static str = "grid-pulse";
    /// Peak alpha of a cell.
    pub const CELL_ALPHA: f64 = 0.25;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    pub fn step(w: i32, h: i32) -> i32 {
        (w.min(h) / 20).max(24)
    }

    /// Alpha of the cell whose top-left corner is `(gx, gy)`.
    pub fn cell_alpha(gx: i32, gy: i32, t: f32) -> f32 {
        let phase = f64::from(t) * TAU;
        let v = 0.5 + 0.5 * (phase + 0.3 * f64::from(gy) + 0.2 * f64::from(gx)).sin();
        (v * Self::CELL_ALPHA) as f32
    }
}

impl Producer for GridPulse {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let step = Self::step(w, h);
        let stride = step as usize;
        let color = ctx.palette.color(0);
        let line_ink = Ink::solid(color, 1.0);

        for x in (0..w).step_by(stride) {
            fill_rect(canvas, x, 0, x, h - 1, line_ink);
        }
        for y in (0..h).step_by(stride) {
            fill_rect(canvas, 0, y, w - 1, y, line_ink);
        }

        for gy in (0..h).step_by(stride) {
            for gx in (0..w).step_by(stride) {
                let a = Self::cell_alpha(gx, gy, ctx.t);
                if a > 0.01 {
                    let x2 = (gx + step - 2).min(w - 1);
                    let y2 = (gy + step - 2).min(h - 1);
                    fill_rect(canvas, gx + 2, gy + 2, x2, y2, Ink::solid(color, a));
                }
            }
        }
    }
}
