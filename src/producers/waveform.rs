use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::fill_rect,
};

/// A compact equalizer: twenty bars bouncing along a travelling sine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Waveform;

impl Waveform {
    pub const NAME: &'static str = "waveform";
    pub const BARS: usize = 20;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    /// Normalized level of bar `i`, in `[0, 1]`.
    pub fn level(i: usize, t: f32) -> f64 {
        let phase = f64::from(t) * 4.0 + i as f64 * 0.2;
        0.5 + 0.5 * (phase * TAU).sin()
    }
}

impl Producer for Waveform {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let bar_w = (w / Self::BARS as i32).max(3);
        let base_y = geom::px(f64::from(h) * 0.78);
        let max_h = geom::px(f64::from(h) * 0.15).min(150);
        let color = ctx.palette.color(0);

        for i in 0..Self::BARS {
            let val = Self::level(i, ctx.t);
            let bar_h = geom::px(6.0 + val * f64::from(max_h));
            let x1 = i as i32 * bar_w;
            let x2 = (x1 + bar_w - 2).min(w - 1);
            let alpha = (0.35 + 0.35 * val) as f32;
            fill_rect(canvas, x1, base_y - bar_h, x2, base_y, Ink::solid(color, alpha));
        }
    }
}
