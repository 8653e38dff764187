use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer},
    render::canvas::{Canvas, Ink},
    render::raster::fill_rect,
};

/// A horizontal band sweeping top to bottom, brightest along its center line.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scanlines;

impl Scanlines {
    pub const NAME: &'static str = "scanlines";

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    pub fn band_height(h: i32) -> i32 {
        (h / 14).max(8)
    }

    /// Visible rows `[y1, y2)` of the band at eased time `t`, or `None` when fully off-screen.
    pub fn band(h: i32, t: f32) -> Option<(i32, i32)> {
        let band_h = Self::band_height(h);
        let y_center = ((t % 1.0) * (h + band_h) as f32) as i32 - band_h / 2;
        let y1 = (y_center - band_h / 2).max(0);
        let y2 = (y_center + band_h / 2).min(h);
        (y2 > y1).then_some((y1, y2))
    }

    /// Triangular profile: 0.15 at the band edges, 0.4 at its center.
    pub fn row_alpha(row: i32, y1: i32, y2: i32) -> f32 {
        let t = (row - y1) as f32 / (y2 - y1).max(1) as f32;
        0.15 + 0.25 * (1.0 - (2.0 * t - 1.0).abs())
    }
}

impl Producer for Scanlines {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let Some((y1, y2)) = Self::band(h, ctx.t) else {
            return;
        };
        fill_rect(canvas, 0, y1, w - 1, y2, Ink::paint(ctx.palette.color(1)));
        for row in y1..y2 {
            fill_rect(canvas, 0, row, w - 1, row, Ink::lift(Self::row_alpha(row, y1, y2)));
        }
    }
}
