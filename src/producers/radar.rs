use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::{line, stroke_circle},
};

/// Radar scope in the lower-left: outline, two range rings and a fading sweep wedge.
#[derive(Clone, Copy, Debug, Default)]
pub struct Radar;

impl Radar {
    pub const NAME: &'static str = "radar";
    pub const SWEEP_DEG: f64 = 35.0;
    pub const SEGMENTS: usize = 40;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    /// Alpha of fan segment `s`; the leading edge is strongest.
    pub fn segment_alpha(s: usize) -> f32 {
        (0.3 * (1.0 - s as f32 / Self::SEGMENTS as f32)).max(0.03)
    }
}

impl Producer for Radar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let cx = geom::px(f64::from(w) * 0.15);
        let cy = geom::px(f64::from(h) * 0.8);
        let radius = geom::px(geom::min_side(w, h) * 0.25);
        let color = ctx.palette.color(0);
        let outline = Ink::solid(color, 1.0);

        stroke_circle(canvas, cx, cy, radius, 1, outline);

        // fan segments overlap near the origin, so alpha is raised rather than summed
        let angle = (f64::from(ctx.t) * TAU) % TAU;
        let sweep = Self::SWEEP_DEG.to_radians();
        for s in 0..Self::SEGMENTS {
            let a = angle - sweep * (s as f64 / Self::SEGMENTS as f64);
            let tip = geom::on_circle(cx, cy, radius, a);
            line(canvas, (cx, cy), tip, 2, Ink::glow(color, Self::segment_alpha(s)));
        }

        for r in [radius / 3, 2 * radius / 3] {
            stroke_circle(canvas, cx, cy, r, 1, outline);
        }
    }
}
