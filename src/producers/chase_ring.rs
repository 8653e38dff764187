use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::{fill_circle, stroke_circle},
};

/// Four dots chasing each other around a ring, each with a faint trailing copy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChaseRing;

impl ChaseRing {
    pub const NAME: &'static str = "chase-ring";
    pub const COUNT: usize = 4;
    /// Angular gap between consecutive dots.
    pub const PHASE_OFFSET_DEG: f64 = 35.0;
    /// Angular lag of the trail behind its dot, in radians.
    pub const TRAIL_LAG: f64 = 0.25;
    pub const TRAIL_ALPHA: f32 = 0.4;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }
}

impl Producer for ChaseRing {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let (cx, cy) = geom::center(w, h);
        let radius = geom::px(geom::min_side(w, h) * 0.28);
        let base = (f64::from(ctx.t) * TAU) % TAU;
        let offset = Self::PHASE_OFFSET_DEG.to_radians();

        for i in 0..Self::COUNT {
            let color = ctx.palette.color(i);
            let a = base - i as f64 * offset;

            let (x, y) = geom::on_circle(cx, cy, radius, a);
            fill_circle(canvas, x, y, 18, Ink::solid(color, 1.0));
            stroke_circle(canvas, x, y, 18, 2, Ink::glow(color, 1.0));

            let (xt, yt) = geom::on_circle(cx, cy, radius, a - Self::TRAIL_LAG);
            fill_circle(canvas, xt, yt, 12, Ink::solid(color, Self::TRAIL_ALPHA));
        }
    }
}
