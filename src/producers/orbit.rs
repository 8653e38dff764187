use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::{fill_circle, stroke_circle},
};

/// Six dots evenly spaced on a circle about the center, one full turn per window.
#[derive(Clone, Copy, Debug, Default)]
pub struct Orbit;

impl Orbit {
    pub const NAME: &'static str = "orbit";
    pub const COUNT: usize = 6;
    pub const RING_RADIUS: i32 = 14;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    /// Dot centers for a `w x h` canvas at eased time `t`.
    pub fn centers(w: i32, h: i32, t: f32) -> Vec<(i32, i32)> {
        let (cx, cy) = geom::center(w, h);
        let radius = geom::px(geom::min_side(w, h) * 0.2);
        (0..Self::COUNT)
            .map(|i| {
                let angle = f64::from(t) * TAU + i as f64 * TAU / Self::COUNT as f64;
                geom::on_circle(cx, cy, radius, angle)
            })
            .collect()
    }
}

impl Producer for Orbit {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let centers = Self::centers(canvas.width(), canvas.height(), ctx.t);
        for (i, (x, y)) in centers.into_iter().enumerate() {
            let color = ctx.palette.color(i);
            fill_circle(canvas, x, y, Self::RING_RADIUS, Ink::solid(color, 1.0));
            stroke_circle(canvas, x, y, Self::RING_RADIUS, 2, Ink::glow(color, 1.0));
        }
    }
}
