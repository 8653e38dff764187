use std::f64::consts::TAU;

use rand::{Rng, rngs::StdRng};

use crate::{
    foundation::math::stream_rng,
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::fill_circle,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drifter {
    /// Start position as a fraction of the canvas.
    x0: f64,
    y0: f64,
    heading: f64,
    speed: f64,
}

/// Twenty dots drifting in straight lines from seeded starts, wrapping around the edges.
#[derive(Clone, Debug)]
pub struct ScatterDrift {
    drifters: Vec<Drifter>,
}

impl ScatterDrift {
    pub const NAME: &'static str = "scatter-drift";
    pub const COUNT: usize = 20;

    pub fn new(ctx: &BuildCtx) -> Self {
        let drifters = (0..Self::COUNT)
            .map(|i| {
                let mut rng = stream_rng(ctx.seed, Self::NAME, i as u64);
                Drifter {
                    x0: rng.r#gen::<f64>(),
                    y0: rng.r#gen::<f64>(),
                    heading: rng.gen_range(0.0..TAU),
                    speed: 0.4 + 0.6 * rng.r#gen::<f64>(),
                }
            })
            .collect();
        Self { drifters }
    }

    /// Dot positions on a `w x h` canvas at eased time `t`.
    pub fn positions(&self, w: i32, h: i32, t: f32) -> Vec<(i32, i32)> {
        let (wf, hf) = (f64::from(w), f64::from(h));
        let max_travel = 0.9 * geom::min_side(w, h);
        self.drifters
            .iter()
            .map(|d| {
                let travel = max_travel * d.speed * f64::from(t);
                let x = (d.x0 * wf + d.heading.cos() * travel).rem_euclid(wf);
                let y = (d.y0 * hf + d.heading.sin() * travel).rem_euclid(hf);
                (geom::px(x), geom::px(y))
            })
            .collect()
    }
}

impl Producer for ScatterDrift {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let positions = self.positions(canvas.width(), canvas.height(), ctx.t);
        for (i, (x, y)) in positions.into_iter().enumerate() {
            fill_circle(canvas, x, y, 8, Ink::solid(ctx.palette.color(i), 1.0));
        }
    }
}
