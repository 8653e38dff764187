use std::f64::consts::PI;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::stroke_rect,
};

/// A row of three outlined boxes drifting together on a slow elliptical path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Objects;

impl Objects {
    pub const NAME: &'static str = "objects";

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    /// Inclusive corner pairs of the three boxes.
    pub fn boxes(w: i32, h: i32, t: f32) -> [(i32, i32, i32, i32); 3] {
        let (wf, hf) = (f64::from(w), f64::from(h));
        let group_w = geom::px(wf * 0.32);
        let group_h = geom::px(hf * 0.16);
        let phase = f64::from(t) * PI;
        let gx = geom::px(f64::from(w - group_w) * 0.3 + wf * 0.4 * phase.sin());
        let gy = geom::px(f64::from(h - group_h) * 0.3 + hf * 0.2 * phase.cos());
        let slot = group_w / 3;

        std::array::from_fn(|i| {
            let x = gx + i as i32 * slot + 10;
            let y = gy + 10;
            (x, y, x + slot - 20, y + group_h - 20)
        })
    }
}

impl Producer for Objects {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let boxes = Self::boxes(canvas.width(), canvas.height(), ctx.t);
        for (i, (x0, y0, x1, y1)) in boxes.into_iter().enumerate() {
            stroke_rect(canvas, x0, y0, x1, y1, 2, Ink::solid(ctx.palette.color(i), 1.0));
        }
    }
}
