use rand::{Rng, rngs::StdRng};

use crate::{
    foundation::math::stream_rng,
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::line,
};

/// Horizontal streaks that lengthen over the window. Origins reshuffle every 1/1000 of it.
#[derive(Clone, Copy, Debug)]
pub struct FlowLines {
    seed: u64,
}

impl FlowLines {
    pub const NAME: &'static str = "flow-lines";
    pub const COUNT: usize = 20;

    pub fn new(ctx: &BuildCtx) -> Self {
        Self { seed: ctx.seed }
    }

    /// Streak endpoints `(x1, x2, y)` for a `w x h` canvas at eased time `t`.
    pub fn streaks(&self, w: i32, h: i32, t: f32, eased: f32) -> Vec<(i32, i32, i32)> {
        let (wf, hf) = (f64::from(w), f64::from(h));
        let bucket = (t * 1000.0) as u64;
        let mut rng = stream_rng(self.seed, Self::NAME, bucket);
        let length = wf * 0.2 + wf * 0.4 * f64::from(eased);
        (0..Self::COUNT)
            .map(|_| {
                let y = geom::px(rng.gen_range(0.0..hf));
                let x1 = geom::px(rng.gen_range(0.0..wf * 0.3));
                let x2 = geom::px(f64::from(x1) + length).min(w - 1);
                (x1, x2, y)
            })
            .collect()
    }
}

impl Producer for FlowLines {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let streaks = self.streaks(canvas.width(), canvas.height(), ctx.t, ctx.ease.apply(ctx.t));
        for (i, (x1, x2, y)) in streaks.into_iter().enumerate() {
            line(canvas, (x1, y), (x2, y), 1, Ink::solid(ctx.palette.color(i), 1.0));
        }
    }
}
