use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::raster::{fill_circle, line},
};

/// Twelve breathing nodes around the center, linked when close enough.
#[derive(Clone, Copy, Debug, Default)]
pub struct Constellation;

impl Constellation {
    pub const NAME: &'static str = "constellation";
    pub const COUNT: usize = 12;
    /// Link threshold as a fraction of the shorter canvas side.
    pub const LINK_FRACTION: f64 = 0.25;

    pub fn new(_ctx: &BuildCtx) -> Self {
        Self
    }

    pub fn nodes(w: i32, h: i32, t: f32) -> Vec<(i32, i32)> {
        let (wf, hf, t) = (f64::from(w), f64::from(h), f64::from(t));
        (0..Self::COUNT)
            .map(|i| {
                let angle = i as f64 / Self::COUNT as f64 * TAU;
                let radius = 0.3 + 0.15 * (TAU * t + i as f64).sin();
                (
                    geom::px(wf * (0.5 + radius * (angle + 0.7 * t).cos())),
                    geom::px(hf * (0.5 + radius * (angle + 0.5 * t).sin())),
                )
            })
            .collect()
    }

    /// Pairs `(i, j)`, `i < j`, closer than the link threshold. O(n^2).
    pub fn edges(nodes: &[(i32, i32)], w: i32, h: i32) -> Vec<(usize, usize)> {
        let limit = geom::min_side(w, h) * Self::LINK_FRACTION;
        let limit2 = limit * limit;
        let mut out = Vec::new();
        for i in 0..nodes.len() {
            for j in i + 1..nodes.len() {
                let dx = f64::from(nodes[i].0 - nodes[j].0);
                let dy = f64::from(nodes[i].1 - nodes[j].1);
                if dx * dx + dy * dy < limit2 {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

impl Producer for Constellation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let nodes = Self::nodes(w, h, ctx.t);
        for (i, &(x, y)) in nodes.iter().enumerate() {
            fill_circle(canvas, x, y, 4, Ink::solid(ctx.palette.color(i), 1.0));
        }
        for (i, j) in Self::edges(&nodes, w, h) {
            line(canvas, nodes[i], nodes[j], 1, Ink::solid(ctx.palette.color(i + j), 1.0));
        }
    }
}
