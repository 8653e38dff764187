use std::f64::consts::TAU;

use rand::rngs::StdRng;

use crate::{
    foundation::math::clamp01,
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::glyphs::GlyphAtlas,
};

/// Caption words laid out left to right, each bobbing on its own phase.
#[derive(Clone, Debug)]
pub struct TextParticles {
    tokens: Vec<String>,
    atlas: GlyphAtlas,
}

impl TextParticles {
    pub const NAME: &'static str = "text-particles";
    pub const PX_SIZE: f32 = 56.0;
    pub const BOB_PX: f64 = 45.0;

    pub fn new(caption: &str, ctx: &BuildCtx) -> Self {
        let tokens: Vec<String> = caption.split_whitespace().map(str::to_owned).collect();
        let atlas = GlyphAtlas::build(ctx.glyphs, Self::PX_SIZE, tokens.iter().map(String::as_str));
        Self { tokens, atlas }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Baseline anchor of token `i`.
    pub fn anchor(i: usize, w: i32, h: i32, t: f32) -> (i32, i32) {
        let (wf, hf) = (f64::from(w), f64::from(h));
        let x = geom::px(wf * 0.08 + i as f64 * wf * 0.28);
        let bob = (f64::from(t) * 3.0 + i as f64 * 0.25) * TAU;
        let y = geom::px(hf * 0.2) + geom::px(Self::BOB_PX * bob.sin());
        (x, y)
    }
}

impl Producer for TextParticles {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let alpha = clamp01(0.4 + 0.6 * ctx.ease.apply(ctx.t));
        for (i, token) in self.tokens.iter().enumerate() {
            let (x, y) = Self::anchor(i, w, h, ctx.t);
            self.atlas
                .stamp(canvas, token, x, y, Ink::solid(ctx.palette.color(i), alpha));
        }
    }
}
