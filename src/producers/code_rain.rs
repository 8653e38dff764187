use rand::rngs::StdRng;

use crate::{
    producers::{BuildCtx, DrawCtx, Producer},
    render::canvas::{Canvas, Ink},
    render::glyphs::GlyphAtlas,
};

const COLUMNS: i32 = 24;
const TRAIL: i32 = 6;
const ROW_STEP: i32 = 14;
const MARGIN: i32 = 40;
const STAGGER: f32 = 37.0;
const GLYPH_BASE: u32 = 0x30A0;
const GLYPH_SPAN: u32 = 96;

/// Columns of falling katakana, each column phase-shifted from its neighbour.
#[derive(Clone, Debug)]
pub struct CodeRain {
    atlas: GlyphAtlas,
}

impl CodeRain {
    pub const NAME: &'static str = "code-rain";

    pub fn new(ctx: &BuildCtx) -> Self {
        let glyphs: Vec<String> = (0..GLYPH_SPAN).map(|i| Self::glyph(i as usize)).collect();
        Self {
            atlas: GlyphAtlas::build(ctx.glyphs, ROW_STEP as f32, glyphs.iter().map(String::as_str)),
        }
    }

    fn glyph(i: usize) -> String {
        char::from_u32(GLYPH_BASE + i as u32 % GLYPH_SPAN)
            .unwrap_or('?')
            .to_string()
    }

    pub fn column_width(w: i32) -> i32 {
        (w / COLUMNS).max(8)
    }

    /// Baseline of the head glyph in column `c`; wraps through `[-MARGIN, h)`.
    pub fn column_offset(c: i32, h: i32, t: f32) -> i32 {
        let speed = (150.0 * (0.5 + 0.5 * t)) as i32;
        let travel = t * speed as f32 + c as f32 * STAGGER;
        (travel % (h + MARGIN) as f32) as i32 - MARGIN
    }
}

impl Producer for CodeRain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (canvas.width(), canvas.height());
        let col_w = Self::column_width(w);
        for c in 0..COLUMNS {
            let x = c * col_w + 2;
            let y = Self::column_offset(c, h, ctx.t);
            let ink = Ink::solid(ctx.palette.color(c as usize), 1.0);
            for k in 0..TRAIL {
                let yy = y + k * ROW_STEP;
                if (0..h).contains(&yy) {
                    let glyph = Self::glyph((c + k) as usize);
                    self.atlas.stamp(canvas, &glyph, x, yy, ink);
                }
            }
        }
    }
}
