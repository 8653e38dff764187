use rand::rngs::StdRng;

use crate::{
    foundation::math::clamp01,
    producers::{BuildCtx, DrawCtx, Producer, geom},
    render::canvas::{Canvas, Ink},
    render::glyphs::GlyphAtlas,
    render::raster::stroke_rect,
};

const COUNT: usize = 5;
const LABELS: [&str; COUNT] = ["1", "2", "3", "4", "5"];

/// Five numbered boxes that appear one after another and slide up into place.
#[derive(Clone, Debug)]
pub struct NumberList {
    atlas: GlyphAtlas,
}

impl NumberList {
    pub const NAME: &'static str = "number-list";
    /// How far a box slides while appearing.
    pub const SLIDE_PX: f32 = 30.0;

    pub fn new(ctx: &BuildCtx) -> Self {
        Self {
            atlas: GlyphAtlas::build(ctx.glyphs, 28.0, LABELS),
        }
    }

    /// Appearance progress of box `i` at eased time `t`; the box is hidden while this is zero.
    pub fn appear(i: usize, t: f32) -> f32 {
        clamp01(t * 1.2 - i as f32 * 0.15)
    }
}

impl Producer for NumberList {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
        let box_w = geom::px(w * 0.12);
        let box_h = geom::px(h * 0.12);
        let start_x = geom::px(w * 0.1);
        let y = geom::px(h * 0.8);

        for (i, label) in LABELS.iter().enumerate() {
            let appear = Self::appear(i, ctx.t);
            if appear <= 0.0 {
                continue;
            }
            let ink = Ink::solid(ctx.palette.color(i), 1.0);
            let x = start_x + i as i32 * (box_w + 10);
            let y_anim = y - (Self::SLIDE_PX * ctx.ease.apply(appear)) as i32;
            stroke_rect(canvas, x, y_anim - box_h, x + box_w, y_anim, 2, ink);
            self.atlas
                .stamp(canvas, label, x + box_w / 3, y_anim - box_h / 3, ink);
        }
    }
}
