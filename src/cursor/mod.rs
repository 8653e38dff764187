//! Cursor mode: a sprite bouncing around the frame along a precomputed path.

pub(crate) mod path;
pub(crate) mod sprite;

pub use path::{CursorPath, PathParams, PathState};
pub use sprite::CursorSprite;

use rand::rngs::StdRng;

use crate::{
    producers::{DrawCtx, Producer},
    render::canvas::Canvas,
};

/// Producer that places the sprite at the path position for the current window frame.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    sprite: CursorSprite,
    path: CursorPath,
}

impl CursorTrail {
    pub const NAME: &'static str = "cursor";

    pub fn new(sprite: CursorSprite, path: CursorPath) -> Self {
        Self { sprite, path }
    }

    pub fn sprite(&self) -> &CursorSprite {
        &self.sprite
    }

    pub fn path(&self) -> &CursorPath {
        &self.path
    }
}

impl Producer for CursorTrail {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, _rng: &mut StdRng) {
        let Some((x, y)) = self.path.at(ctx.local_frame) else {
            return;
        };
        let max_x = (canvas.width() - self.sprite.width() as i32).max(0);
        let max_y = (canvas.height() - self.sprite.height() as i32).max(0);
        self.sprite
            .stamp(canvas, x.clamp(0, max_x), y.clamp(0, max_y));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/mod.rs"]
mod tests;
