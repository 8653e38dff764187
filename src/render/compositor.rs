use crate::{
    config::settings::GlobalConfig,
    cursor::{CursorPath, CursorTrail, PathParams},
    foundation::core::{FrameIndex, VideoFrame},
    foundation::error::{GlimmerError, GlimmerResult},
    foundation::math::stream_rng,
    producers::{BuildCtx, DrawCtx, Producer, TextParticles},
    render::{blend::blend_canvas_onto, canvas::Canvas},
};

/// Seed stream tag for the cursor path generator.
const CURSOR_PATH_TAG: &str = "cursor-path";

/// Per-frame overlay engine: the immutable run configuration plus its producers in draw order.
///
/// Built once per run. `render_frame` is a pure function of `(base frame, frame index)`, so frames
/// may be rendered in any order and on any thread.
pub struct Compositor {
    config: GlobalConfig,
    producers: Vec<Box<dyn Producer>>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("config", &self.config)
            .field("producers", &self.producer_names())
            .finish()
    }
}

impl Compositor {
    /// Instantiate the selected producers. The cursor path, when selected, is generated here,
    /// once, for the whole window.
    #[tracing::instrument(level = "debug", skip(config), fields(seed = config.seed))]
    pub fn build(config: GlobalConfig) -> GlimmerResult<Self> {
        let build = BuildCtx {
            seed: config.seed,
            glyphs: config.glyphs,
        };

        let mut producers: Vec<Box<dyn Producer>> = config
            .selection
            .motifs
            .iter()
            .map(|kind| kind.build(&build))
            .collect();

        if let Some(caption) = &config.selection.caption {
            producers.push(Box::new(TextParticles::new(caption, &build)));
        }

        if config.selection.cursor {
            let cursor = config.cursor.as_ref().ok_or_else(|| {
                GlimmerError::validation("cursor selected but no cursor settings were given")
            })?;
            let params = PathParams {
                frame: config.frame_size,
                sprite_width: cursor.sprite.width(),
                sprite_height: cursor.sprite.height(),
                fps: config.fps.as_f64(),
                frames: config.window.len_frames(),
                avg_speed_px_per_sec: cursor.avg_speed_px_per_sec,
                avg_segment_seconds: cursor.avg_segment_seconds,
            };
            let mut rng = stream_rng(config.seed, CURSOR_PATH_TAG, 0);
            let path = CursorPath::generate(&params, &mut rng)?;
            producers.push(Box::new(CursorTrail::new(cursor.sprite.clone(), path)));
        }

        let this = Self { config, producers };
        tracing::info!(
            start_frame = this.config.window.start_frame(),
            end_frame = this.config.window.end_frame(),
            fade_in = this.config.window.fade_in_frames,
            fade_out = this.config.window.fade_out_frames,
            producers = ?this.producer_names(),
            "overlay ready"
        );
        if this.producers.is_empty() {
            tracing::warn!("no producers selected, frames will pass through unchanged");
        }
        Ok(this)
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn producer_names(&self) -> Vec<&'static str> {
        self.producers.iter().map(|p| p.name()).collect()
    }

    pub fn is_active(&self, index: FrameIndex) -> bool {
        self.config.window.is_active(index)
    }

    /// The finalized overlay layer for `index`, or `None` when nothing would be blended.
    pub fn render_canvas(&self, index: FrameIndex) -> Option<Canvas> {
        let window = &self.config.window;
        let local_frame = window.range.local(index)?;
        let scalar = window.blend_scalar(index, self.config.opacity);
        if scalar <= 0.0 || self.producers.is_empty() {
            return None;
        }

        let ctx = DrawCtx {
            t: window.eased_time(index),
            local_frame,
            palette: &self.config.palette,
            ease: window.ease,
        };
        let mut canvas = Canvas::new(self.config.frame_size);
        for producer in &self.producers {
            let mut rng = stream_rng(self.config.seed, producer.name(), index.0);
            producer.draw(&mut canvas, &ctx, &mut rng);
        }
        canvas.finalize_alpha(scalar);
        Some(canvas)
    }

    /// Composite the overlay for `index` onto `base`. Frames outside the window come back as-is.
    pub fn render_frame(&self, mut base: VideoFrame, index: FrameIndex) -> GlimmerResult<VideoFrame> {
        if base.size() != self.config.frame_size {
            return Err(GlimmerError::validation(format!(
                "frame {} is {}x{}, expected {}x{}",
                index.0,
                base.width,
                base.height,
                self.config.frame_size.width,
                self.config.frame_size.height
            )));
        }
        if let Some(canvas) = self.render_canvas(index) {
            blend_canvas_onto(&mut base, &canvas)?;
        }
        Ok(base)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
