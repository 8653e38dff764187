//! Glimmer is a procedural overlay engine for video.
//!
//! It draws a transient layer of geometric motifs, a word caption or a bouncing cursor onto the
//! frames of a base video inside a time window, with fade envelopes and seeded randomness:
//!
//! - Describe the run with [`OverlaySettings`] and bind it to a source with
//!   [`OverlaySettings::resolve`]
//! - Build a [`Compositor`] from the resulting [`GlobalConfig`]
//! - Composite single frames, or stream a whole [`FrameSource`] into a [`FrameSink`] with
//!   [`overlay_stream`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// Run configuration: settings, palette and the resolved per-run config.
pub mod config;
/// Cursor mode: sprite and wall-bounce path.
pub mod cursor;
/// ffmpeg-backed frame sources and sinks.
pub mod media;
/// The motif catalog.
pub mod producers;
/// Canvas, blending and the compositor.
pub mod render;
/// Keyword selection of producers.
pub mod selection;

pub use crate::animation::ease::Ease;
pub use crate::animation::timeline::{AnimationWindow, WindowSeconds};
pub use crate::config::palette::{DEFAULT_PALETTE, Palette};
pub use crate::config::settings::{CursorConfig, CursorSettings, GlobalConfig, OverlaySettings};
pub use crate::cursor::{CursorPath, CursorSprite, CursorTrail, PathParams, PathState};
pub use crate::foundation::core::{
    Fps, FrameIndex, FrameRange, FrameSize, Point, Rgb8, SourceInfo, Vec2, VideoFrame,
};
pub use crate::foundation::error::{GlimmerError, GlimmerResult};
pub use crate::foundation::math::{derive_seed, stream_rng};
pub use crate::media::decode::FfmpegDecoder;
pub use crate::media::encode::{EncodeConfig, FfmpegEncoder, is_ffmpeg_on_path};
pub use crate::media::probe::probe_video;
pub use crate::media::stream::{FrameSink, FrameSource, VecSink, VecSource};
pub use crate::producers::{BuildCtx, DrawCtx, MotifKind, Producer};
pub use crate::render::canvas::{Canvas, Coverage, Ink};
pub use crate::render::compositor::Compositor;
pub use crate::render::glyphs::GlyphMode;
pub use crate::render::pipeline::{
    OverlayVideoOpts, RenderStats, RenderThreading, overlay_stream, overlay_video, preview_frame,
};
pub use crate::selection::Selection;
