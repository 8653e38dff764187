use std::path::Path;

use rayon::prelude::*;

use crate::{
    config::settings::OverlaySettings,
    foundation::core::{FrameIndex, VideoFrame},
    foundation::error::{GlimmerError, GlimmerResult},
    media::{
        decode::FfmpegDecoder,
        encode::{EncodeConfig, FfmpegEncoder},
        probe::probe_video,
        stream::{FrameSink, FrameSource},
    },
    render::compositor::Compositor,
};

#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_composited: u64,
    pub frames_passed: u64,
}

impl RenderStats {
    fn record(&mut self, active: bool) {
        self.frames_total += 1;
        if active {
            self.frames_composited += 1;
        } else {
            self.frames_passed += 1;
        }
    }
}

/// Pull every frame from `source`, composite in-window frames and push all of them to `sink`.
///
/// Output order and count always match the input. With `threading.parallel`, frames are buffered
/// in chunks, rendered on a rayon pool and written back in order. `sink.finish()` is called once
/// the source is exhausted.
#[tracing::instrument(level = "debug", skip_all, fields(parallel = threading.parallel))]
pub fn overlay_stream(
    compositor: &Compositor,
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    threading: &RenderThreading,
) -> GlimmerResult<RenderStats> {
    let info = source.info();
    if info.size != compositor.config().frame_size {
        return Err(GlimmerError::validation(format!(
            "source is {}x{} but the overlay was configured for {}x{}",
            info.size.width,
            info.size.height,
            compositor.config().frame_size.width,
            compositor.config().frame_size.height
        )));
    }

    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut next_index = 0u64;
    loop {
        let mut chunk = Vec::with_capacity(chunk_size);
        while chunk.len() < chunk_size {
            match source.next_frame()? {
                Some(frame) => {
                    chunk.push((FrameIndex(next_index), frame));
                    next_index += 1;
                }
                None => break,
            }
        }
        if chunk.is_empty() {
            break;
        }
        let first = chunk[0].0;
        let count = chunk.len();

        let rendered = match &pool {
            Some(pool) => render_chunk_parallel(compositor, chunk, pool),
            None => render_chunk_sequential(compositor, chunk),
        };
        for (index, frame) in rendered {
            let frame = frame?;
            stats.record(compositor.is_active(index));
            sink.write_frame(&frame)?;
        }
        tracing::debug!(first = first.0, count, "chunk written");

        if count < chunk_size {
            break;
        }
    }

    sink.finish()?;
    if let Some(expected) = info.frame_count
        && expected != stats.frames_total
    {
        tracing::debug!(expected, got = stats.frames_total, "source frame count differed from probe");
    }
    tracing::info!(
        frames = stats.frames_total,
        composited = stats.frames_composited,
        passed = stats.frames_passed,
        "overlay stream finished"
    );
    Ok(stats)
}

type RenderedFrame = (FrameIndex, GlimmerResult<VideoFrame>);

fn render_chunk_sequential(
    compositor: &Compositor,
    chunk: Vec<(FrameIndex, VideoFrame)>,
) -> Vec<RenderedFrame> {
    chunk
        .into_iter()
        .map(|(index, frame)| (index, compositor.render_frame(frame, index)))
        .collect()
}

fn render_chunk_parallel(
    compositor: &Compositor,
    chunk: Vec<(FrameIndex, VideoFrame)>,
    pool: &rayon::ThreadPool,
) -> Vec<RenderedFrame> {
    pool.install(|| {
        chunk
            .into_par_iter()
            .map(|(index, frame)| (index, compositor.render_frame(frame, index)))
            .collect::<Vec<_>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> GlimmerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GlimmerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlimmerError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

/// Options for [`overlay_video`].
#[derive(Clone, Debug)]
pub struct OverlayVideoOpts {
    /// Whether to overwrite the output if it already exists.
    pub overwrite: bool,
    /// Copy the input's audio track into the output.
    pub keep_audio: bool,
    pub threading: RenderThreading,
}

impl Default for OverlayVideoOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            keep_audio: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Overlay a video file end to end with the system `ffmpeg`/`ffprobe`.
///
/// Settings are validated against the probed source before the decoder or encoder is started.
#[tracing::instrument(level = "debug", skip(settings, opts))]
pub fn overlay_video(
    input: &Path,
    output: &Path,
    settings: &OverlaySettings,
    opts: &OverlayVideoOpts,
) -> GlimmerResult<RenderStats> {
    let info = probe_video(input)?;
    let config = settings.resolve(&info)?;
    let compositor = Compositor::build(config)?;

    let mut decoder = FfmpegDecoder::open_with_info(input, info)?;
    let mut encoder = FfmpegEncoder::new(EncodeConfig {
        size: info.size,
        fps: info.fps,
        out_path: output.to_path_buf(),
        overwrite: opts.overwrite,
        audio_from: (opts.keep_audio && info.has_audio).then(|| input.to_path_buf()),
    })?;

    overlay_stream(&compositor, &mut decoder, &mut encoder, &opts.threading)
}

/// Decode up to frame `index` of `input` and return it with the overlay applied.
pub fn preview_frame(
    input: &Path,
    settings: &OverlaySettings,
    index: FrameIndex,
) -> GlimmerResult<VideoFrame> {
    let info = probe_video(input)?;
    let compositor = Compositor::build(settings.resolve(&info)?)?;
    let mut decoder = FfmpegDecoder::open_with_info(input, info)?;
    let frame = nth_frame(&mut decoder, index)?;
    compositor.render_frame(frame, index)
}

pub(crate) fn nth_frame(source: &mut dyn FrameSource, index: FrameIndex) -> GlimmerResult<VideoFrame> {
    let mut seen = 0u64;
    while let Some(frame) = source.next_frame()? {
        if seen == index.0 {
            return Ok(frame);
        }
        seen += 1;
    }
    Err(GlimmerError::validation(format!(
        "frame {} is past the end of the source ({seen} frames)",
        index.0
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
