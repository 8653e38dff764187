use crate::foundation::{
    core::{SourceInfo, VideoFrame},
    error::{GlimmerError, GlimmerResult},
};

/// Decoded frames in strictly increasing order.
pub trait FrameSource {
    fn info(&self) -> SourceInfo;

    /// Next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> GlimmerResult<Option<VideoFrame>>;
}

/// Accepts frames in order; `finish` flushes and closes the output.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &VideoFrame) -> GlimmerResult<()>;

    fn finish(&mut self) -> GlimmerResult<()>;
}

/// In-memory source, mainly for tests and previews.
#[derive(Clone, Debug)]
pub struct VecSource {
    info: SourceInfo,
    frames: std::collections::VecDeque<VideoFrame>,
}

impl VecSource {
    pub fn new(info: SourceInfo, frames: Vec<VideoFrame>) -> GlimmerResult<Self> {
        if let Some(bad) = frames.iter().find(|f| f.size() != info.size) {
            return Err(GlimmerError::validation(format!(
                "source frame is {}x{}, expected {}x{}",
                bad.width, bad.height, info.size.width, info.size.height
            )));
        }
        Ok(Self {
            info,
            frames: frames.into(),
        })
    }
}

impl FrameSource for VecSource {
    fn info(&self) -> SourceInfo {
        self.info
    }

    fn next_frame(&mut self) -> GlimmerResult<Option<VideoFrame>> {
        Ok(self.frames.pop_front())
    }
}

/// In-memory sink that keeps every frame.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    pub frames: Vec<VideoFrame>,
    pub finished: bool,
}

impl FrameSink for VecSink {
    fn write_frame(&mut self, frame: &VideoFrame) -> GlimmerResult<()> {
        if self.finished {
            return Err(GlimmerError::media("sink is already finished"));
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> GlimmerResult<()> {
        self.finished = true;
        Ok(())
    }
}
