//! Frame-sequential video I/O. The engine only sees [`FrameSource`] and [`FrameSink`]; the ffmpeg
//! implementations shell out to the system `ffmpeg`/`ffprobe` binaries.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod probe;
pub(crate) mod stream;
