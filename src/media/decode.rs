use std::{
    io::Read,
    path::{Path, PathBuf},
    process::{Child, ChildStdout, Command, Stdio},
};

use crate::{
    foundation::core::{SourceInfo, VideoFrame},
    foundation::error::{GlimmerError, GlimmerResult},
    media::{encode::is_ffmpeg_on_path, probe::probe_video, stream::FrameSource},
};

/// Streams `rgb24` frames out of an `ffmpeg` child process.
pub struct FfmpegDecoder {
    path: PathBuf,
    info: SourceInfo,
    child: Child,
    stdout: Option<ChildStdout>,
    frame_len: usize,
}

impl FfmpegDecoder {
    /// Probe `path` and start decoding from its first frame.
    pub fn open(path: &Path) -> GlimmerResult<Self> {
        let info = probe_video(path)?;
        Self::open_with_info(path, info)
    }

    pub fn open_with_info(path: &Path, info: SourceInfo) -> GlimmerResult<Self> {
        if !is_ffmpeg_on_path() {
            return Err(GlimmerError::media(
                "ffmpeg is required for video decoding, but was not found on PATH",
            ));
        }
        let mut child = Command::new("ffmpeg")
            .args(["-v", "error", "-nostdin", "-i"])
            .arg(path)
            .args(["-map", "0:v:0", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GlimmerError::media(format!("failed to spawn ffmpeg decoder: {e}")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| GlimmerError::media("failed to open ffmpeg stdout (unexpected)"))?;

        tracing::debug!(path = %path.display(), ?info, "opened decoder");
        Ok(Self {
            path: path.to_path_buf(),
            frame_len: info.size.pixel_count() * 3,
            info,
            child,
            stdout: Some(stdout),
        })
    }

    /// Reap the child and surface its exit status.
    fn finish(&mut self) -> GlimmerResult<()> {
        drop(self.stdout.take());
        let output = self
            .child
            .wait()
            .map_err(|e| GlimmerError::media(format!("failed to wait for ffmpeg decoder: {e}")))?;
        if !output.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = self.child.stderr.take() {
                let _ = pipe.read_to_string(&mut stderr);
            }
            return Err(GlimmerError::media(format!(
                "ffmpeg decoder for '{}' exited with status {output}: {}",
                self.path.display(),
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl FrameSource for FfmpegDecoder {
    fn info(&self) -> SourceInfo {
        self.info
    }

    fn next_frame(&mut self) -> GlimmerResult<Option<VideoFrame>> {
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };
        let mut buf = vec![0u8; self.frame_len];
        let filled = read_full(stdout, &mut buf)
            .map_err(|e| GlimmerError::media(format!("failed to read decoded frame: {e}")))?;
        if filled == 0 {
            self.finish()?;
            return Ok(None);
        }
        if filled < self.frame_len {
            return Err(GlimmerError::media(format!(
                "short read from ffmpeg decoder: got {filled} of {} bytes",
                self.frame_len
            )));
        }
        VideoFrame::new(self.info.size.width, self.info.size.height, buf).map(Some)
    }
}

impl Drop for FfmpegDecoder {
    fn drop(&mut self) {
        if self.stdout.is_some() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Fill `buf` as far as the reader allows; returns the byte count (short only at EOF).
pub(crate) fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "../../tests/unit/media/decode.rs"]
mod tests;
