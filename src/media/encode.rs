use std::{
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::{
    foundation::core::{Fps, FrameSize, VideoFrame},
    foundation::error::{GlimmerError, GlimmerResult},
    media::stream::FrameSink,
};

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub size: FrameSize,
    pub fps: Fps,
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Copy the first audio track of this file into the output unchanged.
    pub audio_from: Option<PathBuf>,
}

impl EncodeConfig {
    pub fn validate(&self) -> GlimmerResult<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(GlimmerError::validation("encode width/height must be non-zero"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(GlimmerError::validation("encode fps must be non-zero"));
        }
        if !self.size.width.is_multiple_of(2) || !self.size.height.is_multiple_of(2) {
            return Err(GlimmerError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Ok(())
    }

    /// Arguments after the global flags, up to and including the output path.
    pub(crate) fn ffmpeg_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["-f", "rawvideo", "-pix_fmt", "rgb24"]
            .map(String::from)
            .to_vec();
        args.extend([
            "-s".to_string(),
            format!("{}x{}", self.size.width, self.size.height),
            "-r".to_string(),
            format!("{}/{}", self.fps.num, self.fps.den),
            "-i".to_string(),
            "pipe:0".to_string(),
        ]);

        match &self.audio_from {
            Some(src) => {
                args.extend(["-i".to_string(), src.display().to_string()]);
                args.extend(
                    ["-map", "0:v:0", "-map", "1:a:0?", "-c:a", "copy", "-shortest"]
                        .map(String::from),
                );
            }
            None => args.push("-an".to_string()),
        }

        args.extend(
            [
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ]
            .map(String::from),
        );
        args.push(self.out_path.display().to_string());
        args
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> GlimmerResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Pipes `rgb24` frames into the system `ffmpeg`, producing H.264/yuv420p MP4.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl FfmpegEncoder {
    pub fn new(cfg: EncodeConfig) -> GlimmerResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(GlimmerError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(GlimmerError::media(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if cfg.overwrite { "-y" } else { "-n" });
        cmd.args(["-loglevel", "error"]);
        cmd.args(cfg.ffmpeg_args());

        let mut child = cmd.spawn().map_err(|e| {
            GlimmerError::media(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| GlimmerError::media("failed to open ffmpeg stdin (unexpected)"))?;

        Ok(Self {
            cfg,
            child,
            stdin: Some(stdin),
        })
    }
}

impl FrameSink for FfmpegEncoder {
    fn write_frame(&mut self, frame: &VideoFrame) -> GlimmerResult<()> {
        if frame.size() != self.cfg.size {
            return Err(GlimmerError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.size.width, self.cfg.size.height
            )));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(GlimmerError::media("ffmpeg encoder is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&frame.data).map_err(|e| {
            GlimmerError::media(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;

        Ok(())
    }

    fn finish(&mut self) -> GlimmerResult<()> {
        if self.stdin.is_none() {
            return Ok(());
        }
        drop(self.stdin.take());

        let status = self
            .child
            .wait()
            .map_err(|e| GlimmerError::media(format!("failed to wait for ffmpeg to finish: {e}")))?;

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = self.child.stderr.take() {
                use std::io::Read as _;
                let _ = pipe.read_to_string(&mut stderr);
            }
            return Err(GlimmerError::media(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/encode.rs"]
mod tests;
