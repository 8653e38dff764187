use std::path::Path;

use crate::foundation::{
    core::{Fps, FrameSize, SourceInfo},
    error::{GlimmerError, GlimmerResult},
};

/// Read dimensions, frame rate, frame count and audio presence with `ffprobe`.
#[tracing::instrument(level = "debug")]
pub fn probe_video(source_path: &Path) -> GlimmerResult<SourceInfo> {
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| GlimmerError::media(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(GlimmerError::media(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_json(&out.stdout)
}

pub(crate) fn parse_probe_json(json: &[u8]) -> GlimmerResult<SourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
        avg_frame_rate: Option<String>,
        nb_frames: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| GlimmerError::media(format!("ffprobe json parse failed: {e}")))?;
    let video = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| GlimmerError::media("no video stream found"))?;
    let width = video
        .width
        .ok_or_else(|| GlimmerError::media("missing video width from ffprobe"))?;
    let height = video
        .height
        .ok_or_else(|| GlimmerError::media("missing video height from ffprobe"))?;

    let (num, den) = [video.r_frame_rate.as_deref(), video.avg_frame_rate.as_deref()]
        .into_iter()
        .flatten()
        .find_map(parse_ff_ratio)
        .ok_or_else(|| GlimmerError::media("ffprobe reported no usable frame rate"))?;

    let frame_count = video
        .nb_frames
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n > 0);
    let has_audio = parsed
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));

    Ok(SourceInfo {
        size: FrameSize::new(width, height)?,
        fps: Fps::new(num, den)?,
        frame_count,
        has_audio,
    })
}

/// `"30000/1001"` -> `(30000, 1001)`; zero numerator or denominator is rejected.
pub(crate) fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split('/');
    let a = parts.next()?.trim().parse::<u32>().ok()?;
    let b = match parts.next() {
        Some(b) => b.trim().parse::<u32>().ok()?,
        None => 1,
    };
    if a == 0 || b == 0 {
        return None;
    }
    Some((a, b))
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
