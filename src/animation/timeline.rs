use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, FrameRange, Fps},
    foundation::error::{GlimmerError, GlimmerResult},
    foundation::math::clamp01,
};

/// Seconds-based window description, converted to frames with `round(seconds * fps)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSeconds {
    pub start: f64,
    pub duration: f64,
    pub fade_in: f64,
    pub fade_out: f64,
}

/// The half-open frame range during which the overlay is composited, plus its fade envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationWindow {
    pub range: FrameRange,
    pub fade_in_frames: u32,
    pub fade_out_frames: u32,
    pub ease: Ease,
}

impl AnimationWindow {
    pub fn new(
        range: FrameRange,
        fade_in_frames: u32,
        fade_out_frames: u32,
        ease: Ease,
    ) -> GlimmerResult<Self> {
        if range.is_empty() {
            return Err(GlimmerError::validation(format!(
                "animation window is empty (start frame {} >= end frame {})",
                range.start.0, range.end.0
            )));
        }
        Ok(Self {
            range,
            fade_in_frames,
            fade_out_frames,
            ease,
        })
    }

    /// Build a window from seconds. `total_frames`, when the source reports it, clamps the end.
    pub fn from_seconds(
        fps: Fps,
        secs: WindowSeconds,
        ease: Ease,
        total_frames: Option<u64>,
    ) -> GlimmerResult<Self> {
        for (name, v) in [
            ("start", secs.start),
            ("duration", secs.duration),
            ("fade-in", secs.fade_in),
            ("fade-out", secs.fade_out),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GlimmerError::validation(format!(
                    "{name} seconds must be finite and >= 0, got {v}"
                )));
            }
        }

        let start = fps.secs_to_frames_round(secs.start);
        let mut end = start.saturating_add(fps.secs_to_frames_round(secs.duration));
        if let Some(total) = total_frames {
            end = end.min(total);
        }
        if end <= start {
            return Err(GlimmerError::validation(format!(
                "animation window [{:.3}s, +{:.3}s) covers no frames of the source",
                secs.start, secs.duration
            )));
        }

        let to_u32 = |s: f64| u32::try_from(fps.secs_to_frames_round(s)).unwrap_or(u32::MAX);
        Self::new(
            FrameRange::new(FrameIndex(start), FrameIndex(end))?,
            to_u32(secs.fade_in),
            to_u32(secs.fade_out),
            ease,
        )
    }

    pub fn start_frame(&self) -> u64 {
        self.range.start.0
    }

    pub fn end_frame(&self) -> u64 {
        self.range.end.0
    }

    pub fn len_frames(&self) -> u64 {
        self.range.len_frames()
    }

    pub fn is_active(&self, f: FrameIndex) -> bool {
        self.range.contains(f)
    }

    /// `(f - start) / max(1, end - start)`, clamped to `[0, 1]`.
    pub fn normalized_time(&self, f: FrameIndex) -> f32 {
        let local = f.0.saturating_sub(self.start_frame());
        clamp01((local as f64 / self.len_frames().max(1) as f64) as f32)
    }

    pub fn eased_time(&self, f: FrameIndex) -> f32 {
        self.ease.apply(self.normalized_time(f))
    }

    /// Fade envelope: the lesser of the entry and exit ramps; each ramp is 1 outside its span.
    pub fn fade(&self, f: FrameIndex) -> f32 {
        let since_start = f.0 as i64 - self.start_frame() as i64;
        let until_end = self.end_frame() as i64 - f.0 as i64;
        let fade_in = i64::from(self.fade_in_frames);
        let fade_out = i64::from(self.fade_out_frames);

        let entry = if since_start < fade_in {
            clamp01(since_start as f32 / fade_in.max(1) as f32)
        } else {
            1.0
        };
        let exit = if until_end <= fade_out {
            clamp01(until_end as f32 / fade_out.max(1) as f32)
        } else {
            1.0
        };
        entry.min(exit)
    }

    /// Final per-frame blend scalar, `opacity * fade`, in `[0, 1]`.
    pub fn blend_scalar(&self, f: FrameIndex, opacity: f32) -> f32 {
        clamp01(clamp01(opacity) * self.fade(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
