use kurbo::{Point, Vec2};
use rand::Rng;

use crate::{
    foundation::core::FrameSize,
    foundation::error::{GlimmerError, GlimmerResult},
    foundation::math::gauss,
};

/// Shortest segment duration considered, in seconds.
const MIN_SEGMENT_SECONDS: f64 = 0.05;

/// Inputs of the path generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathParams {
    pub frame: FrameSize,
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub fps: f64,
    /// Number of positions to produce, one per window frame.
    pub frames: u64,
    pub avg_speed_px_per_sec: f64,
    pub avg_segment_seconds: f64,
}

impl PathParams {
    pub fn validate(&self) -> GlimmerResult<()> {
        if self.sprite_width == 0 || self.sprite_height == 0 {
            return Err(GlimmerError::validation("cursor sprite must be at least 1x1"));
        }
        if self.sprite_width > self.frame.width || self.sprite_height > self.frame.height {
            return Err(GlimmerError::validation(format!(
                "cursor sprite {}x{} does not fit in a {}x{} frame",
                self.sprite_width, self.sprite_height, self.frame.width, self.frame.height
            )));
        }
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(GlimmerError::validation(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }
        for (name, v) in [
            ("cursor speed", self.avg_speed_px_per_sec),
            ("cursor segment seconds", self.avg_segment_seconds),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GlimmerError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Largest top-left coordinate that keeps the sprite inside the frame.
    pub fn max_position(&self) -> (f64, f64) {
        (
            f64::from(self.frame.width.saturating_sub(self.sprite_width)),
            f64::from(self.frame.height.saturating_sub(self.sprite_height)),
        )
    }

    /// `ceil(window_seconds / avg_segment_seconds)`, at least 1 and at most one per frame.
    pub fn segment_count(&self) -> u64 {
        let seconds = self.frames as f64 / self.fps;
        let est = (seconds / self.avg_segment_seconds.max(MIN_SEGMENT_SECONDS)).ceil() as u64;
        est.clamp(1, self.frames.max(1))
    }
}

/// Position and per-frame velocity of the sprite's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathState {
    pub position: Point,
    pub velocity: Vec2,
}

impl PathState {
    /// Move one frame and bounce elastically off the walls of `[0, max_x] x [0, max_y]`.
    pub fn advance(&mut self, max_x: f64, max_y: f64) {
        self.position += self.velocity;
        let p = &mut self.position;
        let v = &mut self.velocity;
        if p.x < 0.0 {
            p.x = -p.x;
            v.x = -v.x;
        }
        if p.y < 0.0 {
            p.y = -p.y;
            v.y = -v.y;
        }
        if p.x > max_x {
            p.x = 2.0 * max_x - p.x;
            v.x = -v.x;
        }
        if p.y > max_y {
            p.y = 2.0 * max_y - p.y;
            v.y = -v.y;
        }
        // a step longer than the free span can overshoot even after reflecting
        p.x = p.x.clamp(0.0, max_x);
        p.y = p.y.clamp(0.0, max_y);
    }

    pub fn pixel(&self) -> (i32, i32) {
        (self.position.x as i32, self.position.y as i32)
    }
}

/// Top-left sprite positions, one per window frame, generated once before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorPath {
    positions: Vec<(i32, i32)>,
}

impl CursorPath {
    /// Random walk made of straight segments with jittered length and speed.
    ///
    /// Draw order from `rng` is fixed: start position, every heading, every segment length
    /// but the last, then one speed per segment as the walk proceeds.
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn generate(params: &PathParams, rng: &mut impl Rng) -> GlimmerResult<Self> {
        params.validate()?;
        if params.frames == 0 {
            return Ok(Self::default());
        }
        let (max_x, max_y) = params.max_position();

        let start = Point::new(
            rng.gen_range(0..=max_x as i64) as f64,
            rng.gen_range(0..=max_y as i64) as f64,
        );

        let segments = params.segment_count();
        let headings: Vec<Vec2> = (0..segments)
            .map(|_| Vec2::from_angle(rng.gen_range(0.0..std::f64::consts::TAU)))
            .collect();

        let lengths = segment_lengths(params, segments, rng);

        let speed_pf = params.avg_speed_px_per_sec / params.fps.max(1e-6);
        let mut state = PathState {
            position: start,
            velocity: Vec2::ZERO,
        };
        let mut positions = Vec::with_capacity(params.frames as usize);
        for (heading, len) in headings.into_iter().zip(lengths) {
            let speed = gauss(rng, speed_pf, speed_pf * 0.2).max(0.0);
            state.velocity = heading * speed;
            for _ in 0..len {
                state.advance(max_x, max_y);
                positions.push(state.pixel());
            }
        }

        tracing::debug!(segments, frames = positions.len(), "generated cursor path");
        Ok(Self { positions })
    }

    pub fn from_positions(positions: Vec<(i32, i32)>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[(i32, i32)] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position for window frame `local_frame`, if the path reaches that far.
    pub fn at(&self, local_frame: u64) -> Option<(i32, i32)> {
        usize::try_from(local_frame)
            .ok()
            .and_then(|i| self.positions.get(i).copied())
    }
}

/// Frame counts per segment. Every segment gets at least one frame and the total is exact.
fn segment_lengths(params: &PathParams, segments: u64, rng: &mut impl Rng) -> Vec<u64> {
    let avg = params.avg_segment_seconds;
    let mut remaining = params.frames;
    let mut lengths = Vec::with_capacity(segments as usize);
    for i in 0..segments - 1 {
        let drawn = (gauss(rng, avg, avg * 0.3) * params.fps) as i64;
        let seg = drawn.max(1) as u64;
        let reserve = segments - i - 1;
        let seg = seg.min(remaining.saturating_sub(reserve).max(1));
        lengths.push(seg);
        remaining -= seg;
    }
    lengths.push(remaining);
    lengths
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/path.rs"]
mod tests;
