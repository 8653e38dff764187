use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    animation::timeline::{AnimationWindow, WindowSeconds},
    config::palette::{DEFAULT_PALETTE, Palette},
    cursor::CursorSprite,
    foundation::core::{Fps, FrameSize, SourceInfo},
    foundation::error::{GlimmerError, GlimmerResult},
    foundation::math::process_seed,
    producers::MotifKind,
    render::glyphs::GlyphMode,
    selection::Selection,
};

/// Arrow size used when cursor mode has no sprite image.
pub const DEFAULT_ARROW_SIZE: (u32, u32) = (24, 32);

/// Seconds-based overlay settings, as read from JSON and CLI flags.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlaySettings {
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub opacity: f32,
    pub fade_in_seconds: f64,
    pub fade_out_seconds: f64,
    pub easing: Ease,
    /// `#RRGGBB` entries; malformed ones are dropped when resolving.
    pub palette: Vec<String>,
    /// Free text driving motif selection, or a caption when it contains `text`.
    pub keywords: String,
    /// Explicit motif list; overrides `keywords` when present.
    pub motifs: Option<Vec<MotifKind>>,
    /// Fixed seed for reproducible runs; a process-random seed otherwise.
    pub seed: Option<u64>,
    pub glyphs: GlyphMode,
    /// Present in cursor mode.
    pub cursor: Option<CursorSettings>,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            start_seconds: 0.0,
            duration_seconds: 3.0,
            opacity: 0.85,
            fade_in_seconds: 0.3,
            fade_out_seconds: 0.3,
            easing: Ease::EaseInOut,
            palette: DEFAULT_PALETTE.split(',').map(str::to_owned).collect(),
            keywords: String::new(),
            motifs: None,
            seed: None,
            glyphs: GlyphMode::System,
            cursor: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorSettings {
    /// Sprite image; a built-in arrow is drawn when absent.
    pub image: Option<PathBuf>,
    /// Arrow size in pixels, used only without `image`.
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Applied to `image`.
    pub scale_factor: f32,
    pub avg_speed_px_per_sec: f64,
    pub avg_segment_seconds: f64,
}

impl Default for CursorSettings {
    fn default() -> Self {
        Self {
            image: None,
            width: None,
            height: None,
            scale_factor: 0.2,
            avg_speed_px_per_sec: 300.0,
            avg_segment_seconds: 0.5,
        }
    }
}

impl CursorSettings {
    pub fn validate(&self) -> GlimmerResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(GlimmerError::validation(format!(
                "cursor scale factor must be finite and > 0, got {}",
                self.scale_factor
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
        if self.width == Some(0) || self.height == Some(0) {
            return Err(GlimmerError::validation("cursor arrow size must be non-zero"));
        }
        Ok(())
    }

    /// Load or synthesize the sprite.
    pub fn sprite(&self) -> GlimmerResult<CursorSprite> {
        match &self.image {
            Some(path) => CursorSprite::load(path, self.scale_factor),
            None => Ok(CursorSprite::arrow(
                self.width.unwrap_or(DEFAULT_ARROW_SIZE.0),
                self.height.unwrap_or(DEFAULT_ARROW_SIZE.1),
            )),
        }
    }
}

/// Cursor parameters after resolution; the sprite is already loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub sprite: CursorSprite,
    pub avg_speed_px_per_sec: f64,
    pub avg_segment_seconds: f64,
}

/// Everything one run needs, fixed before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalConfig {
    pub frame_size: FrameSize,
    pub fps: Fps,
    pub opacity: f32,
    pub palette: Palette,
    pub window: AnimationWindow,
    pub selection: Selection,
    pub seed: u64,
    pub glyphs: GlyphMode,
    pub cursor: Option<CursorConfig>,
}

impl OverlaySettings {
    pub fn from_json_str(s: &str) -> GlimmerResult<Self> {
        serde_json::from_str(s).map_err(|e| GlimmerError::serde(format!("overlay settings: {e}")))
    }

    pub fn from_json_file(path: &Path) -> GlimmerResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> GlimmerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlimmerError::serde(e.to_string()))
    }

    pub fn validate(&self) -> GlimmerResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(GlimmerError::validation(format!(
                "opacity must be within [0, 1], got {}",
                self.opacity
            )));
        }
        for (name, v) in [
            ("start", self.start_seconds),
            ("duration", self.duration_seconds),
            ("fade-in", self.fade_in_seconds),
            ("fade-out", self.fade_out_seconds),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GlimmerError::validation(format!(
                    "{name} seconds must be finite and >= 0, got {v}"
                )));
            }
        }
        if let Some(cursor) = &self.cursor {
            cursor.validate()?;
        }
        Ok(())
    }

    /// Motif/caption selection, plus the cursor in cursor mode.
    pub fn selection(&self) -> Selection {
        let mut selection = match &self.motifs {
            Some(list) => Selection::from_motifs(list),
            None => Selection::from_text(&self.keywords),
        };
        selection.cursor = self.cursor.is_some();
        selection
    }

    /// Bind the settings to a concrete source. Fails before any frame is touched.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, source: &SourceInfo) -> GlimmerResult<GlobalConfig> {
        self.validate()?;

        let window = AnimationWindow::from_seconds(
            source.fps,
            WindowSeconds {
                start: self.start_seconds,
                duration: self.duration_seconds,
                fade_in: self.fade_in_seconds,
                fade_out: self.fade_out_seconds,
            },
            self.easing,
            source.frame_count,
        )?;

        let cursor = match &self.cursor {
            Some(c) => {
                let sprite = c.sprite()?;
                if sprite.width() > source.size.width || sprite.height() > source.size.height {
                    return Err(GlimmerError::validation(format!(
                        "cursor sprite {}x{} does not fit in a {}x{} frame",
                        sprite.width(),
                        sprite.height(),
                        source.size.width,
                        source.size.height
                    )));
                }
                Some(CursorConfig {
                    sprite,
                    avg_speed_px_per_sec: c.avg_speed_px_per_sec,
                    avg_segment_seconds: c.avg_segment_seconds,
                })
            }
            None => None,
        };

        let seed = match self.seed {
            Some(seed) => seed,
            None => {
                let seed = process_seed();
                tracing::info!(seed, "no seed given, run is not reproducible unless re-run with this seed");
                seed
            }
        };

        Ok(GlobalConfig {
            frame_size: source.size,
            fps: source.fps,
            opacity: self.opacity,
            palette: Palette::from_entries(self.palette.iter().map(String::as_str)),
            window,
            selection: self.selection(),
            seed,
            glyphs: self.glyphs,
            cursor,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
