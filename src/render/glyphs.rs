use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
};

use crate::render::canvas::{Canvas, Ink};

/// Where glyph shapes come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphMode {
    /// Rasterize with system fonts through usvg/resvg; falls back to blocks per string.
    #[default]
    System,
    /// Deterministic block glyphs, independent of installed fonts.
    Blocks,
}

impl std::str::FromStr for GlyphMode {
    type Err = crate::GlimmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "blocks" => Ok(Self::Blocks),
            other => Err(crate::GlimmerError::validation(format!(
                "unknown glyph mode '{other}' (expected 'system' or 'blocks')"
            ))),
        }
    }
}

/// Coverage bitmap for one string, anchored at its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    /// Distance from the top row of the mask down to the baseline.
    pub baseline: i32,
    pub coverage: Vec<f32>,
}

impl GlyphMask {
    fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            baseline: 0,
            coverage: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c <= 0.0)
    }
}

/// Pre-rasterized strings at one pixel size. Built once per run, read-only afterwards.
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    px_size: f32,
    masks: HashMap<String, GlyphMask>,
}

const FONT_FAMILIES: &str = "DejaVu Sans, Noto Sans, Liberation Sans, Arial, Helvetica, sans-serif";

impl GlyphAtlas {
    pub fn build<'a>(mode: GlyphMode, px_size: f32, texts: impl IntoIterator<Item = &'a str>) -> Self {
        let px_size = px_size.max(4.0);
        let mut masks = HashMap::new();
        let mut fell_back = 0usize;
        for text in texts {
            if masks.contains_key(text) {
                continue;
            }
            let mask = match mode {
                GlyphMode::Blocks => block_mask(text, px_size),
                GlyphMode::System => match rasterize_text(text, px_size) {
                    Some(mask) => mask,
                    None => {
                        fell_back += 1;
                        block_mask(text, px_size)
                    }
                },
            };
            masks.insert(text.to_owned(), mask);
        }
        if fell_back > 0 {
            tracing::warn!(
                fell_back,
                px_size,
                "no usable system font for some glyphs, drawing block glyphs instead"
            );
        }
        Self { px_size, masks }
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }

    /// Mask for `text`; strings not seen at build time get block glyphs.
    pub fn mask(&self, text: &str) -> std::borrow::Cow<'_, GlyphMask> {
        match self.masks.get(text) {
            Some(m) => std::borrow::Cow::Borrowed(m),
            None => std::borrow::Cow::Owned(block_mask(text, self.px_size)),
        }
    }

    /// Draw `text` with its left edge at `x` and baseline at `baseline_y`.
    pub fn stamp(&self, canvas: &mut Canvas, text: &str, x: i32, baseline_y: i32, ink: Ink) {
        let mask = self.mask(text);
        let top = baseline_y - mask.baseline;
        for my in 0..mask.height {
            for mx in 0..mask.width {
                let cov = mask.coverage[(my * mask.width + mx) as usize];
                canvas.put_weighted(x + mx as i32, top + my as i32, ink, cov);
            }
        }
    }
}

/// Font-independent glyphs: one filled cell per visible character.
fn block_mask(text: &str, px_size: f32) -> GlyphMask {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return GlyphMask::empty();
    }
    let cell_w = (px_size * 0.6).round().max(2.0) as u32;
    let cell_h = (px_size * 0.7).round().max(2.0) as u32;
    let gap = (cell_w / 5).max(1);
    let width = cell_w * chars.len() as u32;
    let mut coverage = vec![0.0f32; (width * cell_h) as usize];
    for (i, ch) in chars.iter().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let x0 = i as u32 * cell_w;
        for y in 0..cell_h {
            for x in x0..x0 + cell_w - gap {
                coverage[(y * width + x) as usize] = 1.0;
            }
        }
    }
    GlyphMask {
        width,
        height: cell_h,
        baseline: cell_h as i32,
        coverage,
    }
}

fn shared_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Arc::new(db)
    })
    .clone()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Rasterize through an SVG `<text>` element and crop to the inked area.
/// Returns `None` when no font produced any coverage.
fn rasterize_text(text: &str, px_size: f32) -> Option<GlyphMask> {
    if text.trim().is_empty() {
        return Some(block_mask(text, px_size));
    }

    let pad = (px_size * 0.25).ceil();
    let chars = text.chars().count() as f32;
    let w = (px_size * 1.1 * chars + 2.0 * pad).ceil() as u32;
    let h = (px_size * 1.6).ceil() as u32;
    let baseline = (px_size * 1.15).ceil();

    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><text x="{pad}" y="{baseline}" font-family="{FONT_FAMILIES}" font-size="{px_size}" fill="#ffffff">{}</text></svg>"##,
        escape_xml(text)
    );

    let opts = usvg::Options {
        fontdb: shared_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).ok()?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let data = pixmap.data();
    let alpha_at = |x: u32, y: u32| f32::from(data[((y * w + x) * 4 + 3) as usize]) / 255.0;

    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0u32, 0u32);
    for y in 0..h {
        for x in 0..w {
            if alpha_at(x, y) > 0.0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }
    if min_x == u32::MAX {
        return None;
    }

    let width = max_x - min_x + 1;
    let height = max_y - min_y + 1;
    let mut coverage = Vec::with_capacity((width * height) as usize);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            coverage.push(alpha_at(x, y));
        }
    }
    Some(GlyphMask {
        width,
        height,
        baseline: baseline as i32 - min_y as i32,
        coverage,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyphs.rs"]
mod tests;
