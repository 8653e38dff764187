use crate::foundation::core::Rgb8;
use crate::foundation::error::{GlimmerError, GlimmerResult};

/// Substituted when parsing yields no usable colors.
pub const FALLBACK_COLORS: [Rgb8; 3] = [
    Rgb8::new(200, 255, 200),
    Rgb8::new(255, 200, 255),
    Rgb8::new(255, 200, 200),
];

/// Palette used when the caller supplies none.
pub const DEFAULT_PALETTE: &str = "#00FFC8,#19A7F6,#9B59B6,#F39C12,#E74C3C";

/// Ordered, non-empty color sequence. Producers index it cyclically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb8>) -> GlimmerResult<Self> {
        if colors.is_empty() {
            return Err(GlimmerError::validation("palette must contain at least one color"));
        }
        Ok(Self { colors })
    }

    pub fn fallback() -> Self {
        Self {
            colors: FALLBACK_COLORS.to_vec(),
        }
    }

    /// Parse a comma-separated list of `#RRGGBB` entries.
    ///
    /// Malformed entries are dropped (order of the rest is kept); an empty result falls back to
    /// [`FALLBACK_COLORS`]. Never fails.
    pub fn parse(list: &str) -> Self {
        Self::from_entries(list.split(','))
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut colors = Vec::new();
        for entry in entries {
            match parse_hex_rgb(entry) {
                Some(c) => colors.push(c),
                None => {
                    if !entry.trim().is_empty() {
                        tracing::warn!(entry, "dropping malformed palette entry");
                    }
                }
            }
        }
        if colors.is_empty() {
            tracing::warn!("palette is empty after parsing, using fallback colors");
            return Self::fallback();
        }
        Self { colors }
    }

    /// `colors[i % len]`.
    pub fn color(&self, i: usize) -> Rgb8 {
        self.colors[i % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn parse_hex_rgb(entry: &str) -> Option<Rgb8> {
    let s = entry.trim();
    let s = s.trim_start_matches('#');
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    Some(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
}

#[cfg(test)]
#[path = "../../tests/unit/config/palette.rs"]
mod tests;
