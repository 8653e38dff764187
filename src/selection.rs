//! Keyword selection of producers.
//!
//! Free text is matched case-insensitively against a fixed lexicon. Each motif is picked at most
//! once, in lexicon order, which is also the draw order. The word `text` switches the run to a
//! caption overlay and clears every geometric motif.

use crate::producers::MotifKind;

/// Substrings that select each motif, in draw order.
pub const LEXICON: &[(MotifKind, &[&str])] = &[
    (MotifKind::Orbit, &["loop"]),
    (MotifKind::ScatterDrift, &["loops_v2", "loops v2", "scatter", "drift"]),
    (MotifKind::ChaseRing, &["loops_v3", "loops v3", "chase"]),
    (MotifKind::Objects, &["object"]),
    (MotifKind::NumberList, &["list", "number"]),
    (MotifKind::FlowLines, &["flow"]),
    (MotifKind::GridPulse, &["grid"]),
    (MotifKind::Scanlines, &["scanline"]),
    (MotifKind::Constellation, &["constellation", "stars"]),
    (MotifKind::Waveform, &["waveform"]),
    (MotifKind::Radar, &["radar"]),
    (MotifKind::CodeRain, &["code", "matrix"]),
];

/// Reserved word that turns the run into a caption overlay.
pub const CAPTION_TRIGGER: &str = "text";

/// What draws on each active frame, in draw order: motifs, then caption, then cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    pub motifs: Vec<MotifKind>,
    pub caption: Option<String>,
    pub cursor: bool,
}

impl Selection {
    /// Keyword-driven selection for motif mode.
    pub fn from_text(text: &str) -> Self {
        if let Some(caption) = caption_text(text) {
            return Self {
                motifs: Vec::new(),
                caption: Some(caption),
                cursor: false,
            };
        }
        Self {
            motifs: motifs_for_text(text),
            caption: None,
            cursor: false,
        }
    }

    /// An explicit motif list; duplicates are dropped, first occurrence wins.
    pub fn from_motifs(list: &[MotifKind]) -> Self {
        let mut motifs = Vec::with_capacity(list.len());
        for kind in list {
            if !motifs.contains(kind) {
                motifs.push(*kind);
            }
        }
        Self {
            motifs,
            caption: None,
            cursor: false,
        }
    }

    /// Cursor mode: the path producer alone.
    pub fn cursor() -> Self {
        Self {
            motifs: Vec::new(),
            caption: None,
            cursor: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty() && self.caption.is_none() && !self.cursor
    }

    /// Producer names in draw order, for logging.
    pub fn describe(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.motifs.iter().map(|k| k.name()).collect();
        if self.caption.is_some() {
            names.push(crate::producers::TextParticles::NAME);
        }
        if self.cursor {
            names.push(crate::cursor::CursorTrail::NAME);
        }
        names
    }
}

/// Motifs whose keywords occur in `text`, in lexicon order.
pub fn motifs_for_text(text: &str) -> Vec<MotifKind> {
    let lower = text.to_lowercase();
    LEXICON
        .iter()
        .filter(|(_, words)| words.iter().any(|w| lower.contains(w)))
        .map(|(kind, _)| *kind)
        .collect()
}

/// The caption to display when `text` contains the trigger word.
///
/// A leading `text ` prefix is stripped; `text` on its own yields an empty caption; otherwise
/// the whole input is shown.
pub fn caption_text(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if !lower.contains(CAPTION_TRIGGER) {
        return None;
    }
    let trimmed = text.trim_start();
    let head: String = trimmed.chars().take(CAPTION_TRIGGER.len() + 1).collect();
    let caption = if head.to_lowercase() == format!("{CAPTION_TRIGGER} ") {
        trimmed[head.len()..].to_owned()
    } else if trimmed.to_lowercase() == CAPTION_TRIGGER {
        String::new()
    } else {
        text.to_owned()
    };
    Some(caption)
}

#[cfg(test)]
#[path = "../tests/unit/selection.rs"]
mod tests;
