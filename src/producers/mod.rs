//! Built-in procedural motifs.
//!
//! Every motif implements [`Producer`]: a pure draw of one frame into a [`Canvas`] given the eased
//! window time, the palette and a per-frame generator. Producers hold only immutable state built
//! once per run (glyph atlases, per-entity start values), so frames can render in any order.
//!
//! Adding a motif: write `producers/my_motif.rs` with a type implementing [`Producer`] and a
//! `new(&BuildCtx)` constructor, then add one line to `declare_motifs!` below.

use rand::rngs::StdRng;

use crate::{
    animation::ease::Ease,
    config::palette::Palette,
    foundation::error::GlimmerError,
    render::canvas::Canvas,
    render::glyphs::GlyphMode,
};

pub(crate) mod text_particles;

pub use text_particles::TextParticles;

/// Per-frame inputs shared by all producers.
#[derive(Clone, Copy, Debug)]
pub struct DrawCtx<'a> {
    /// Eased window time in `[0, 1]`.
    pub t: f32,
    /// Frame offset from the start of the window.
    pub local_frame: u64,
    pub palette: &'a Palette,
    /// The run's easing curve, for producers that ramp sub-animations.
    pub ease: Ease,
}

/// Run-level inputs available when a producer is constructed.
#[derive(Clone, Copy, Debug)]
pub struct BuildCtx {
    pub seed: u64,
    pub glyphs: GlyphMode,
}

pub trait Producer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Draw one frame. Must only add coverage and must tolerate any canvas size.
    fn draw(&self, canvas: &mut Canvas, ctx: &DrawCtx<'_>, rng: &mut StdRng);
}

macro_rules! declare_motifs {
    ( $( $kind:ident => $module:ident :: $ty:ident ),* $(,)? ) => {
        $( pub(crate) mod $module; )*
        $( pub use $module::$ty; )*

        /// Catalog of geometric motifs, in catalog order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum MotifKind {
            $( $kind, )*
        }

        impl MotifKind {
            pub const ALL: &'static [MotifKind] = &[ $( MotifKind::$kind, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( MotifKind::$kind => $module::$ty::NAME, )*
                }
            }

            pub fn build(self, ctx: &BuildCtx) -> Box<dyn Producer> {
                match self {
                    $( MotifKind::$kind => Box::new($module::$ty::new(ctx)), )*
                }
            }
        }
    };
}

declare_motifs! {
    Orbit => orbit::Orbit,
    ScatterDrift => scatter::ScatterDrift,
    ChaseRing => chase_ring::ChaseRing,
    Objects => objects::Objects,
    NumberList => number_list::NumberList,
    FlowLines => flow_lines::FlowLines,
    GridPulse => grid_pulse::GridPulse,
    Scanlines => scanlines::Scanlines,
    Constellation => constellation::Constellation,
    Waveform => waveform::Waveform,
    Radar => radar::Radar,
    CodeRain => code_rain::CodeRain,
}

impl std::fmt::Display for MotifKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MotifKind {
    type Err = GlimmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                GlimmerError::validation(format!(
                    "unknown motif '{s}' (known: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Shared geometry helpers. Coordinates truncate toward zero like the rest of the raster code.
pub(crate) mod geom {
    pub fn px(v: f64) -> i32 {
        v as i32
    }

    pub fn center(w: i32, h: i32) -> (i32, i32) {
        (px(f64::from(w) * 0.5), px(f64::from(h) * 0.5))
    }

    pub fn min_side(w: i32, h: i32) -> f64 {
        f64::from(w.min(h))
    }

    /// Integer point on a circle around `(cx, cy)`.
    pub fn on_circle(cx: i32, cy: i32, radius: i32, angle: f64) -> (i32, i32) {
        (
            px(f64::from(cx) + f64::from(radius) * angle.cos()),
            px(f64::from(cy) + f64::from(radius) * angle.sin()),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/producers/mod.rs"]
mod tests;
