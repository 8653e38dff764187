/// Easing curve applied to window-local time before producers see it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    /// Smoothstep: `t*t*(3-2t)`.
    #[default]
    EaseInOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = crate::GlimmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "ease-in-out" | "ease_in_out" | "easeinout" => Ok(Self::EaseInOut),
            other => Err(crate::GlimmerError::validation(format!(
                "unknown easing '{other}' (expected 'linear' or 'ease-in-out')"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
