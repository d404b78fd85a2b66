//! Sampler settings and symbolic filter/wrap modes.
//!
//! The draw-loop API talks in two small symbolic vocabularies, [`Filter`]
//! (`smooth`/`sharp`) and [`Wrap`] (`clamp`/`repeat`), which translate to the
//! native [`FilterMode`]/[`AddressMode`] constants a context understands.
//! Name parsing is total: unrecognized or absent names fall back to the
//! documented default instead of failing, so a typo never halts a draw loop.
//! Validation therefore happens once, when a name is parsed into an enum, and
//! the per-draw path is fully typed.

use crate::backend::types::{AddressMode, FilterMode};

/// Symbolic texture filter: `smooth` interpolates, `sharp` is nearest-neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Smooth,
    Sharp,
}

impl Filter {
    /// Parse a symbolic filter name.
    ///
    /// Unrecognized or absent names fall back to [`Filter::Smooth`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("smooth") => Self::Smooth,
            Some("sharp") => Self::Sharp,
            _ => Self::Smooth,
        }
    }

    /// Translate to the native filter constant.
    pub fn to_native(self) -> FilterMode {
        match self {
            Self::Smooth => FilterMode::Linear,
            Self::Sharp => FilterMode::Nearest,
        }
    }
}

/// Symbolic wrap mode for texture coordinates outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrap {
    #[default]
    Clamp,
    Repeat,
}

impl Wrap {
    /// Parse a symbolic wrap name.
    ///
    /// Unrecognized or absent names fall back to [`Wrap::Clamp`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("clamp") => Self::Clamp,
            Some("repeat") => Self::Repeat,
            _ => Self::Clamp,
        }
    }

    /// Translate to the native address mode constant.
    pub fn to_native(self) -> AddressMode {
        match self {
            Self::Clamp => AddressMode::ClampToEdge,
            Self::Repeat => AddressMode::Repeat,
        }
    }
}

/// Bundle of filter and wrap settings applied to a bound texture.
///
/// Immutable after construction; share it freely across bind calls.
///
/// # Example
///
/// ```
/// use immediate_materials::{Filter, Sampler, Wrap};
///
/// let tiled = Sampler::default().with_wrap_x(Wrap::Repeat).with_wrap_y(Wrap::Repeat);
/// assert_eq!(tiled.min_filter, Filter::Smooth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sampler {
    /// Filter used when the texture is minified.
    pub min_filter: Filter,
    /// Filter used when the texture is magnified.
    pub mag_filter: Filter,
    /// Horizontal wrap mode.
    pub wrap_x: Wrap,
    /// Vertical wrap mode.
    pub wrap_y: Wrap,
}

impl Sampler {
    /// Create a sampler with explicit settings.
    pub fn new(min_filter: Filter, mag_filter: Filter, wrap_x: Wrap, wrap_y: Wrap) -> Self {
        Self {
            min_filter,
            mag_filter,
            wrap_x,
            wrap_y,
        }
    }

    /// Nearest-neighbor sampler for crisp pixel art and sprites.
    pub fn point() -> Self {
        Self {
            min_filter: Filter::Sharp,
            mag_filter: Filter::Sharp,
            ..Default::default()
        }
    }

    /// Smooth sampler that tiles in both directions.
    pub fn repeating() -> Self {
        Self {
            wrap_x: Wrap::Repeat,
            wrap_y: Wrap::Repeat,
            ..Default::default()
        }
    }

    /// Set both filters.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.min_filter = filter;
        self.mag_filter = filter;
        self
    }

    /// Set the horizontal wrap mode.
    pub fn with_wrap_x(mut self, wrap: Wrap) -> Self {
        self.wrap_x = wrap;
        self
    }

    /// Set the vertical wrap mode.
    pub fn with_wrap_y(mut self, wrap: Wrap) -> Self {
        self.wrap_y = wrap;
        self
    }
}

/// Named sampler presets recognized by [`Renderer::texture`](crate::Renderer::texture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerPreset {
    /// Nearest-neighbor, clamped. For sprites and pixel art.
    Sprite,
    /// Smooth, tiling in both directions.
    Repeat,
}

impl SamplerPreset {
    /// Parse a preset name. Unlike filter/wrap names this is not a fallback
    /// parse: an unknown preset name means "no preset".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sprite" => Some(Self::Sprite),
            "repeat" => Some(Self::Repeat),
            _ => None,
        }
    }
}

/// Sampler selection for a texture call: an explicit sampler or a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerSource {
    Preset(SamplerPreset),
    Custom(Sampler),
}

impl From<Sampler> for SamplerSource {
    fn from(sampler: Sampler) -> Self {
        Self::Custom(sampler)
    }
}

impl From<SamplerPreset> for SamplerSource {
    fn from(preset: SamplerPreset) -> Self {
        Self::Preset(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::smooth(Some("smooth"), Filter::Smooth)]
    #[case::sharp(Some("sharp"), Filter::Sharp)]
    #[case::unknown(Some("bicubic"), Filter::Smooth)]
    #[case::empty(Some(""), Filter::Smooth)]
    #[case::absent(None, Filter::Smooth)]
    fn test_filter_from_name(#[case] name: Option<&str>, #[case] expected: Filter) {
        assert_eq!(Filter::from_name(name), expected);
    }

    #[rstest]
    #[case::clamp(Some("clamp"), Wrap::Clamp)]
    #[case::repeat(Some("repeat"), Wrap::Repeat)]
    #[case::unknown(Some("mirror"), Wrap::Clamp)]
    #[case::absent(None, Wrap::Clamp)]
    fn test_wrap_from_name(#[case] name: Option<&str>, #[case] expected: Wrap) {
        assert_eq!(Wrap::from_name(name), expected);
    }

    #[test]
    fn test_filter_translation() {
        assert_eq!(Filter::Smooth.to_native(), FilterMode::Linear);
        assert_eq!(Filter::Sharp.to_native(), FilterMode::Nearest);
    }

    #[test]
    fn test_wrap_translation() {
        assert_eq!(Wrap::Clamp.to_native(), AddressMode::ClampToEdge);
        assert_eq!(Wrap::Repeat.to_native(), AddressMode::Repeat);
    }

    // Exhaustive match: fails to compile if an address mode is added that no
    // wrap mode can produce.
    #[test]
    fn test_every_address_mode_is_reachable() {
        for mode in [AddressMode::ClampToEdge, AddressMode::Repeat] {
            let wrap = match mode {
                AddressMode::ClampToEdge => Wrap::Clamp,
                AddressMode::Repeat => Wrap::Repeat,
            };
            assert_eq!(wrap.to_native(), mode);
        }
    }

    #[test]
    fn test_presets() {
        let point = Sampler::point();
        assert_eq!(point.min_filter, Filter::Sharp);
        assert_eq!(point.wrap_x, Wrap::Clamp);

        let repeating = Sampler::repeating();
        assert_eq!(repeating.mag_filter, Filter::Smooth);
        assert_eq!(repeating.wrap_y, Wrap::Repeat);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(SamplerPreset::from_name("sprite"), Some(SamplerPreset::Sprite));
        assert_eq!(SamplerPreset::from_name("repeat"), Some(SamplerPreset::Repeat));
        assert_eq!(SamplerPreset::from_name("tiled"), None);
    }
}
