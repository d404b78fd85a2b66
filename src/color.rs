//! Resolved material colors.
//!
//! Color *parsing* (gray/RGB/HSB modes, CSS strings) belongs to an external
//! color utility; this layer only consumes the resolved component array.
//! [`Color`] is that boundary: four components in the 0.0 to 1.0 range.

use glam::Vec4;

/// An RGBA color with components clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Vec4);

impl Color {
    /// Create a color from RGBA components.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a).clamp(Vec4::ZERO, Vec4::ONE))
    }

    /// Create an opaque color from RGB components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque gray.
    pub fn gray(value: f32) -> Self {
        Self::new(value, value, value, 1.0)
    }

    /// Create a gray with explicit alpha.
    pub fn gray_alpha(value: f32, alpha: f32) -> Self {
        Self::new(value, value, value, alpha)
    }

    pub fn red(&self) -> f32 {
        self.0.x
    }

    pub fn green(&self) -> f32 {
        self.0.y
    }

    pub fn blue(&self) -> f32 {
        self.0.z
    }

    pub fn alpha(&self) -> f32 {
        self.0.w
    }

    /// The component array as a vector, ready for a uniform.
    pub fn to_vec4(self) -> Vec4 {
        self.0
    }
}

impl From<f32> for Color {
    fn from(value: f32) -> Self {
        Self::gray(value)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<[f32; 3]> for Color {
    fn from(c: [f32; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_clamped() {
        let c = Color::new(1.5, -0.25, 0.5, 2.0);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.5);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn test_gray_alpha() {
        let c = Color::gray_alpha(0.5, 0.25);
        assert_eq!(c.to_vec4(), Vec4::new(0.5, 0.5, 0.5, 0.25));
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Color::from([0.1, 0.2, 0.3]).alpha(), 1.0);
        assert_eq!(Color::from([0.1, 0.2, 0.3, 0.4]).alpha(), 0.4);
    }

    #[test]
    fn test_from_gray_value() {
        let c = Color::from(0.75);
        assert_eq!(c.red(), 0.75);
        assert_eq!(c.blue(), 0.75);
        assert_eq!(c.alpha(), 1.0);
    }
}
