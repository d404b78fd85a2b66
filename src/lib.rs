//! # Immediate Materials
//!
//! Immediate-mode material and texture state layer over pluggable graphics
//! contexts.
//!
//! This crate provides:
//! - [`Renderer`] - the single owner of draw-frame material state: shader
//!   program cache, sampler presets, texture upload cache, placeholder texture
//! - [`GraphicsContext`] - trait a GPU backend implements to receive the
//!   resulting state changes ([`DummyContext`] is the shipped, call-recording
//!   implementation for tests and development)
//! - [`Sampler`], [`Filter`], [`Wrap`] - validated filter/wrap settings with
//!   total, fallback name parsing
//! - [`texture`] module - image, video, and off-screen pixel sources with
//!   version-based upload invalidation
//!
//! ## Example
//!
//! ```
//! use immediate_materials::{DummyContext, ImageSource, PixelFrame, Renderer, SamplerPreset};
//!
//! let mut renderer = Renderer::new(DummyContext::new());
//! let img = ImageSource::new(PixelFrame::white());
//!
//! renderer.texture(&img, Some(SamplerPreset::Repeat.into())).unwrap();
//! renderer.specular_material([1.0, 0.0, 0.0, 0.5]).unwrap();
//! ```

pub mod backend;
pub mod color;
pub mod renderer;
pub mod sampler;
pub mod texture;

// Re-export main types for convenience
pub use backend::{
    AddressMode, BlendState, ContextError, ContextResult, DummyContext, FilterMode,
    GraphicsContext, GpuCall, ProgramHandle, TextureHandle, UniformValue,
};
pub use color::Color;
pub use renderer::Renderer;
pub use sampler::{Filter, Sampler, SamplerPreset, SamplerSource, Wrap};
pub use texture::{
    ImageSource, OffscreenSurface, PixelFrame, SourceId, TextureError, TextureSource, VideoSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the material layer.
///
/// Optional; only emits a startup log line.
pub fn init() {
    log::info!("immediate-materials v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_renderer_over_dummy_context() {
        let mut renderer = Renderer::new(DummyContext::new());
        renderer.normal_material().unwrap();
        assert!(!renderer.context().calls().is_empty());
    }
}
