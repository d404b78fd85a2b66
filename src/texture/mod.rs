//! Texture sources, upload caching, and binding.

pub(crate) mod binder;
pub mod cache;
pub mod source;

pub use cache::{TextureCache, TextureRecord};
pub use source::{
    ImageSource, OffscreenSurface, PixelFrame, SourceId, TextureError, TextureSource, VideoSource,
};
