//! Graphics context abstraction layer.
//!
//! This module provides a trait-based abstraction over the GPU state that the
//! material layer mutates: the active texture, the active shader program, its
//! uniforms, and the blend/depth-write pipeline flags.
//!
//! # Available contexts
//!
//! - [`dummy::DummyContext`]: call-recording no-op context for testing and
//!   development
//!
//! Real backends live outside this crate; they implement [`GraphicsContext`]
//! against their native API.

pub mod dummy;
pub mod traits;
pub mod types;

pub use dummy::{DummyContext, GpuCall};
pub use traits::{
    ContextError, ContextResult, GraphicsContext, ProgramHandle, TextureHandle, UniformValue,
};
pub use types::{AddressMode, BlendComponent, BlendFactor, BlendOperation, BlendState, FilterMode};
