//! Core graphics context abstraction
//!
//! The [`GraphicsContext`] trait is the seam between the material state layer
//! and whatever actually owns the GPU: a real backend binds these calls to a
//! native API, while [`DummyContext`](super::dummy::DummyContext) records them
//! for tests and development without GPU hardware.

use crate::backend::types::*;
use thiserror::Error;

/// Context error type
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Failed to initialize context: {0}")]
    InitializationFailed(String),
    #[error("Failed to create texture: {0}")]
    TextureCreationFailed(String),
    #[error("Failed to compile shader: {0}")]
    ShaderCompilationFailed(String),
    #[error("Failed to link program: {0}")]
    ProgramLinkFailed(String),
    #[error("Out of memory")]
    OutOfMemory,
    #[error("Device lost")]
    DeviceLost,
}

pub type ContextResult<T> = Result<T, ContextError>;

/// Handle to a GPU texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u64);

/// Handle to a compiled and linked shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub(crate) u64);

/// Value assignable to a named shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec4(glam::Vec4),
    Texture(TextureHandle),
}

/// Interface to the GPU state owned by a renderer.
///
/// All operations are immediate and synchronous; callers rely on strict call
/// ordering within a draw cycle, so the trait takes `&mut self` throughout.
pub trait GraphicsContext {
    // Texture resources

    /// Create a texture object with no storage attached yet
    fn create_texture(&mut self, label: Option<&str>) -> ContextResult<TextureHandle>;

    /// Make `texture` the active texture of the 2D target
    fn bind_texture(&mut self, texture: TextureHandle);

    /// Deactivate the 2D texture target
    fn unbind_texture(&mut self);

    /// Enable or disable vertical flip of pixel rows on upload
    fn set_flip_vertically(&mut self, flip: bool);

    /// Upload RGBA8 pixel data to the bound texture
    fn upload_rgba(&mut self, width: u32, height: u32, data: &[u8]);

    /// Set the minification filter of the bound texture
    fn set_min_filter(&mut self, filter: FilterMode);

    /// Set the magnification filter of the bound texture
    fn set_mag_filter(&mut self, filter: FilterMode);

    /// Set the horizontal address mode of the bound texture
    fn set_wrap_u(&mut self, mode: AddressMode);

    /// Set the vertical address mode of the bound texture
    fn set_wrap_v(&mut self, mode: AddressMode);

    // Shader programs

    /// Compile and link the named vertex/fragment shader pair
    fn create_program(&mut self, vertex: &str, fragment: &str) -> ContextResult<ProgramHandle>;

    /// Make `program` the active shader program
    fn use_program(&mut self, program: ProgramHandle);

    /// Set a named uniform on the active program
    fn set_uniform(&mut self, name: &str, value: UniformValue);

    // Pipeline flags

    /// Set the blend state; `None` disables blending
    fn set_blend(&mut self, blend: Option<BlendState>);

    /// Enable or disable depth buffer writes
    fn set_depth_write(&mut self, enabled: bool);
}
