//! Dummy graphics context for testing and development.
//!
//! This context doesn't perform actual GPU operations but records every call
//! in order, providing a valid implementation for exercising the material
//! state layer without GPU hardware.

use std::collections::HashMap;

use crate::backend::traits::{
    ContextResult, GraphicsContext, ProgramHandle, TextureHandle, UniformValue,
};
use crate::backend::types::{AddressMode, BlendState, FilterMode};

/// A single recorded context call.
#[derive(Debug, Clone, PartialEq)]
pub enum GpuCall {
    CreateTexture {
        handle: TextureHandle,
        label: Option<String>,
    },
    BindTexture(TextureHandle),
    UnbindTexture,
    SetFlipVertically(bool),
    UploadRgba {
        width: u32,
        height: u32,
        data: Vec<u8>,
    },
    SetMinFilter(FilterMode),
    SetMagFilter(FilterMode),
    SetWrapU(AddressMode),
    SetWrapV(AddressMode),
    CreateProgram {
        handle: ProgramHandle,
        vertex: String,
        fragment: String,
    },
    UseProgram(ProgramHandle),
    SetUniform {
        name: String,
        value: UniformValue,
    },
    SetBlend(Option<BlendState>),
    SetDepthWrite(bool),
}

/// Dummy graphics context.
///
/// Hands out sequential handles and keeps the last pixel data uploaded to
/// each texture so tests can inspect it.
#[derive(Debug, Default)]
pub struct DummyContext {
    calls: Vec<GpuCall>,
    next_handle: u64,
    bound: Option<TextureHandle>,
    texture_data: HashMap<TextureHandle, Vec<u8>>,
}

impl DummyContext {
    /// Create a new dummy context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the context name.
    pub fn name(&self) -> &'static str {
        "Dummy"
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> &[GpuCall] {
        &self.calls
    }

    /// Discard the recorded call log (uploaded texture data is kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// The last pixel data uploaded to `texture`, if any.
    pub fn uploaded_data(&self, texture: TextureHandle) -> Option<&[u8]> {
        self.texture_data.get(&texture).map(Vec::as_slice)
    }

    /// Number of texture objects created so far.
    pub fn textures_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GpuCall::CreateTexture { .. }))
            .count()
    }

    /// Number of pixel uploads performed so far.
    pub fn uploads(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GpuCall::UploadRgba { .. }))
            .count()
    }

    fn alloc_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl GraphicsContext for DummyContext {
    fn create_texture(&mut self, label: Option<&str>) -> ContextResult<TextureHandle> {
        let handle = TextureHandle(self.alloc_handle());
        log::trace!("DummyContext: creating texture {:?} ({:?})", handle, label);
        self.calls.push(GpuCall::CreateTexture {
            handle,
            label: label.map(str::to_owned),
        });
        Ok(handle)
    }

    fn bind_texture(&mut self, texture: TextureHandle) {
        log::trace!("DummyContext: binding texture {:?}", texture);
        self.bound = Some(texture);
        self.calls.push(GpuCall::BindTexture(texture));
    }

    fn unbind_texture(&mut self) {
        log::trace!("DummyContext: unbinding texture");
        self.bound = None;
        self.calls.push(GpuCall::UnbindTexture);
    }

    fn set_flip_vertically(&mut self, flip: bool) {
        self.calls.push(GpuCall::SetFlipVertically(flip));
    }

    fn upload_rgba(&mut self, width: u32, height: u32, data: &[u8]) {
        log::trace!(
            "DummyContext: upload_rgba {}x{} len={}",
            width,
            height,
            data.len()
        );
        if let Some(bound) = self.bound {
            self.texture_data.insert(bound, data.to_vec());
        }
        self.calls.push(GpuCall::UploadRgba {
            width,
            height,
            data: data.to_vec(),
        });
    }

    fn set_min_filter(&mut self, filter: FilterMode) {
        self.calls.push(GpuCall::SetMinFilter(filter));
    }

    fn set_mag_filter(&mut self, filter: FilterMode) {
        self.calls.push(GpuCall::SetMagFilter(filter));
    }

    fn set_wrap_u(&mut self, mode: AddressMode) {
        self.calls.push(GpuCall::SetWrapU(mode));
    }

    fn set_wrap_v(&mut self, mode: AddressMode) {
        self.calls.push(GpuCall::SetWrapV(mode));
    }

    fn create_program(&mut self, vertex: &str, fragment: &str) -> ContextResult<ProgramHandle> {
        let handle = ProgramHandle(self.alloc_handle());
        log::trace!(
            "DummyContext: creating program {:?} ({} / {})",
            handle,
            vertex,
            fragment
        );
        self.calls.push(GpuCall::CreateProgram {
            handle,
            vertex: vertex.to_owned(),
            fragment: fragment.to_owned(),
        });
        Ok(handle)
    }

    fn use_program(&mut self, program: ProgramHandle) {
        log::trace!("DummyContext: using program {:?}", program);
        self.calls.push(GpuCall::UseProgram(program));
    }

    fn set_uniform(&mut self, name: &str, value: UniformValue) {
        log::trace!("DummyContext: set_uniform {} = {:?}", name, value);
        self.calls.push(GpuCall::SetUniform {
            name: name.to_owned(),
            value,
        });
    }

    fn set_blend(&mut self, blend: Option<BlendState>) {
        self.calls.push(GpuCall::SetBlend(blend));
    }

    fn set_depth_write(&mut self, enabled: bool) {
        self.calls.push(GpuCall::SetDepthWrite(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_sequential_and_distinct() {
        let mut ctx = DummyContext::new();
        let a = ctx.create_texture(None).unwrap();
        let b = ctx.create_texture(Some("second")).unwrap();
        assert_ne!(a, b);
        assert_eq!(ctx.textures_created(), 2);
    }

    #[test]
    fn test_upload_recorded_against_bound_texture() {
        let mut ctx = DummyContext::new();
        let tex = ctx.create_texture(None).unwrap();
        ctx.bind_texture(tex);
        ctx.upload_rgba(1, 1, &[1, 2, 3, 4]);
        ctx.unbind_texture();
        assert_eq!(ctx.uploaded_data(tex), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(ctx.uploads(), 1);
    }
}
