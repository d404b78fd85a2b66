//! Texture binding routines.
//!
//! [`upload`] pushes a pixel frame into a texture and configures its sampler
//! parameters; [`apply_sampler`] reconfigures the parameters of an already
//! uploaded texture. Both leave the 2D texture target unbound afterwards so
//! unrelated calls are not accidentally affected. Callers are responsible
//! for only passing ready pixel data; a not-ready source must be skipped
//! before reaching this module.

use crate::backend::traits::{GraphicsContext, TextureHandle};
use crate::sampler::Sampler;
use crate::texture::source::PixelFrame;

/// Upload `frame` into `handle` and apply `sampler`'s settings.
///
/// Pixel rows are flipped vertically on upload: image sources have their
/// origin at the top-left, texture space at the bottom-left.
pub(crate) fn upload<C: GraphicsContext>(
    ctx: &mut C,
    handle: TextureHandle,
    frame: &PixelFrame,
    sampler: &Sampler,
) {
    log::trace!(
        "uploading {}x{} frame to {:?}",
        frame.width(),
        frame.height(),
        handle
    );
    ctx.bind_texture(handle);
    ctx.set_flip_vertically(true);
    ctx.upload_rgba(frame.width(), frame.height(), frame.data());
    set_sampler_params(ctx, sampler);
    ctx.unbind_texture();
}

/// Apply `sampler`'s settings to an already uploaded texture.
pub(crate) fn apply_sampler<C: GraphicsContext>(
    ctx: &mut C,
    handle: TextureHandle,
    sampler: &Sampler,
) {
    ctx.bind_texture(handle);
    set_sampler_params(ctx, sampler);
    ctx.unbind_texture();
}

fn set_sampler_params<C: GraphicsContext>(ctx: &mut C, sampler: &Sampler) {
    ctx.set_mag_filter(sampler.mag_filter.to_native());
    ctx.set_min_filter(sampler.min_filter.to_native());
    ctx.set_wrap_u(sampler.wrap_x.to_native());
    ctx.set_wrap_v(sampler.wrap_y.to_native());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::{DummyContext, GpuCall};
    use crate::backend::types::{AddressMode, FilterMode};

    #[test]
    fn test_upload_sequence() {
        let mut ctx = DummyContext::new();
        let handle = ctx.create_texture(None).unwrap();
        ctx.clear_calls();

        upload(&mut ctx, handle, &PixelFrame::white(), &Sampler::point());

        assert_eq!(
            ctx.calls(),
            &[
                GpuCall::BindTexture(handle),
                GpuCall::SetFlipVertically(true),
                GpuCall::UploadRgba {
                    width: 1,
                    height: 1,
                    data: vec![255, 255, 255, 255],
                },
                GpuCall::SetMagFilter(FilterMode::Nearest),
                GpuCall::SetMinFilter(FilterMode::Nearest),
                GpuCall::SetWrapU(AddressMode::ClampToEdge),
                GpuCall::SetWrapV(AddressMode::ClampToEdge),
                GpuCall::UnbindTexture,
            ]
        );
    }

    #[test]
    fn test_apply_sampler_does_not_upload() {
        let mut ctx = DummyContext::new();
        let handle = ctx.create_texture(None).unwrap();
        ctx.clear_calls();

        apply_sampler(&mut ctx, handle, &Sampler::repeating());

        assert_eq!(ctx.uploads(), 0);
        assert!(ctx
            .calls()
            .contains(&GpuCall::SetWrapU(AddressMode::Repeat)));
        assert_eq!(ctx.calls().last(), Some(&GpuCall::UnbindTexture));
    }
}
