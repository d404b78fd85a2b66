//! The render-state owner and its material setters.
//!
//! [`Renderer`] wraps a [`GraphicsContext`] and owns every piece of shared
//! draw state the material calls touch: the shader program cache, the sampler
//! presets, the memoized empty texture, and the texture upload cache. Draw
//! calls go through `&mut self`, so exclusive ownership of the context during
//! a draw cycle is enforced by the borrow checker instead of convention.
//!
//! Each material setter fully re-derives its uniform and pipeline state from
//! its arguments; nothing is carried over between calls.

use std::collections::HashMap;

use crate::backend::traits::{
    ContextResult, GraphicsContext, ProgramHandle, TextureHandle, UniformValue,
};
use crate::backend::types::BlendState;
use crate::color::Color;
use crate::sampler::{Sampler, SamplerPreset, SamplerSource};
use crate::texture::binder;
use crate::texture::cache::TextureCache;
use crate::texture::source::{PixelFrame, SourceId, TextureSource};

/// Normal-visualization shader pair.
pub const NORMAL_SHADER: (&str, &str) = ("normal.vert", "normal.frag");
/// Lit material shader pair.
pub const LIT_SHADER: (&str, &str) = ("lit.vert", "lit.frag");
/// Lit, textured material shader pair.
pub const LIT_TEXTURE_SHADER: (&str, &str) = ("lit.vert", "lit_texture.frag");

/// Uniform carrying the material base color.
pub const UNIFORM_MATERIAL_COLOR: &str = "u_material_color";
/// Uniform selecting specular versus ambient shading.
pub const UNIFORM_SPECULAR: &str = "u_specular";
/// Uniform enabling texture sampling.
pub const UNIFORM_USE_TEXTURE: &str = "u_use_texture";
/// Uniform carrying the active texture.
pub const UNIFORM_SAMPLER: &str = "u_sampler";

/// Immediate-mode material state layer over a graphics context.
///
/// # Example
///
/// ```
/// use immediate_materials::{DummyContext, Renderer};
///
/// let mut renderer = Renderer::new(DummyContext::new());
/// renderer.ambient_material([1.0, 0.5, 0.25]).unwrap();
/// ```
pub struct Renderer<C: GraphicsContext> {
    ctx: C,
    programs: HashMap<(String, String), ProgramHandle>,
    textures: TextureCache,
    empty_texture: Option<TextureHandle>,
    default_sampler: Sampler,
    point_sampler: Sampler,
    repeat_sampler: Sampler,
}

impl<C: GraphicsContext> Renderer<C> {
    /// Wrap a graphics context.
    pub fn new(ctx: C) -> Self {
        Self {
            ctx,
            programs: HashMap::new(),
            textures: TextureCache::new(),
            empty_texture: None,
            default_sampler: Sampler::default(),
            point_sampler: Sampler::point(),
            repeat_sampler: Sampler::repeating(),
        }
    }

    /// The wrapped context.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// The wrapped context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// The sampler used when a texture call names no other.
    pub fn default_sampler(&self) -> Sampler {
        self.default_sampler
    }

    /// The nearest-neighbor preset (`sprite`).
    pub fn point_sampler(&self) -> Sampler {
        self.point_sampler
    }

    /// The tiling preset (`repeat`).
    pub fn repeat_sampler(&self) -> Sampler {
        self.repeat_sampler
    }

    /// Get or create the program for a vertex/fragment shader pair.
    pub fn program(&mut self, vertex: &str, fragment: &str) -> ContextResult<ProgramHandle> {
        let key = (vertex.to_owned(), fragment.to_owned());
        if let Some(&program) = self.programs.get(&key) {
            return Ok(program);
        }
        let program = self.ctx.create_program(vertex, fragment)?;
        log::debug!("compiled program {} / {}", vertex, fragment);
        self.programs.insert(key, program);
        Ok(program)
    }

    fn use_shader(&mut self, shader: (&str, &str)) -> ContextResult<ProgramHandle> {
        let program = self.program(shader.0, shader.1)?;
        self.ctx.use_program(program);
        Ok(program)
    }

    /// Shade geometry by visualizing its surface normals.
    ///
    /// Selects the normal-debug program; sets no uniforms and no texturing.
    pub fn normal_material(&mut self) -> ContextResult<()> {
        self.use_shader(NORMAL_SHADER)?;
        Ok(())
    }

    /// Shade geometry with a matte material of the given color.
    pub fn ambient_material(&mut self, color: impl Into<Color>) -> ContextResult<()> {
        self.fill_material(color.into(), false)
    }

    /// Shade geometry with a shiny material that shows specular highlights.
    pub fn specular_material(&mut self, color: impl Into<Color>) -> ContextResult<()> {
        self.fill_material(color.into(), true)
    }

    fn fill_material(&mut self, color: Color, specular: bool) -> ContextResult<()> {
        self.use_shader(LIT_SHADER)?;

        // Translucent geometry must not occlude translucent geometry drawn
        // after it, so depth writes are disabled while blending.
        if color.alpha() < 1.0 {
            self.ctx.set_blend(Some(BlendState::alpha_blending()));
            self.ctx.set_depth_write(false);
        } else {
            self.ctx.set_blend(None);
            self.ctx.set_depth_write(true);
        }

        self.ctx
            .set_uniform(UNIFORM_MATERIAL_COLOR, UniformValue::Vec4(color.to_vec4()));
        self.ctx
            .set_uniform(UNIFORM_SPECULAR, UniformValue::Bool(specular));
        self.ctx
            .set_uniform(UNIFORM_USE_TEXTURE, UniformValue::Bool(false));
        Ok(())
    }

    /// Shade geometry with a texture.
    ///
    /// The sampler is resolved from `sampler` (an explicit [`Sampler`] or a
    /// [`SamplerPreset`]) or falls back to the renderer default. A source
    /// with no pixels yet (an undecoded video) is skipped entirely: the call
    /// returns `Ok(())` without touching any context state or creating a
    /// handle.
    ///
    /// The first use of a source uploads its pixels and caches the handle;
    /// later uses rebind the cached handle and only re-apply sampler
    /// parameters, unless the source's content version changed, in which
    /// case the pixels are re-uploaded through the same handle.
    pub fn texture<S: TextureSource>(
        &mut self,
        source: &S,
        sampler: Option<SamplerSource>,
    ) -> ContextResult<()> {
        // Readiness check comes before any context call.
        let Some(frame) = source.pixels() else {
            log::debug!("source {:?} has no pixels yet, skipping", source.id());
            return Ok(());
        };

        self.use_shader(LIT_TEXTURE_SHADER)?;
        self.ctx.set_blend(Some(BlendState::alpha_blending()));

        let sampler = self.resolve_sampler(sampler);
        let handle = self.bind_source(source.id(), source.version(), frame, &sampler)?;

        self.ctx
            .set_uniform(UNIFORM_USE_TEXTURE, UniformValue::Bool(true));
        self.ctx
            .set_uniform(UNIFORM_SAMPLER, UniformValue::Texture(handle));
        Ok(())
    }

    fn resolve_sampler(&self, sampler: Option<SamplerSource>) -> Sampler {
        match sampler {
            Some(SamplerSource::Custom(sampler)) => sampler,
            Some(SamplerSource::Preset(SamplerPreset::Sprite)) => self.point_sampler,
            Some(SamplerSource::Preset(SamplerPreset::Repeat)) => self.repeat_sampler,
            None => self.default_sampler,
        }
    }

    fn bind_source(
        &mut self,
        id: SourceId,
        version: u64,
        frame: &PixelFrame,
        sampler: &Sampler,
    ) -> ContextResult<TextureHandle> {
        match self.textures.lookup(id) {
            None => {
                let handle = self.ctx.create_texture(Some("texture-source"))?;
                binder::upload(&mut self.ctx, handle, frame, sampler);
                self.textures.record_upload(id, handle, version);
                Ok(handle)
            }
            Some(record) if record.uploaded_version != Some(version) => {
                log::debug!("source {:?} content changed, re-uploading", id);
                binder::upload(&mut self.ctx, record.handle, frame, sampler);
                self.textures.record_upload(id, record.handle, version);
                Ok(record.handle)
            }
            Some(record) => {
                binder::apply_sampler(&mut self.ctx, record.handle, sampler);
                Ok(record.handle)
            }
        }
    }

    /// Get the 1x1 opaque white placeholder texture, creating it on first use.
    ///
    /// Shaders that always sample a texture unit render plausibly with this
    /// bound when no explicit texture is set.
    pub fn ensure_empty_texture(&mut self) -> ContextResult<TextureHandle> {
        if let Some(handle) = self.empty_texture {
            return Ok(handle);
        }
        let handle = self.ctx.create_texture(Some("empty"))?;
        let sampler = self.default_sampler;
        binder::upload(&mut self.ctx, handle, &PixelFrame::white(), &sampler);
        self.empty_texture = Some(handle);
        Ok(handle)
    }

    /// Force a source's pixels to be re-uploaded on its next use.
    ///
    /// The cached handle is kept; only the content is considered stale.
    pub fn invalidate_texture(&mut self, id: SourceId) {
        self.textures.invalidate(id);
    }

    /// Forget a source's cached upload entirely.
    ///
    /// Returns the handle the source was uploaded to, if any. The handle is
    /// not destroyed; its lifetime stays with the context owner.
    pub fn forget_texture(&mut self, id: SourceId) -> Option<TextureHandle> {
        self.textures.remove(id)
    }

    /// Number of distinct sources with a cached upload.
    pub fn cached_textures(&self) -> usize {
        self.textures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::DummyContext;

    #[test]
    fn test_program_cache_reuses_handles() {
        let mut renderer = Renderer::new(DummyContext::new());
        let a = renderer.program("lit.vert", "lit.frag").unwrap();
        let b = renderer.program("lit.vert", "lit.frag").unwrap();
        let c = renderer.program("lit.vert", "lit_texture.frag").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_preset_resolution() {
        let renderer = Renderer::new(DummyContext::new());
        assert_eq!(
            renderer.resolve_sampler(Some(SamplerPreset::Sprite.into())),
            Sampler::point()
        );
        assert_eq!(
            renderer.resolve_sampler(Some(SamplerPreset::Repeat.into())),
            Sampler::repeating()
        );
        assert_eq!(renderer.resolve_sampler(None), Sampler::default());
        let custom = Sampler::point().with_wrap_x(crate::sampler::Wrap::Repeat);
        assert_eq!(renderer.resolve_sampler(Some(custom.into())), custom);
    }
}
