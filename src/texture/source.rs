//! Pixel-bearing texture sources.
//!
//! A [`TextureSource`] is anything that can hand the binder an RGBA frame: a
//! decoded image, a video feed, or an off-screen drawing surface. Every
//! source carries a process-unique [`SourceId`] (the renderer's upload cache
//! is keyed on it) and a monotonic version that bumps whenever the pixel
//! contents change, so the cache can tell a stale upload from a fresh one.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{DynamicImage, GenericImageView};
use thiserror::Error;

/// Texture source error type
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Pixel buffer length {len} does not match {width}x{height} RGBA")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

/// Stable identity of a texture source.
///
/// Allocated once at source construction and never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

impl SourceId {
    fn next() -> Self {
        Self(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A rectangle of RGBA8 pixel data ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelFrame {
    /// Create a frame from raw RGBA8 bytes, row-major.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(TextureError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a frame from a slice of RGBA pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<Self, TextureError> {
        Self::new(width, height, bytemuck::cast_slice(pixels).to_vec())
    }

    /// Decode an image file into a frame.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        Self::from_image(image::open(path)?)
    }

    /// Decode in-memory image bytes into a frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        Self::from_image(image::load_from_memory(bytes)?)
    }

    fn from_image(img: DynamicImage) -> Result<Self, TextureError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.to_rgba8().into_raw())
    }

    /// A 1x1 frame of the given color.
    pub fn solid_color(color: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            data: color.to_vec(),
        }
    }

    /// A 1x1 fully opaque white frame.
    pub fn white() -> Self {
        Self::solid_color([255, 255, 255, 255])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Anything that can supply pixel data for upload.
pub trait TextureSource {
    /// Stable identity used as the upload cache key.
    fn id(&self) -> SourceId;

    /// The current frame, or `None` if the source has nothing to show yet
    /// (for example a video that hasn't decoded a frame).
    fn pixels(&self) -> Option<&PixelFrame>;

    /// Monotonic content version; bumps whenever the pixels change.
    fn version(&self) -> u64;
}

/// A still image source. Always ready.
#[derive(Debug)]
pub struct ImageSource {
    id: SourceId,
    version: u64,
    frame: PixelFrame,
}

impl ImageSource {
    /// Wrap an existing frame.
    pub fn new(frame: PixelFrame) -> Self {
        Self {
            id: SourceId::next(),
            version: 0,
            frame,
        }
    }

    /// Load an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        Ok(Self::new(PixelFrame::from_file(path)?))
    }

    /// Decode in-memory image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        Ok(Self::new(PixelFrame::from_bytes(bytes)?))
    }

    /// Replace the pixel contents, invalidating any cached upload.
    pub fn update_pixels(&mut self, frame: PixelFrame) {
        self.frame = frame;
        self.version += 1;
    }
}

impl TextureSource for ImageSource {
    fn id(&self) -> SourceId {
        self.id
    }

    fn pixels(&self) -> Option<&PixelFrame> {
        Some(&self.frame)
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// A video-like source fed frames from outside.
///
/// Not ready until the first frame arrives; before that, texture calls using
/// it are skipped entirely.
#[derive(Debug)]
pub struct VideoSource {
    id: SourceId,
    version: u64,
    frame: Option<PixelFrame>,
}

impl Default for VideoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSource {
    /// Create a source with no decoded frame yet.
    pub fn new() -> Self {
        Self {
            id: SourceId::next(),
            version: 0,
            frame: None,
        }
    }

    /// Install the next decoded frame, invalidating any cached upload.
    pub fn push_frame(&mut self, frame: PixelFrame) {
        self.frame = Some(frame);
        self.version += 1;
    }

    /// Whether a frame has been decoded.
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }
}

impl TextureSource for VideoSource {
    fn id(&self) -> SourceId {
        self.id
    }

    fn pixels(&self) -> Option<&PixelFrame> {
        self.frame.as_ref()
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// An off-screen drawing surface usable as a texture.
#[derive(Debug)]
pub struct OffscreenSurface {
    id: SourceId,
    version: u64,
    frame: PixelFrame,
}

impl OffscreenSurface {
    /// Create a surface initialized to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0; width as usize * height as usize * 4];
        Self {
            id: SourceId::next(),
            version: 0,
            frame: PixelFrame {
                width,
                height,
                data,
            },
        }
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: [u8; 4]) {
        for pixel in self.frame.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
        self.version += 1;
    }

    /// Write a single pixel. Out-of-bounds coordinates are ignored.
    pub fn write_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.frame.width || y >= self.frame.height {
            return;
        }
        let offset = (y as usize * self.frame.width as usize + x as usize) * 4;
        self.frame.data[offset..offset + 4].copy_from_slice(&color);
        self.version += 1;
    }
}

impl TextureSource for OffscreenSurface {
    fn id(&self) -> SourceId {
        self.id
    }

    fn pixels(&self) -> Option<&PixelFrame> {
        Some(&self.frame)
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_length_validated() {
        assert!(PixelFrame::new(2, 2, vec![0; 16]).is_ok());
        let err = PixelFrame::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, TextureError::InvalidDimensions { len: 15, .. }));
    }

    #[test]
    fn test_from_pixels() {
        let frame = PixelFrame::from_pixels(2, 1, &[[1, 2, 3, 4], [5, 6, 7, 8]]).unwrap();
        assert_eq!(frame.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_white_frame() {
        let frame = PixelFrame::white();
        assert_eq!((frame.width(), frame.height()), (1, 1));
        assert_eq!(frame.data(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_source_ids_unique() {
        let a = ImageSource::new(PixelFrame::white());
        let b = ImageSource::new(PixelFrame::white());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_video_starts_without_frame() {
        let mut video = VideoSource::new();
        assert!(video.pixels().is_none());
        assert_eq!(video.version(), 0);

        video.push_frame(PixelFrame::white());
        assert!(video.has_frame());
        assert_eq!(video.version(), 1);
    }

    #[test]
    fn test_update_pixels_bumps_version() {
        let mut img = ImageSource::new(PixelFrame::white());
        assert_eq!(img.version(), 0);
        img.update_pixels(PixelFrame::solid_color([0, 0, 0, 255]));
        assert_eq!(img.version(), 1);
    }

    #[test]
    fn test_offscreen_surface_writes() {
        let mut surface = OffscreenSurface::new(2, 2);
        surface.write_pixel(1, 1, [9, 9, 9, 9]);
        let frame = surface.pixels().unwrap();
        assert_eq!(&frame.data()[12..16], &[9, 9, 9, 9]);
        assert_eq!(surface.version(), 1);

        // Out of bounds is a no-op
        surface.write_pixel(5, 0, [1, 1, 1, 1]);
        assert_eq!(surface.version(), 1);
    }
}
