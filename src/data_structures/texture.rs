//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around a WGPU texture with its
//! view and sampler, and helpers to create one from encoded image bytes or
//! from a solid colour.

use anyhow::*;
use image::{GenericImageView, ImageFormat, load_from_memory_with_format};

/// A GPU texture with a view and sampler.
///
/// Textures are sampled with nearest filtering and clamped at the edges, which
/// keeps the pixel look of the source images on the scaled quads.
#[derive(Clone, Debug)]
pub struct Texture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// The neutral colour of a normal map (no deformation).
    pub const NEUTRAL_NORMAL: [u8; 4] = [127, 127, 255, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];

    /// Create a `width` x `height` texture filled with one colour.
    ///
    /// Used in place of image files that are not available.
    pub fn create_solid(
        colour: [u8; 4],
        width: u32,
        height: u32,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        is_normal_map: bool,
    ) -> Texture {
        let data: Vec<u8> = colour
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba(device, queue, &data, (width, height), Some(label), is_normal_map)
    }

    /// Load a texture from raw byte data (image file contents).
    ///
    /// # Arguments
    ///
    /// * `bytes` represent raw image file data (PNG, JPEG, etc.)
    /// * `label` is used as a debug name for the GPU resource
    /// * `format`  is an optional file format hint (e.g., "png"). If None, auto-detect.
    /// * `is_normal_map` toggles between sRGB (false) and linear (true) color space
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        format: Option<&str>,
        is_normal_map: bool,
    ) -> Result<Self> {
        let img = match format {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => {
                let fmt = ImageFormat::from_extension(fmt)
                    .with_context(|| format!("unknown image format {fmt:?} for {label}"))?;
                load_from_memory_with_format(bytes, fmt)?
            }
        };
        Ok(Self::from_image(device, queue, &img, Some(label), is_normal_map))
    }

    /// Upload a decoded image, flipped so that row 0 is the bottom of the image.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: Option<&str>,
        is_normal_map: bool,
    ) -> Self {
        let dimensions = img.dimensions();
        let rgba = img.flipv().to_rgba8();
        Self::from_rgba(device, queue, &rgba, dimensions, label, is_normal_map)
    }

    fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: &[u8],
        dimensions: (u32, u32),
        label: Option<&str>,
        is_normal_map: bool,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let format = if is_normal_map {
            wgpu::TextureFormat::Rgba8Unorm
        } else {
            wgpu::TextureFormat::Rgba8UnormSrgb
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_nearest_sampler(device);

        Self {
            texture,
            view,
            sampler,
        }
    }
}

pub fn create_nearest_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
