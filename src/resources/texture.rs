use std::path::Path;

use crate::data_structures::texture::Texture;

/// Layout of the texture bind group: `tex0` and `tex1`, each with its sampler.
pub fn texture_pair_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("texture_pair_bind_group_layout"),
    })
}

pub async fn load_binary(path: &Path) -> anyhow::Result<Vec<u8>> {
    let data = tokio::fs::read(path).await?;
    Ok(data)
}

/// Load an image file into a texture.
///
/// A file that cannot be read is not fatal: it is reported and replaced by a
/// 1x1 texture of `fallback` so the rest of the scene still renders. Files
/// that exist but do not decode are returned as errors.
pub async fn load_texture(
    path: &Path,
    is_normal_map: bool,
    fallback: [u8; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let label = path.to_string_lossy();
    match load_binary(path).await {
        Ok(data) => Texture::from_bytes(device, queue, &data, &label, None, is_normal_map),
        Err(e) => {
            log::warn!("Texture {label} could not be read ({e}), using a solid colour instead");
            Ok(Texture::create_solid(
                fallback,
                1,
                1,
                device,
                queue,
                &label,
                is_normal_map,
            ))
        }
    }
}

/// The two textures every draw samples from, already bound together.
#[derive(Debug)]
pub struct TexturePair {
    pub diffuse: Texture,
    pub normal: Texture,
    pub bind_group: wgpu::BindGroup,
}

impl TexturePair {
    pub async fn load(
        diffuse_path: &Path,
        normal_path: &Path,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
    ) -> anyhow::Result<Self> {
        let diffuse = load_texture(diffuse_path, false, Texture::WHITE, device, queue).await?;
        let normal = load_texture(normal_path, true, Texture::NEUTRAL_NORMAL, device, queue).await?;

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&diffuse.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&normal.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&normal.sampler),
                },
            ],
            label: Some("texture_pair_bind_group"),
        });

        Ok(Self {
            diffuse,
            normal,
            bind_group,
        })
    }
}
