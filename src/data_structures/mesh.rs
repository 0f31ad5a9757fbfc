//! The static quad mesh and its GPU buffers.
//!
//! The sandbox only ever draws one piece of geometry: a unit quad centred on
//! the origin. It is uploaded once and every draw call reuses it.

use std::mem;

use wgpu::util::DeviceExt;

/// Something that can describe its own vertex buffer layout to a pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

pub const QUAD_VERTEX_COUNT: usize = 4;
pub const QUAD_INDEX_COUNT: usize = 6;

#[rustfmt::skip]
pub const QUAD_VERTICES: [QuadVertex; QUAD_VERTEX_COUNT] = [
    QuadVertex { position: [ 0.5,  0.5, 0.0], color: [1.0, 1.0, 0.0], uv: [0.0, 0.0] },
    QuadVertex { position: [ 0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0], uv: [0.0, 1.0] },
    QuadVertex { position: [-0.5, -0.5, 0.0], color: [1.0, 0.0, 1.0], uv: [1.0, 1.0] },
    QuadVertex { position: [-0.5,  0.5, 0.0], color: [0.0, 0.0, 1.0], uv: [1.0, 0.0] },
];

/// Two triangles: `0 1 2` and `0 2 3`.
pub const QUAD_INDICES: [u32; QUAD_INDEX_COUNT] = [0, 1, 2, 0, 2, 3];

/**
 * Layout of a vertex on the GPU:
 *
 * location 0: position (vec3)
 * location 1: color (vec3)
 * location 2: uv (vec2)
 */
impl Vertex for QuadVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// The quad uploaded into vertex and index buffers.
#[derive(Debug)]
pub struct QuadMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl QuadMesh {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            num_elements: QUAD_INDICES.len() as u32,
        }
    }
}
