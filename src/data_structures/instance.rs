//! Per-draw transform data for GPU rendering.
//!
//! Every draw call of the quad gets its own slot in an instance buffer holding
//! the combined model-view-projection matrix and the shape the fragment stage
//! should produce for it.

use std::mem;

use cgmath::{Matrix4, Rad, Vector3};

use crate::data_structures::{entity::Entity, mesh::Vertex};

/// Which signed-distance shape the fragment stage draws on a quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeMode {
    Circle,
    Box,
    Player,
}

impl ShapeMode {
    /// Value handed to the shader.
    pub fn as_uniform(self) -> f32 {
        match self {
            ShapeMode::Circle => 1.0,
            ShapeMode::Box => 2.0,
            ShapeMode::Player => 3.0,
        }
    }
}

/// A model transform paired with the shape to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub model: Matrix4<f32>,
    pub shape: ShapeMode,
}

impl Instance {
    /// Transform of the grid cell at column `x`, row `y`.
    ///
    /// Cells are laid out from `origin` towards negative x and y, one unit
    /// apart. Unless `shrink` is `None` the quad is scaled down in x and y so
    /// neighbours show a gap.
    pub fn grid_cell(x: usize, y: usize, origin: f32, shrink: Option<f32>, shape: ShapeMode) -> Self {
        let translation = Matrix4::from_translation(Vector3::new(
            origin - x as f32,
            origin - y as f32,
            0.0,
        ));
        let model = match shrink {
            Some(factor) => translation * Matrix4::from_nonuniform_scale(factor, factor, 1.0),
            None => translation,
        };
        Self { model, shape }
    }

    /// Transform of an entity: translate, scale, then spin around z and y.
    pub fn entity(entity: &Entity, shape: ShapeMode) -> Self {
        let model = Matrix4::from_translation(entity.position)
            * Matrix4::from_nonuniform_scale(entity.scale.x, entity.scale.y, 1.0)
            * Matrix4::from_angle_z(Rad(entity.rotation))
            * Matrix4::from_angle_y(Rad(entity.rotation));
        Self { model, shape }
    }

    pub fn to_raw(&self, projection: &Matrix4<f32>) -> InstanceRaw {
        InstanceRaw {
            mvp: (*projection * self.model).into(),
            shape: self.shape.as_uniform(),
        }
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub mvp: [[f32; 4]; 4],
    pub shape: f32,
}

/**
 * Stride layout: the mvp matrix as four vec4 columns (locations 3 to 6) and
 * the shape mode as a single float (location 7).
 */
impl Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // Advance once per instance, not per vertex
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}
