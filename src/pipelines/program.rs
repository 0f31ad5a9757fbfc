//! Linking compiled shader stages into a render pipeline, and relinking them
//! when the files on disk change.

use std::fmt;

use instant::Instant;

use crate::{
    data_structures::{
        instance::InstanceRaw,
        mesh::{QuadVertex, Vertex},
    },
    resources::shader::{CompiledStage, ProgramSource, ShaderError},
};

/// Identifies one linked program. Every link hands out a new id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramId(pub u32);

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "program#{}", self.0)
    }
}

/// Monotonic source of [`ProgramId`]s.
#[derive(Debug, Default)]
pub struct ProgramIds {
    last: u32,
}

impl ProgramIds {
    pub fn next_id(&mut self) -> ProgramId {
        self.last += 1;
        ProgramId(self.last)
    }
}

/// A linked vertex + fragment pair, ready to bind.
///
/// Dropping it releases the pipeline.
#[derive(Debug)]
pub struct ShaderProgram {
    pub id: ProgramId,
    pub pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Create both shader modules and the render pipeline.
    ///
    /// Everything runs inside a validation error scope, so a pair of stages
    /// the device refuses comes back as [`ShaderError::Link`] rather than
    /// reaching the uncaptured error handler.
    pub async fn link(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        color_format: wgpu::TextureFormat,
        vertex: &CompiledStage,
        fragment: &CompiledStage,
        id: ProgramId,
    ) -> Result<Self, ShaderError> {
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let vertex_module = device.create_shader_module(vertex.descriptor());
        let fragment_module = device.create_shader_module(fragment.descriptor());

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            cache: None,
            label: Some("Sandbox Render Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(vertex.entry_point()),
                buffers: &[QuadVertex::desc(), InstanceRaw::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(fragment.entry_point()),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // the player spins around y, so both faces get seen
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
        });

        if let Some(error) = scope.pop().await {
            return Err(ShaderError::Link {
                message: error.to_string(),
            });
        }
        Ok(Self { id, pipeline })
    }
}

/// Everything needed to (re)build the sandbox program from its files.
#[derive(Debug)]
pub struct ProgramLinker {
    pub source: ProgramSource,
    layout: wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    ids: ProgramIds,
}

impl ProgramLinker {
    pub fn new(
        device: &wgpu::Device,
        source: ProgramSource,
        color_format: wgpu::TextureFormat,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> Self {
        let bind_group_layouts: Vec<_> = bind_group_layouts.iter().copied().map(Some).collect();
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sandbox Pipeline Layout"),
            bind_group_layouts: &bind_group_layouts,
            ..Default::default()
        });
        Self {
            source,
            layout,
            color_format,
            ids: ProgramIds::default(),
        }
    }

    /// Read, compile and link both stages.
    pub async fn load(&mut self, device: &wgpu::Device) -> Result<ShaderProgram, ShaderError> {
        let (vertex, fragment) = self.source.load().await?;
        let id = self.ids.next_id();
        ShaderProgram::link(
            device,
            &self.layout,
            self.color_format,
            &vertex,
            &fragment,
            id,
        )
        .await
    }

    /// Rebuild the program from disk and swap it into `current`.
    ///
    /// `current` is only replaced once both stages compiled and linked; on
    /// error it keeps the program it had.
    pub async fn reload(
        &mut self,
        device: &wgpu::Device,
        current: &mut ShaderProgram,
    ) -> Result<ProgramId, ShaderError> {
        let begin = Instant::now();
        log::info!("[SHADER] Reloading {} ...", current.id);
        let program = self.load(device).await?;
        let id = program.id;
        // the old pipeline is dropped here
        *current = program;
        log::info!(
            "[SHADER] {} ready after {:.2} ms",
            id,
            begin.elapsed().as_secs_f64() * 1000.0
        );
        Ok(id)
    }
}
