//! GPU side of a frame.
//!
//! [`Renderer`] owns every GPU resource the sandbox needs (quad buffers,
//! textures, the per-frame uniform, the per-draw instance buffer and the
//! shader program) and turns a draw list from [`crate::scene::Scene`] into one
//! draw call per entry.
//!
//! # Bindings
//!
//! - group 0: `tex0` / `tex1` with their samplers
//! - group 1: [`FrameUniform`](crate::pipelines::frame::FrameUniform)
//! - vertex buffer 0: the quad, vertex buffer 1: one `InstanceRaw` per draw

use std::{iter, mem};

use crate::{
    config::SandboxConfig,
    context::Context,
    data_structures::{instance::InstanceRaw, mesh::QuadMesh},
    pipelines::{
        frame::FrameResources,
        program::{ProgramId, ProgramLinker, ShaderProgram},
    },
    resources::{
        shader::ShaderError,
        texture::{TexturePair, texture_pair_layout},
    },
    scene::DRAWS_PER_FRAME,
};

/// What happened to the frame handed to [`Renderer::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// Presented, but the surface no longer matches the window.
    PresentedSuboptimal,
    /// No surface texture this time (timeout, occluded window, validation).
    Skipped,
    /// The surface is outdated or lost and must be configured again.
    Reconfigure,
}

pub struct Renderer {
    pub mesh: QuadMesh,
    pub textures: TexturePair,
    pub frame: FrameResources,
    pub instance_buffer: wgpu::Buffer,
    pub linker: ProgramLinker,
    pub program: ShaderProgram,
}

impl Renderer {
    pub async fn new(ctx: &mut Context, config: &SandboxConfig) -> anyhow::Result<Self> {
        let device = &ctx.device;

        log::info!("uploading quad mesh");
        let mesh = QuadMesh::new(device);

        let texture_layout = texture_pair_layout(device);
        let textures = TexturePair::load(
            &config.diffuse_texture,
            &config.normal_texture,
            device,
            &ctx.queue,
            &texture_layout,
        )
        .await?;

        let frame = FrameResources::new(device);

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (DRAWS_PER_FRAME * mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut linker = ProgramLinker::new(
            device,
            config.shaders.clone(),
            ctx.config.format,
            &[&texture_layout, &frame.bind_group_layout],
        );
        log::info!(
            "compiling shaders {:?} and {:?}",
            config.shaders.vertex_path,
            config.shaders.fragment_path
        );
        let program = linker.load(device).await?;

        ctx.stats.vertex_count = crate::data_structures::mesh::QUAD_VERTEX_COUNT as u32;
        ctx.stats.index_count = mesh.num_elements;
        ctx.stats.texture_count = 2;
        ctx.stats.shader_count = 1;

        Ok(Self {
            mesh,
            textures,
            frame,
            instance_buffer,
            linker,
            program,
        })
    }

    /// Rebuild the program from the shader files, keeping the current one if
    /// that fails.
    pub async fn reload_shaders(&mut self, device: &wgpu::Device) -> Result<ProgramId, ShaderError> {
        self.linker.reload(device, &mut self.program).await
    }

    /// Draw `instances`, one draw call each, and present the frame.
    pub fn render(
        &mut self,
        ctx: &mut Context,
        instances: &[InstanceRaw],
        time: f32,
    ) -> FrameStatus {
        ctx.stats.begin_frame();
        let instances = if instances.len() > DRAWS_PER_FRAME {
            log::warn!(
                "{} draws requested, the instance buffer holds {}",
                instances.len(),
                DRAWS_PER_FRAME
            );
            &instances[..DRAWS_PER_FRAME]
        } else {
            instances
        };

        self.frame.write(&ctx.queue, time);
        ctx.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));

        let (output, status) = match ctx.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output) => (output, FrameStatus::Presented),
            wgpu::CurrentSurfaceTexture::Suboptimal(output) => {
                (output, FrameStatus::PresentedSuboptimal)
            }
            wgpu::CurrentSurfaceTexture::Outdated | wgpu::CurrentSurfaceTexture::Lost => {
                return FrameStatus::Reconfigure;
            }
            other => {
                log::warn!("No surface texture this frame: {:?}", other);
                return FrameStatus::Skipped;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                ..Default::default()
            });

            render_pass.set_pipeline(&self.program.pipeline);
            render_pass.set_bind_group(0, &self.textures.bind_group, &[]);
            render_pass.set_bind_group(1, &self.frame.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            for slot in 0..instances.len() as u32 {
                render_pass.draw_indexed(0..self.mesh.num_elements, 0, slot..slot + 1);
                ctx.stats.draw_call_count += 1;
            }
        }

        ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        status
    }
}
