use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

/// Counters describing what the GPU was asked to do.
///
/// `draw_call_count` covers the current frame and is reset before each one,
/// the rest describe resources alive right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub draw_call_count: u32,
    pub vertex_count: u32,
    pub index_count: u32,
    pub texture_count: u32,
    pub shader_count: u32,
    pub entity_count: u32,
}

impl Stats {
    pub fn begin_frame(&mut self) {
        self.draw_call_count = 0;
    }
}

/// Central GPU and window state: surface, device, queue and surface config.
#[derive(Debug)]
pub struct Context {
    window: Arc<Window>,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub clear_colour: wgpu::Color,
    pub stats: Stats,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // Backends::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No graphics adapter can present to this window")?;
        log::info!("device and queue on {:?}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("lightbox device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await
            .context("Failed to open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Shaders assume an Srgb surface texture, other formats come out darker
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("The surface reports no texture formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Fifo waits for vsync, same as a swap interval of 1
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            clear_colour: wgpu::Color::BLACK,
            stats: Stats::default(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}
