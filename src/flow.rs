//! Application event loop.
//!
//! The loop is driven by `winit`. It has two states, running and closing (see
//! [`LoopState`]); a window close request or the quit key moves it to closing
//! and the event loop exits.
//!
//! # Lifecycle
//!
//! Each redraw:
//! 1. Tick the frame clock
//! 2. Reload the shaders if the reload key was just pressed
//! 3. Turn the player to the current time
//! 4. Build the draw list (grid cells, then the player) against the current
//!    projection
//! 5. Render one draw call per entry and present
//! 6. Apply the held keys to the player
//! 7. Request the next redraw, or exit when closing

use std::sync::Arc;

use anyhow::Context as _;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    clock::FrameClock,
    config::SandboxConfig,
    context::Context,
    input::{self, KeyboardState, LoopState, ReloadLatch},
    render::{FrameStatus, Renderer},
    scene::{self, Scene},
};

/// Everything that exists once the window is up.
pub struct AppState {
    pub ctx: Context,
    pub renderer: Renderer,
    pub scene: Scene,
    keys: KeyboardState,
    reload: ReloadLatch,
    loop_state: LoopState,
    clock: FrameClock,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &SandboxConfig) -> anyhow::Result<Self> {
        let mut ctx = Context::new(window).await?;
        ctx.clear_colour = config.clear_colour;
        let renderer = Renderer::new(&mut ctx, config).await?;
        let scene = Scene::new(config)?;
        ctx.stats.entity_count = scene.entities.len() as u32;

        let mut state = Self {
            ctx,
            renderer,
            scene,
            keys: KeyboardState::new(),
            reload: ReloadLatch::default(),
            loop_state: LoopState::Running,
            clock: FrameClock::new(config.stats_interval),
            is_surface_configured: false,
        };
        let size = state.ctx.window().inner_size();
        state.resize(size.width, size.height);
        Ok(state)
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.ctx.surface.configure(&self.ctx.device, &self.ctx.config);
            self.is_surface_configured = true;
        }
    }

    fn frame(&mut self, runtime: &tokio::runtime::Runtime) -> anyhow::Result<()> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }
        let time = self.clock.tick();

        if self.reload.update(self.keys.is_pressed(input::KEY_RELOAD)) {
            let reloaded = runtime.block_on(self.renderer.reload_shaders(&self.ctx.device));
            if let Err(e) = reloaded {
                log::error!(
                    "Shader reload failed, still using {}: {}",
                    self.renderer.program.id,
                    e
                );
            }
        }

        self.scene.spin_player(time)?;
        let projection = scene::projection(self.ctx.config.width, self.ctx.config.height);
        let instances = self.scene.raw_draw_list(&self.keys, &projection)?;

        match self.renderer.render(&mut self.ctx, &instances, time) {
            FrameStatus::Presented | FrameStatus::Skipped => (),
            // Reconfigure the surface if it's lost, outdated or no longer a match
            FrameStatus::PresentedSuboptimal | FrameStatus::Reconfigure => {
                let size = self.ctx.window().inner_size();
                self.resize(size.width, size.height);
            }
        }

        self.scene.apply_controls(&self.keys)?;
        self.ctx.stats.entity_count = self.scene.entities.len() as u32;

        if let Some(fps) = self.clock.average_fps() {
            log::debug!("{:.1} fps, {:?}", fps, self.ctx.stats);
        }
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: SandboxConfig,
    state: Option<AppState>,
    // The first fatal error; `run` hands it back once the loop has exited.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: SandboxConfig) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime")?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let init = AppState::new(window, &self.config);
        match self.async_runtime.block_on(init) {
            Ok(state) => {
                state.ctx.window().request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e.context("App initialization failed")),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        if let Some((key, key_state)) = state.keys.handle_window_event(&event) {
            state.loop_state.on_key(key, key_state);
        }

        match event {
            WindowEvent::CloseRequested => state.loop_state.close(),
            WindowEvent::Focused(false) => state.keys.clear(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                if let Err(e) = state.frame(&self.async_runtime) {
                    return self.fail(event_loop, e);
                }
                if state.loop_state.is_running() {
                    state.ctx.window().request_redraw();
                }
            }
            _ => {}
        }

        if !state.loop_state.is_running() {
            log::info!("closing");
            event_loop.exit();
        }
    }
}

/// Open the window and run the sandbox until it is closed.
pub fn run(config: SandboxConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
