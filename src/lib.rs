//! lightbox
//!
//! A minimal 2D rendering sandbox: one quad uploaded once, drawn as a 5x5 grid
//! of signed-distance shapes plus a player the keyboard moves around, with
//! shaders that can be edited and reloaded while the window is open.
//!
//! High-level modules
//! - `clock`: frame timing and average FPS
//! - `config`: startup settings (window, file paths, step sizes)
//! - `context`: central GPU and window context that owns device/queue/surface
//! - `data_structures`: entities, the quad mesh, per-draw instances, textures
//! - `flow`: the window event loop
//! - `input`: keyboard state and key bindings
//! - `pipelines`: the render pipeline and the reloadable shader program
//! - `render`: GPU resources and the per-frame draw
//! - `resources`: helpers to read shaders and textures from disk
//! - `scene`: the world grid, the player and the per-frame draw list
//!

pub mod clock;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod input;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use config::SandboxConfig;
pub use winit::keyboard::KeyCode;
