//! Startup settings of the sandbox.
//!
//! Nothing is read from disk here: the defaults are the sandbox, and code that
//! embeds it can tweak the fields before calling [`crate::flow::run`].

use std::{path::PathBuf, time::Duration};

use crate::resources::shader::ProgramSource;

#[derive(Clone, Debug)]
pub struct SandboxConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub shaders: ProgramSource,
    pub diffuse_texture: PathBuf,
    pub normal_texture: PathBuf,
    /// Distance the player moves (or grows) per frame while a key is held.
    pub player_step: f32,
    pub player_start: [f32; 3],
    pub player_scale: [f32; 3],
    /// Offset of the first grid cell; the rest follow one unit apart.
    pub grid_origin: f32,
    /// Scale applied to grid cells unless the freeze key is held.
    pub cell_shrink: f32,
    pub clear_colour: wgpu::Color,
    /// How often frame statistics are logged at debug level.
    pub stats_interval: Duration,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            title: "2D Lights Example with SD Shapes".to_string(),
            width: 1080,
            height: 720,
            shaders: ProgramSource::new(
                "shaders/base_vertex_shader.vert",
                "shaders/light_fragment_shader.frag",
            ),
            diffuse_texture: PathBuf::from("assets/sample.jpg"),
            normal_texture: PathBuf::from("assets/normal.jpg"),
            player_step: 0.01,
            player_start: [1.2, 1.2, 0.0],
            player_scale: [0.5, 0.5, 1.0],
            grid_origin: 1.2,
            cell_shrink: 0.98,
            clear_colour: wgpu::Color::BLACK,
            stats_interval: Duration::from_secs(5),
        }
    }
}
