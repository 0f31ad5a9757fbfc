/**
 * This module contains all logic for loading shaders and textures from external files.
 */
pub mod shader;
pub mod texture;

pub use shader::{CompiledStage, ProgramSource, ShaderError, ShaderStage, compile, read_stage};
pub use texture::{TexturePair, load_texture, texture_pair_layout};
