//! The sandbox render pipeline: bind group layouts, the per-frame uniform and
//! the hot-reloadable shader program.

pub mod frame;
pub mod program;

pub use program::{ProgramId, ProgramLinker, ShaderProgram};
