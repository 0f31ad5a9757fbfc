//! Engine data structures: entities, the quad mesh, per-draw instances and textures.
//!
//! - `entity` holds named entities and the fixed-capacity table that owns them
//! - `instance` holds per-draw transformation data and the shape mode
//! - `mesh` contains the static quad and its GPU buffers
//! - `texture` contains GPU texture wrapper and creation utilities

pub mod entity;
pub mod instance;
pub mod mesh;
pub mod texture;
