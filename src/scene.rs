//! What gets drawn each frame: the world grid and the player.
//!
//! The scene owns the entity table. Building the per-frame draw list is pure
//! math on CPU data, so it can be exercised without a GPU.

use cgmath::Matrix4;

use crate::{
    config::SandboxConfig,
    data_structures::{
        entity::{Entity, EntityError, EntityTable},
        instance::{Instance, InstanceRaw, ShapeMode},
    },
    input::{self, KeyboardState},
};

pub const GRID_SIZE: usize = 5;

/// Cells flagged `1` are drawn as circles, the rest as boxes.
#[rustfmt::skip]
pub const WORLD_GRID: [[u8; GRID_SIZE]; GRID_SIZE] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

/// Draws per frame: every grid cell plus the player.
pub const DRAWS_PER_FRAME: usize = GRID_SIZE * GRID_SIZE + 1;

pub const PLAYER: &str = "Player";

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Orthographic projection spanning `[-ratio, ratio]` in x, where `ratio` is
/// the framebuffer's aspect ratio, and `[1, -1]` from bottom to top, so +y
/// points down the screen.
pub fn projection(width: u32, height: u32) -> Matrix4<f32> {
    let ratio = width as f32 / height.max(1) as f32;
    OPENGL_TO_WGPU_MATRIX * cgmath::ortho(-ratio, ratio, 1.0, -1.0, -1.0, 1.0)
}

pub fn cell_shape(flag: u8) -> ShapeMode {
    if flag == 1 {
        ShapeMode::Circle
    } else {
        ShapeMode::Box
    }
}

#[derive(Debug)]
pub struct Scene {
    pub entities: EntityTable,
    player_step: f32,
    grid_origin: f32,
    cell_shrink: f32,
}

impl Scene {
    /// Build the scene and register the player entity.
    pub fn new(config: &SandboxConfig) -> Result<Self, EntityError> {
        let mut entities = EntityTable::new();
        entities.register(
            Entity::new(PLAYER, 0)
                .with_position(config.player_start)
                .with_scale(config.player_scale),
        )?;
        Ok(Self {
            entities,
            player_step: config.player_step,
            grid_origin: config.grid_origin,
            cell_shrink: config.cell_shrink,
        })
    }

    pub fn player(&self) -> Result<&Entity, EntityError> {
        self.entities
            .find(PLAYER)
            .ok_or_else(|| EntityError::NotFound(PLAYER.to_string()))
    }

    pub fn player_mut(&mut self) -> Result<&mut Entity, EntityError> {
        self.entities.require_mut(PLAYER)
    }

    /// Instances of this frame in draw order: the grid row by row, then the
    /// player.
    pub fn draw_list(&self, keys: &KeyboardState) -> Result<Vec<Instance>, EntityError> {
        let shrink = if keys.is_pressed(input::KEY_FREEZE) {
            None
        } else {
            Some(self.cell_shrink)
        };
        let mut instances = Vec::with_capacity(DRAWS_PER_FRAME);
        for (x, row) in WORLD_GRID.iter().enumerate() {
            for (y, flag) in row.iter().enumerate() {
                instances.push(Instance::grid_cell(
                    x,
                    y,
                    self.grid_origin,
                    shrink,
                    cell_shape(*flag),
                ));
            }
        }
        instances.push(Instance::entity(self.player()?, ShapeMode::Player));
        Ok(instances)
    }

    pub fn raw_draw_list(
        &self,
        keys: &KeyboardState,
        projection: &Matrix4<f32>,
    ) -> Result<Vec<InstanceRaw>, EntityError> {
        Ok(self
            .draw_list(keys)?
            .iter()
            .map(|instance| instance.to_raw(projection))
            .collect())
    }

    /// Turn the player to this frame's time; called before the draw list is
    /// built.
    pub fn spin_player(&mut self, time: f32) -> Result<(), EntityError> {
        self.player_mut()?.rotation = time;
        Ok(())
    }

    /// Move the player by the held keys; called once the frame is drawn.
    pub fn apply_controls(&mut self, keys: &KeyboardState) -> Result<(), EntityError> {
        let step = self.player_step;
        input::apply_player_controls(self.player_mut()?, keys, step);
        Ok(())
    }
}
