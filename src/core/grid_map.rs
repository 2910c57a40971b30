use crate::core::models::{GridPos, WorldPos};

/// Rounds each axis to the nearest cell. Fractional jitter in world
/// coordinates is resolved here, never inside the resolver.
pub fn world_to_grid(world: WorldPos, cell_size: f32) -> GridPos {
    let inv = 1.0 / cell_size;
    GridPos {
        x: (world.x * inv).round() as i32,
        y: (world.y * inv).round() as i32,
    }
}

pub fn grid_to_world(grid: GridPos, cell_size: f32, z_depth: f32) -> WorldPos {
    WorldPos {
        x: grid.x as f32 * cell_size,
        y: grid.y as f32 * cell_size,
        z: z_depth,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn jitter_rounds_to_nearest_cell() {
        let pos = world_to_grid(
            WorldPos {
                x: 2.98,
                y: -1.04,
                z: 0.0,
            },
            1.0,
        );
        assert_eq!(pos, GridPos::new(3, -1));
    }

    #[test]
    fn maps_back_exactly_for_non_unit_cells() {
        let grid = GridPos::new(4, -2);
        let world = grid_to_world(grid, 0.5, 0.0);
        assert_eq!(world.x, 2.0);
        assert_eq!(world.y, -1.0);
        assert_eq!(world_to_grid(world, 0.5), grid);
    }

    #[test]
    fn z_depth_passes_through() {
        let world = grid_to_world(GridPos::new(1, 1), 1.0, -7.5);
        assert_eq!(world.z, -7.5);
    }
}
