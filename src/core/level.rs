use std::collections::HashSet;
use std::fmt;

use crate::core::bounds::GridBounds;
use crate::core::models::GridPos;

/// Immutable level data for one loaded level: playable bounds, wall cells,
/// goal cells, initial box positions (identity = index) and the player's
/// starting cell. Validated once at construction; the session never operates
/// on unchecked geometry.
#[derive(Clone, Debug)]
pub struct LevelGeometry {
    pub bounds: GridBounds,
    pub walls: HashSet<GridPos>,
    pub goals: HashSet<GridPos>,
    pub boxes: Vec<GridPos>,
    pub player_start: GridPos,
    pub cell_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LevelError {
    InvalidCellSize(f32),
    EmptyBounds,
    MissingPlayer,
    PlayerOutOfBounds(GridPos),
    PlayerOnWall(GridPos),
    PlayerOnBox(GridPos),
    BoxOutOfBounds(GridPos),
    BoxOnWall(GridPos),
    BoxOverlap(GridPos),
    UnknownLevel(usize),
    NothingLoaded,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvalidCellSize(size) => {
                write!(f, "cell size must be positive, got {}", size)
            }
            LevelError::EmptyBounds => write!(f, "level bounds enclose no cells"),
            LevelError::MissingPlayer => write!(f, "level has no player cell"),
            LevelError::PlayerOutOfBounds(p) => {
                write!(f, "player starts outside bounds at ({}, {})", p.x, p.y)
            }
            LevelError::PlayerOnWall(p) => {
                write!(f, "player starts inside a wall at ({}, {})", p.x, p.y)
            }
            LevelError::PlayerOnBox(p) => {
                write!(f, "player starts on a box at ({}, {})", p.x, p.y)
            }
            LevelError::BoxOutOfBounds(p) => {
                write!(f, "box starts outside bounds at ({}, {})", p.x, p.y)
            }
            LevelError::BoxOnWall(p) => {
                write!(f, "box starts inside a wall at ({}, {})", p.x, p.y)
            }
            LevelError::BoxOverlap(p) => {
                write!(f, "two boxes start at ({}, {})", p.x, p.y)
            }
            LevelError::UnknownLevel(index) => write!(f, "no level at index {}", index),
            LevelError::NothingLoaded => write!(f, "no level is loaded"),
        }
    }
}

impl std::error::Error for LevelError {}

impl LevelGeometry {
    pub fn new(
        bounds: GridBounds,
        walls: HashSet<GridPos>,
        goals: HashSet<GridPos>,
        boxes: Vec<GridPos>,
        player_start: GridPos,
        cell_size: f32,
    ) -> Result<LevelGeometry, LevelError> {
        if !(cell_size > 0.0) {
            return Err(LevelError::InvalidCellSize(cell_size));
        }
        if bounds.max.x < bounds.min.x || bounds.max.y < bounds.min.y {
            return Err(LevelError::EmptyBounds);
        }
        if !bounds.contains(&player_start) {
            return Err(LevelError::PlayerOutOfBounds(player_start));
        }
        if walls.contains(&player_start) {
            return Err(LevelError::PlayerOnWall(player_start));
        }
        let mut seen = HashSet::new();
        for &pos in &boxes {
            if !bounds.contains(&pos) {
                return Err(LevelError::BoxOutOfBounds(pos));
            }
            if walls.contains(&pos) {
                return Err(LevelError::BoxOnWall(pos));
            }
            if !seen.insert(pos) {
                return Err(LevelError::BoxOverlap(pos));
            }
        }
        if seen.contains(&player_start) {
            return Err(LevelError::PlayerOnBox(player_start));
        }
        Ok(LevelGeometry {
            bounds,
            walls,
            goals,
            boxes,
            player_start,
            cell_size,
        })
    }
}
