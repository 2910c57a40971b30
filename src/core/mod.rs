mod animation;
mod bounds;
mod events;
mod grid_map;
mod history;
mod input;
mod level;
mod model_helpers;
mod models;
mod occupancy;
mod session;
mod stats;

pub use animation::{MOVE_DURATION, MotionState, Tween};
pub use bounds::GridBounds;
pub use events::{EventHub, EventSink};
pub use grid_map::{grid_to_world, world_to_grid};
pub use history::MoveHistory;
pub use input::{InputRepeater, RepeatConfig};
pub use level::{LevelError, LevelGeometry};
pub use models::{
    BlockedReason, BoxId, Direction, GameEvent, GridPos, MoveRecord, Occupant, PushRecord,
    StepKind, StepResult, WorldPos,
};
pub use occupancy::OccupancyGrid;
pub use session::GameSession;
pub use stats::{LevelStats, RunTracker};
