#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> GridPos {
        GridPos { x, y }
    }

    pub fn stepped(&self, dir: Direction) -> GridPos {
        let (dx, dy) = dir.delta();
        GridPos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Display-side projection of a grid cell. z is carried through untouched,
/// it is not part of grid logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Grid rows grow downward, so Up is a decreasing y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

pub type BoxId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Wall,
    Box(BoxId),
}

/// One undoable unit of player (and optionally box) displacement.
/// Appended only on successful steps, never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub player_from: GridPos,
    pub player_to: GridPos,
    pub push: Option<PushRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PushRecord {
    pub box_id: BoxId,
    pub box_from: GridPos,
    pub box_to: GridPos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Stepped(StepKind),
    Blocked(BlockedReason),
    /// A movement animation is still in flight; the request was dropped.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockedReason {
    OutOfBounds,
    Wall,
    PushOutOfBounds,
    PushBlocked,
}

impl BlockedReason {
    pub fn message(&self) -> &'static str {
        match self {
            BlockedReason::OutOfBounds => "Cannot move out of bounds",
            BlockedReason::Wall => "Cannot walk into a wall",
            BlockedReason::PushOutOfBounds => "Cannot push block out of bounds",
            BlockedReason::PushBlocked => "Cannot push block",
        }
    }
}

/// Payload-free signals raised by the session for HUD/telemetry observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Move,
    Push,
    Undo,
    Restart,
    LevelLoaded,
    GoalsMaybeChanged,
}
