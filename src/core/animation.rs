use std::collections::HashMap;

use crate::core::models::{BoxId, WorldPos};

/// Matches the player tween duration; box tweens use the same value so both
/// settle together.
pub const MOVE_DURATION: f32 = 0.10;

/// Visual interpolation state for one entity. Purely display-side: the
/// logical grid position is already at the destination while this runs.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: WorldPos,
    pub to: WorldPos,
    pub duration: f32,
    pub elapsed: f32,
}

impl Tween {
    pub fn new(from: WorldPos, to: WorldPos, duration: f32) -> Tween {
        Tween {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn sample(&self) -> WorldPos {
        let t = (self.elapsed / self.duration.max(0.0001)).clamp(0.0, 1.0);
        WorldPos {
            x: self.from.x + (self.to.x - self.from.x) * t,
            y: self.from.y + (self.to.y - self.from.y) * t,
            z: self.to.z,
        }
    }
}

/// Tracks which entities are visually mid-move. The resolver only asks two
/// things of it: "is anything in flight" and "cancel everything and snap".
pub struct MotionState {
    move_duration: f32,
    player: Option<Tween>,
    boxes: HashMap<BoxId, Tween>,
}

impl MotionState {
    /// A non-positive duration disables tweening entirely; moves settle
    /// instantly and nothing ever reads as in flight.
    pub fn new(move_duration: f32) -> MotionState {
        MotionState {
            move_duration,
            player: None,
            boxes: HashMap::new(),
        }
    }

    pub fn start_player(&mut self, from: WorldPos, to: WorldPos) {
        if self.move_duration > 0.0 {
            self.player = Some(Tween::new(from, to, self.move_duration));
        }
    }

    pub fn start_box(&mut self, id: BoxId, from: WorldPos, to: WorldPos) {
        if self.move_duration > 0.0 {
            self.boxes.insert(id, Tween::new(from, to, self.move_duration));
        }
    }

    pub fn any_in_flight(&self) -> bool {
        self.player.is_some() || !self.boxes.is_empty()
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(tween) = &mut self.player {
            if tween.advance(dt) {
                self.player = None;
            }
        }
        self.boxes.retain(|_, tween| !tween.advance(dt));
    }

    /// Synchronous and total: no partial tween state survives. Callers snap
    /// entities to their logical positions afterwards.
    pub fn cancel_and_snap(&mut self) {
        self.player = None;
        self.boxes.clear();
    }

    pub fn player_position(&self, settled: WorldPos) -> WorldPos {
        self.player.as_ref().map(Tween::sample).unwrap_or(settled)
    }

    pub fn box_position(&self, id: BoxId, settled: WorldPos) -> WorldPos {
        self.boxes.get(&id).map(Tween::sample).unwrap_or(settled)
    }
}
