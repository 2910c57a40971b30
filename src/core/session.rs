use std::cell::RefCell;
use std::rc::Rc;

use crate::core::animation::{MOVE_DURATION, MotionState};
use crate::core::events::{EventHub, EventSink};
use crate::core::grid_map::grid_to_world;
use crate::core::history::MoveHistory;
use crate::core::level::LevelGeometry;
use crate::core::models::{
    BlockedReason, BoxId, Direction, GameEvent, GridPos, MoveRecord, Occupant, PushRecord,
    StepKind, StepResult, WorldPos,
};
use crate::core::occupancy::OccupancyGrid;

/// One loaded level in play. Owns the player and box grid positions, the
/// move history and the tween state; nothing else mutates them. Dropping the
/// session is unloading the level: history never crosses that boundary.
pub struct GameSession {
    geometry: LevelGeometry,
    occupancy: OccupancyGrid,
    player: GridPos,
    box_positions: Vec<GridPos>,
    box_on_goal: Vec<bool>,
    history: MoveHistory,
    motion: MotionState,
    events: EventHub,
}

impl GameSession {
    pub fn new(geometry: LevelGeometry) -> GameSession {
        let occupancy =
            OccupancyGrid::new(geometry.bounds, geometry.walls.clone(), &geometry.boxes);
        let box_positions = geometry.boxes.clone();
        let box_on_goal = box_positions
            .iter()
            .map(|pos| geometry.goals.contains(pos))
            .collect();
        let player = geometry.player_start;
        GameSession {
            geometry,
            occupancy,
            player,
            box_positions,
            box_on_goal,
            history: MoveHistory::new(),
            motion: MotionState::new(MOVE_DURATION),
            events: EventHub::new(),
        }
    }

    pub fn with_move_duration(mut self, duration: f32) -> GameSession {
        self.motion = MotionState::new(duration);
        self
    }

    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn EventSink>>) {
        self.events.subscribe(sink);
    }

    /// Raised once by the level lifecycle after observers are wired up.
    pub fn notify_loaded(&self) {
        self.events.raise(GameEvent::LevelLoaded);
        self.events.raise(GameEvent::GoalsMaybeChanged);
    }

    pub fn notify_restarted(&self) {
        self.events.raise(GameEvent::Restart);
    }

    /// Resolves one discrete step attempt. Bounds are checked before
    /// occupancy, so the occupancy index is never asked about cells the
    /// bounds already rejected; a push probes the cell beyond the box with
    /// the box itself excluded. Mutation, history append and goal recompute
    /// all happen here, synchronously, before the tweens start.
    pub fn try_step(&mut self, dir: Direction) -> StepResult {
        if self.motion.any_in_flight() {
            return StepResult::Busy;
        }

        let target = self.player.stepped(dir);
        if !self.geometry.bounds.contains(&target) {
            return StepResult::Blocked(BlockedReason::OutOfBounds);
        }

        match self.occupancy.occupant_at(&target, None) {
            Occupant::Wall => StepResult::Blocked(BlockedReason::Wall),
            Occupant::Empty => {
                self.history.record_step(MoveRecord {
                    player_from: self.player,
                    player_to: target,
                    push: None,
                });
                self.begin_player_move(target);
                self.events.raise(GameEvent::Move);
                StepResult::Stepped(StepKind::PlayerMove)
            }
            Occupant::Box(id) => {
                let box_from = self.box_positions[id];
                let box_target = box_from.stepped(dir);
                if !self.geometry.bounds.contains(&box_target) {
                    return StepResult::Blocked(BlockedReason::PushOutOfBounds);
                }
                if self.occupancy.occupant_at(&box_target, Some(id)) != Occupant::Empty {
                    return StepResult::Blocked(BlockedReason::PushBlocked);
                }

                self.history.record_step(MoveRecord {
                    player_from: self.player,
                    player_to: target,
                    push: Some(PushRecord {
                        box_id: id,
                        box_from,
                        box_to: box_target,
                    }),
                });
                self.relocate_box(id, box_from, box_target);
                self.begin_player_move(target);
                self.events.raise(GameEvent::Move);
                self.events.raise(GameEvent::Push);
                self.events.raise(GameEvent::GoalsMaybeChanged);
                StepResult::Stepped(StepKind::PlayerAndBoxMove)
            }
        }
    }

    pub fn can_undo_now(&self) -> bool {
        !self.motion.any_in_flight() && !self.history.is_empty()
    }

    /// Pops and reverts the most recent record, or does nothing. Either the
    /// full record is reverted or nothing changes.
    pub fn try_undo(&mut self) -> bool {
        if !self.can_undo_now() {
            return false;
        }
        let Some(record) = self.history.pop_last() else {
            return false;
        };

        // Snap is a no-op when nothing animates.
        self.motion.cancel_and_snap();

        self.player = record.player_from;
        if let Some(push) = record.push {
            self.occupancy
                .move_box(push.box_id, &push.box_to, &push.box_from);
            self.box_positions[push.box_id] = push.box_from;
            self.box_on_goal[push.box_id] = self.geometry.goals.contains(&push.box_from);
        }

        self.events.raise(GameEvent::Undo);
        self.events.raise(GameEvent::GoalsMaybeChanged);
        true
    }

    pub fn tick(&mut self, dt: f32) {
        self.motion.tick(dt);
    }

    pub fn any_motion_in_flight(&self) -> bool {
        self.motion.any_in_flight()
    }

    fn begin_player_move(&mut self, target: GridPos) {
        let from = self.player_world_settled(self.player);
        let to = self.player_world_settled(target);
        self.player = target;
        self.motion.start_player(from, to);
    }

    fn relocate_box(&mut self, id: BoxId, from: GridPos, to: GridPos) {
        self.occupancy.move_box(id, &from, &to);
        self.box_positions[id] = to;
        self.box_on_goal[id] = self.geometry.goals.contains(&to);
        let cell = self.geometry.cell_size;
        self.motion.start_box(
            id,
            grid_to_world(from, cell, 0.0),
            grid_to_world(to, cell, 0.0),
        );
    }

    fn player_world_settled(&self, pos: GridPos) -> WorldPos {
        grid_to_world(pos, self.geometry.cell_size, 0.0)
    }

    pub fn occupant_at(&self, pos: &GridPos) -> Occupant {
        self.occupancy.occupant_at(pos, None)
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn box_positions(&self) -> &[GridPos] {
        &self.box_positions
    }

    pub fn box_on_goal(&self, id: BoxId) -> bool {
        self.box_on_goal[id]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Display position of the player, mid-tween or settled.
    pub fn player_world(&self) -> WorldPos {
        self.motion
            .player_position(self.player_world_settled(self.player))
    }

    pub fn box_world(&self, id: BoxId) -> WorldPos {
        let settled = grid_to_world(self.box_positions[id], self.geometry.cell_size, 0.0);
        self.motion.box_position(id, settled)
    }
}
