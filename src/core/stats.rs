use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::events::EventSink;
use crate::core::models::GameEvent;

/// Counters accumulated over the current run of a level. Holds no logic;
/// filled by RunTracker, read by the HUD and debug sinks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    pub moves: u32,
    pub pushes: u32,
    pub undos: u32,
    pub restarts: u32,
    pub time_sec: f32,
}

impl fmt::Display for LevelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moves={}, pushes={}, undos={}, restarts={}, time={:.1}s",
            self.moves, self.pushes, self.undos, self.restarts, self.time_sec
        )
    }
}

/// Keeps the current run's stats in memory by listening to gameplay events.
/// Saves nothing to disk. The frontend feeds it wall-clock time once per
/// frame so snapshots carry the run duration.
pub struct RunTracker {
    current: LevelStats,
    level_start: f32,
    clock: f32,
}

impl RunTracker {
    pub fn new() -> RunTracker {
        RunTracker {
            current: LevelStats::default(),
            level_start: 0.0,
            clock: 0.0,
        }
    }

    pub fn set_clock(&mut self, now: f32) {
        self.clock = now;
    }

    pub fn snapshot(&self) -> LevelStats {
        let mut stats = self.current;
        stats.time_sec = (self.clock - self.level_start).max(0.0);
        stats
    }
}

impl Default for RunTracker {
    fn default() -> Self {
        RunTracker::new()
    }
}

impl EventSink for RunTracker {
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LevelLoaded => {
                self.current = LevelStats::default();
                self.level_start = self.clock;
            }
            GameEvent::Move => self.current.moves += 1,
            GameEvent::Push => self.current.pushes += 1,
            GameEvent::Undo => self.current.undos += 1,
            GameEvent::Restart => self.current.restarts += 1,
            GameEvent::GoalsMaybeChanged => {}
        }
    }
}
