use crate::core::models::Occupant;
use crate::core::session::GameSession;

impl GameSession {
    /// Count of goal cells not currently covered by a box. Recomputed from
    /// the occupancy index on every call; box positions can change between
    /// polls.
    pub fn goals_remaining(&self) -> usize {
        self.geometry()
            .goals
            .iter()
            .filter(|goal| !matches!(self.occupant_at(goal), Occupant::Box(_)))
            .count()
    }

    /// True iff there is at least one goal and every goal holds a box.
    pub fn all_goals_covered(&self) -> bool {
        !self.geometry().goals.is_empty() && self.goals_remaining() == 0
    }

    pub fn is_won(&self) -> bool {
        self.all_goals_covered()
    }
}
