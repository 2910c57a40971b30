use crate::core::LevelStats;

pub struct GameRenderState {
    pub won: bool,
    pub status: Option<String>,
    pub stats: LevelStats,
    pub goals_left: usize,
    pub level_index: usize,
    pub level_count: usize,
}
