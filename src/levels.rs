use crate::console_interface::parse_level;
use crate::core::{GameSession, LevelError};

/// Built-in catalog, easiest first.
pub const LEVELS: &[&str] = &[
    r#"
######
#@$ .#
######
"#,
    r#"
######
#@$  #
# $. #
# .  #
######
"#,
    r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#,
    r#"
       ####
########  ##
#          ###
# @$$ ##   ..#
# $$   ##  ..#
#         ####
###########
"#,
    r#"
 ### ###
#   #  .#
#   # . #
##$     #
 # $.* #
  # $##
   #@#
    #
"#,
];

/// Level lifecycle service: loads catalog entries into fresh sessions and
/// remembers which one is current. A constructed value, passed around by
/// reference; nothing about it is global. Each load produces a new session,
/// which is what clears history and re-derives the occupancy snapshot.
pub struct LevelSet {
    current: Option<usize>,
}

impl LevelSet {
    pub fn new() -> LevelSet {
        LevelSet { current: None }
    }

    pub fn level_count(&self) -> usize {
        LEVELS.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn load(&mut self, index: usize) -> Result<GameSession, LevelError> {
        let source = LEVELS
            .get(index)
            .copied()
            .ok_or(LevelError::UnknownLevel(index))?;
        let session = GameSession::new(parse_level(source)?);
        self.current = Some(index);
        Ok(session)
    }

    pub fn reload(&mut self) -> Result<GameSession, LevelError> {
        let index = self.current.ok_or(LevelError::NothingLoaded)?;
        self.load(index)
    }

    pub fn next_index(&self) -> Option<usize> {
        let next = self.current? + 1;
        (next < LEVELS.len()).then_some(next)
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        LevelSet::new()
    }
}
