pub use dissimilar::diff as __diff;

use crate::console_interface::{parse_level, render_session_to_string};
use crate::core::{Direction, GameSession, StepResult};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub session: GameSession,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let geometry = parse_level(level).expect("level fixture should parse");
        Self {
            session: GameSession::new(geometry),
        }
    }

    pub fn game_to_string(&self) -> String {
        render_session_to_string(&self.session)
            .trim_matches('\n')
            .into()
    }

    /// Attempt a step and settle the tween so the next request is accepted.
    pub fn try_move(&mut self, direction: Direction) -> StepResult {
        let result = self.session.try_step(direction);
        self.session.tick(1.0);
        result
    }

    pub fn assert_move(&mut self, direction: Direction) -> StepResult {
        let result = self.try_move(direction);
        let StepResult::Stepped(_) = result else {
            panic!(
                "Expected step to land, got {:?}, in map {}",
                result,
                self.game_to_string()
            );
        };
        result
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.session.try_undo();
        self.session.tick(1.0);
        undone
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
