// Grid box-pushing puzzle in the terminal.
// Controls: W/A/S/D or arrow keys to move, Z to undo, X to restart,
// C for the next level after a win, Q to quit.
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal,
// '+' player on goal, ' ' floor.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

use PushEngine::console_interface::ConsoleInput::*;
use PushEngine::console_interface::{cleanup_terminal, handle_input, render_game, setup_terminal};
use PushEngine::core::{GameSession, InputRepeater, RepeatConfig, RunTracker, StepResult};
use PushEngine::levels::LevelSet;
use PushEngine::models::GameRenderState;
use PushEngine::save::SaveFile;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

const SAVE_PATH: &str = "progress.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut levels = LevelSet::new();
    let mut save = SaveFile::load(SAVE_PATH);

    let start = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => save.highest_unlocked().min(levels.level_count() - 1),
    };

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut levels, &mut save, start, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    levels: &mut LevelSet,
    save: &mut SaveFile,
    start: usize,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = Rc::new(RefCell::new(RunTracker::new()));
    let mut session = load_level(levels, start, &tracker)?;
    let mut repeater = InputRepeater::new(RepeatConfig::default());

    let started = Instant::now();
    let mut last_frame = 0.0f32;
    let mut status: Option<String> = None;
    let mut won_handled = false;

    draw(terminal, &session, levels, &tracker, &status)?;

    loop {
        let now = started.elapsed().as_secs_f32();
        session.tick(now - last_frame);
        last_frame = now;
        tracker.borrow_mut().set_clock(now);

        match handle_input()? {
            Quit => break,
            // Undo wins over movement in the same tick; the key and any other
            // undo entry point route through the same can_undo_now guard.
            Undo => {
                if session.can_undo_now() {
                    session.try_undo();
                    repeater.reset_after_undo(now);
                    status = None;
                }
            }
            Restart => {
                session = reload_level(levels, &tracker)?;
                repeater.reset_after_undo(now);
                status = None;
                won_handled = false;
            }
            Next => {
                if session.is_won() {
                    if let Some(next) = levels.next_index() {
                        session = load_level(levels, next, &tracker)?;
                        repeater.reset_after_undo(now);
                        status = None;
                        won_handled = false;
                    }
                }
            }
            MoveAxis(x, y) => {
                if session.is_won() {
                    // board is frozen until restart/next
                } else if session.any_motion_in_flight() {
                    repeater.interrupt();
                } else if let Some(dir) = repeater.sample((x, y), now) {
                    status = match session.try_step(dir) {
                        StepResult::Blocked(reason) => Some(reason.message().to_string()),
                        _ => None,
                    };
                }
            }
            Timeout | Unknown => {}
        }

        if session.is_won() && !won_handled {
            won_handled = true;
            if let Some(next) = levels.next_index() {
                save.unlock_up_to(next)?;
            }
        }

        draw(terminal, &session, levels, &tracker, &status)?;
    }

    Ok(())
}

fn load_level(
    levels: &mut LevelSet,
    index: usize,
    tracker: &Rc<RefCell<RunTracker>>,
) -> Result<GameSession, Box<dyn std::error::Error>> {
    let mut session = levels.load(index)?;
    session.subscribe(tracker.clone());
    session.notify_loaded();
    Ok(session)
}

fn reload_level(
    levels: &mut LevelSet,
    tracker: &Rc<RefCell<RunTracker>>,
) -> Result<GameSession, Box<dyn std::error::Error>> {
    let mut session = levels.reload()?;
    session.subscribe(tracker.clone());
    session.notify_loaded();
    session.notify_restarted();
    Ok(session)
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &GameSession,
    levels: &LevelSet,
    tracker: &Rc<RefCell<RunTracker>>,
    status: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = GameRenderState {
        won: session.is_won(),
        status: status.clone(),
        stats: tracker.borrow().snapshot(),
        goals_left: session.goals_remaining(),
        level_index: levels.current_index().unwrap_or(0),
        level_count: levels.level_count(),
    };
    render_game(terminal, session, &state)
}
