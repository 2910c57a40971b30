use std::collections::HashSet;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::core::{GameSession, GridBounds, GridPos, LevelError, LevelGeometry, Occupant};
use crate::models::GameRenderState;

/// Text level format: '#' wall, '@' player, '$' box, '.' goal, '*' box on
/// goal, '+' player on goal, anything else floor. Ragged lines are padded to
/// the widest row; the playable bounds cover the whole rectangle.
pub fn parse_level(s: &str) -> Result<LevelGeometry, LevelError> {
    let mut walls = HashSet::new();
    let mut goals = HashSet::new();
    let mut boxes = Vec::new();
    let mut player = None;
    let max_width = s.lines().map(|line| line.len()).max().unwrap_or(0);

    let mut y = 0;
    for line in s.lines() {
        let line = line.trim_matches('\n');
        if line.is_empty() {
            continue;
        }

        for (x, ch) in line.chars().enumerate() {
            let pos = GridPos::new(x as i32, y);
            match ch {
                '#' => {
                    walls.insert(pos);
                }
                '.' => {
                    goals.insert(pos);
                }
                '$' => {
                    boxes.push(pos);
                }
                '*' => {
                    boxes.push(pos);
                    goals.insert(pos);
                }
                '@' => {
                    player = Some(pos);
                }
                '+' => {
                    player = Some(pos);
                    goals.insert(pos);
                }
                _ => {}
            }
        }
        y += 1;
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    LevelGeometry::new(
        GridBounds::from_size(max_width as i32, y),
        walls,
        goals,
        boxes,
        player,
        1.0,
    )
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &GameSession,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        // Game area
        let game_text = render_session_to_string(session);
        let game_paragraph = Paragraph::new(game_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Level {}/{}", state.level_index + 1, state.level_count)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // HUD counters
        let hud = format!(
            "Moves: {}   Pushes: {}   Undos: {}   Goals left: {}   Time: {:.0}s",
            state.stats.moves, state.stats.pushes, state.stats.undos, state.goals_left,
            state.stats.time_sec
        );
        let hud_paragraph = Paragraph::new(hud)
            .block(Block::default().borders(Borders::ALL).title("Run"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(hud_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.won {
            "Level cleared! (X = restart, C = next, Q = quit)"
        } else {
            "Controls: WASD or Arrow keys to move, Z to undo, X to restart, Q to quit"
        };

        let instructions = if let Some(status) = &state.status {
            format!("{} | {}", instructions, status)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_session_to_string(session: &GameSession) -> String {
    let geometry = session.geometry();
    let bounds = geometry.bounds;
    let mut result = String::new();
    for y in bounds.min.y..=bounds.max.y {
        for x in bounds.min.x..=bounds.max.x {
            let pos = GridPos::new(x, y);
            let has_player = pos == session.player();
            let has_box = matches!(session.occupant_at(&pos), Occupant::Box(_));
            let is_goal = geometry.goals.contains(&pos);
            let ch = if geometry.walls.contains(&pos) {
                '#'
            } else if has_player {
                if is_goal { '+' } else { '@' }
            } else if has_box {
                if is_goal { '*' } else { '$' }
            } else if is_goal {
                '.'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    /// Raw directional input as an axis vector, +y up. Collapsed to a single
    /// direction by the input repeater, not here.
    MoveAxis(f32, f32),
    Undo,
    Restart,
    Next,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::MoveAxis(0.0, 1.0)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::MoveAxis(0.0, -1.0)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::MoveAxis(-1.0, 0.0)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::MoveAxis(1.0, 0.0)
                }
                KeyCode::Char('z') | KeyCode::Char('Z') => ConsoleInput::Undo,
                KeyCode::Char('x') | KeyCode::Char('X') => ConsoleInput::Restart,
                KeyCode::Char('c') | KeyCode::Char('C') => ConsoleInput::Next,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
