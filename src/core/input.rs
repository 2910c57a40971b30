use crate::core::models::Direction;

#[derive(Clone, Copy, Debug)]
pub struct RepeatConfig {
    /// When off, holding a direction does nothing; one tap is one step.
    pub enabled: bool,
    pub first_delay: f32,
    pub interval: f32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        RepeatConfig {
            enabled: true,
            first_delay: 0.25,
            interval: 0.12,
        }
    }
}

/// Converts continuous directional input into discrete, rate-limited step
/// requests. Two states: Idle (no direction held) and Held. A fresh press or
/// a direction change emits immediately and arms the longer first delay;
/// holding the same direction emits again each time the repeat interval
/// elapses.
pub struct InputRepeater {
    config: RepeatConfig,
    held: Option<Direction>,
    next_repeat: f32,
}

impl InputRepeater {
    pub fn new(config: RepeatConfig) -> InputRepeater {
        InputRepeater {
            config,
            held: None,
            next_repeat: 0.0,
        }
    }

    /// Collapses a raw 2D input vector onto one axis. Horizontal wins only on
    /// strictly larger magnitude; equal magnitudes fall through to the
    /// vertical branch.
    pub fn normalize(x: f32, y: f32) -> Option<Direction> {
        if x.abs() > y.abs() {
            Some(if x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            })
        } else if y.abs() > 0.0 {
            Some(if y > 0.0 { Direction::Up } else { Direction::Down })
        } else {
            None
        }
    }

    /// Feed one input sample; returns at most one step request.
    pub fn sample(&mut self, raw: (f32, f32), now: f32) -> Option<Direction> {
        let Some(dir) = Self::normalize(raw.0, raw.1) else {
            self.held = None;
            return None;
        };

        if !self.config.enabled {
            let edge = self.held.is_none();
            self.held = Some(dir);
            return if edge { Some(dir) } else { None };
        }

        let just_pressed = self.held != Some(dir);
        if just_pressed || now >= self.next_repeat {
            self.next_repeat = now
                + if just_pressed {
                    self.config.first_delay
                } else {
                    self.config.interval
                };
            self.held = Some(dir);
            return Some(dir);
        }
        None
    }

    /// Clears the held direction so repeat does not stay armed while a
    /// movement animation is in flight.
    pub fn interrupt(&mut self) {
        self.held = None;
    }

    /// Undo took this tick: drop the held direction and push the timer out a
    /// full first delay so no unintended step fires right after.
    pub fn reset_after_undo(&mut self, now: f32) {
        self.held = None;
        self.next_repeat = now + self.config.first_delay;
    }
}
