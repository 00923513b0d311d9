use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::config::{Level, MAX_PENDING_DIRECTIONS};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the screen loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Quit,
    Confirm,
    SelectLevel(Level),
    CycleTheme,
    ToggleBigBoard,
}

/// FIFO buffer of pending direction changes.
///
/// A queued direction must differ from the effective previous direction
/// (the last queued one, or the snake's current direction when the queue
/// is empty) and must not be its 180° opposite. The queue is capped; at
/// most one entry is consumed per tick, so depth beyond the cap only
/// exists under input flooding and is silently dropped.
#[derive(Debug, Clone, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers `direction` if it is a legal turn relative to the last
    /// queued direction, or `current` when nothing is queued.
    pub fn enqueue(&mut self, direction: Direction, current: Direction) {
        let previous = self.pending.back().copied().unwrap_or(current);
        if direction == previous || direction == previous.opposite() {
            return;
        }
        if self.pending.len() >= MAX_PENDING_DIRECTIONS {
            return;
        }
        self.pending.push_back(direction);
    }

    /// Pops the oldest buffered direction, if any.
    pub fn dequeue(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    /// Drops all buffered directions.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Polls the terminal for one input event, waiting at most `timeout`.
///
/// Returns `Ok(None)` when no key arrived in time or the key is not bound.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    // Ignore release/repeat-release events on terminals that report them.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(c) => map_char(c),
        _ => None,
    }
}

fn map_char(c: char) -> Option<GameInput> {
    match c.to_ascii_lowercase() {
        'w' => Some(GameInput::Direction(Direction::Up)),
        's' => Some(GameInput::Direction(Direction::Down)),
        'a' => Some(GameInput::Direction(Direction::Left)),
        'd' => Some(GameInput::Direction(Direction::Right)),
        'p' => Some(GameInput::Pause),
        'q' => Some(GameInput::Quit),
        ' ' => Some(GameInput::Confirm),
        't' => Some(GameInput::CycleTheme),
        'b' => Some(GameInput::ToggleBigBoard),
        '1' => Some(GameInput::SelectLevel(Level::Slow)),
        '2' => Some(GameInput::SelectLevel(Level::Medium)),
        '3' => Some(GameInput::SelectLevel(Level::Fast)),
        _ => None,
    }
}
