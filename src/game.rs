use crate::config::{Board, Level, SCORE_3D, SCORE_ROTATE, SCORE_SPIN};
use crate::grid::{Cell, Grid};
use crate::input::{Direction, DirectionQueue};
use crate::score::ScoreTracker;

/// Current high-level gameplay state.
///
/// Crashed and Victorious are held for exactly one tick before GameOver
/// so the final frame (including the crash cell) gets rendered before
/// any game-over bookkeeping runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameState {
    Initializing,
    Playing,
    Paused,
    Crashed,
    Victorious,
    GameOver,
}

/// How far the board presentation has escalated. Monotonic; each stage
/// is entered at most once per session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub enum EscalationStage {
    Flat,
    Tilted,
    Rotated,
    Spinning,
}

/// Presentation-facing escalation transitions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Escalation {
    /// Score > 450: tilt the board into pseudo-3D.
    TiltTo3d,
    /// Score > 720: rotate a further 15 degrees.
    Rotate15,
    /// Score > 800: continuous spin; walls permanently disabled, the
    /// snake wraps at board edges from now on.
    Spin,
}

/// Why a finished session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Crashed,
    Victorious,
}

/// Side effects of one tick, consumed by the renderer and audio.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    FoodEaten,
    FoodPlaced,
    Escalated(Escalation),
    Crashed,
    Victorious,
    GameOver,
}

/// One game session: grid, pending input, score and the state machine.
///
/// Everything here is mutated from a single thread; the tick source only
/// tells the owner when to call [`GameSession::tick`].
#[derive(Debug, Clone)]
pub struct GameSession {
    pub level: Level,
    pub state: GameState,
    pub grid: Grid,
    pub score: ScoreTracker,
    direction: Direction,
    directions: DirectionQueue,
    stage: EscalationStage,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session on a fresh board with walls enabled, heading
    /// right, in the Initializing state.
    #[must_use]
    pub fn new_with_seed(level: Level, board: Board, seed: u64) -> Self {
        Self {
            level,
            state: GameState::Initializing,
            grid: Grid::new_with_seed(board, true, seed),
            score: ScoreTracker::new(),
            direction: Direction::Right,
            directions: DirectionQueue::new(),
            stage: EscalationStage::Flat,
            outcome: None,
        }
    }

    /// First render happened; start playing.
    pub fn begin(&mut self) {
        if self.state == GameState::Initializing {
            self.state = GameState::Playing;
        }
    }

    /// Buffers a direction change. Ignored unless currently Playing.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.state != GameState::Playing {
            return;
        }
        self.directions.enqueue(direction, self.direction);
    }

    /// Toggles Playing and Paused; no-op in any other state.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn stage(&self) -> EscalationStage {
        self.stage
    }

    /// Why the session ended; None until Crashed or Victorious.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once the session has reached its terminal state and
    /// the tick source should be cancelled.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Advances the simulation by one tick and reports its side effects.
    ///
    /// A tick that finds the session already Crashed or Victorious
    /// promotes it to GameOver instead of moving the snake; that is the
    /// one-tick delay that lets the final frame render first.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        match self.state {
            GameState::Crashed | GameState::Victorious => {
                self.state = GameState::GameOver;
                return vec![GameEvent::GameOver];
            }
            GameState::Playing => {}
            _ => return Vec::new(),
        }

        if let Some(next) = self.directions.dequeue() {
            self.direction = next;
        }

        let new_head = self.grid.advance_head(self.direction);
        let mut events = Vec::new();

        if self.grid.is_food_at(new_head) {
            self.score.award();
            // The head must join the body before placement so the food
            // picker sees every occupied cell.
            self.grid.grow_head(new_head);
            events.push(GameEvent::FoodEaten);

            if self.grid.is_board_full() {
                self.state = GameState::Victorious;
                self.outcome = Some(Outcome::Victorious);
                events.push(GameEvent::Victorious);
            } else {
                self.grid.place_food();
                events.push(GameEvent::FoodPlaced);
                if let Some(escalation) = self.escalate() {
                    events.push(GameEvent::Escalated(escalation));
                }
            }
        } else {
            self.score.decay();
            // Vacate the tail before the collision check so the head
            // cannot collide with the cell the tail is leaving.
            self.grid.remove_tail();
            if self.grid.is_collision(new_head) {
                self.state = GameState::Crashed;
                self.outcome = Some(Outcome::Crashed);
                events.push(GameEvent::Crashed);
            }
            // Append even on a crash so the final frame shows where the
            // snake hit.
            self.grid.grow_head(new_head);
        }

        events
    }

    /// Steps the escalation ladder after a food placement, highest
    /// threshold first. Each rung fires at most once.
    fn escalate(&mut self) -> Option<Escalation> {
        let score = self.score.score;

        if score > SCORE_SPIN && self.grid.walls_enabled() {
            self.grid.disable_walls();
            self.stage = EscalationStage::Spinning;
            Some(Escalation::Spin)
        } else if score > SCORE_ROTATE
            && self.grid.walls_enabled()
            && self.stage < EscalationStage::Rotated
        {
            self.stage = EscalationStage::Rotated;
            Some(Escalation::Rotate15)
        } else if score > SCORE_3D && self.stage == EscalationStage::Flat {
            self.stage = EscalationStage::Tilted;
            Some(Escalation::TiltTo3d)
        } else {
            None
        }
    }
}
