use std::time::Duration;

/// Logical board dimensions in cells, including the 1-cell wall band.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making cols vs. rows unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
}

impl Board {
    /// Creates a board, rejecting non-positive dimensions.
    ///
    /// Zero or negative dimensions are a programmer error, not a runtime
    /// condition, so this panics rather than returning a `Result`.
    #[must_use]
    pub fn new(cols: i32, rows: i32) -> Self {
        assert!(
            cols > 0 && rows > 0,
            "board dimensions must be positive, got {cols}x{rows}"
        );
        Self { cols, rows }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Returns the number of cells the snake can actually occupy.
    ///
    /// While walls are enabled the outer 1-cell band is off limits; once
    /// they are disabled (spin escalation) the whole grid is playable.
    #[must_use]
    pub fn playable_cells(self, walls_enabled: bool) -> usize {
        if walls_enabled {
            ((self.cols - 2).max(0) as usize) * ((self.rows - 2).max(0) as usize)
        } else {
            self.total_cells()
        }
    }
}

/// Default board: 15 columns by 14 rows, wall band included.
pub const BOARD_COLS: i32 = 15;
pub const BOARD_ROWS: i32 = 14;

/// Score awarded for food caught on the very first tick; the award decays
/// by 1 per tick down to 1 and resets here whenever food is eaten.
pub const MAX_SCORE_INCREMENT: u32 = 55;

/// Score thresholds that escalate the board presentation. Crossing the
/// highest one also disables wall collisions for the rest of the session.
pub const SCORE_3D: u32 = 450;
pub const SCORE_ROTATE: u32 = 720;
pub const SCORE_SPIN: u32 = 800;

/// Most buffered direction changes kept at once. One change is consumed
/// per tick, so anything deeper only accumulates under input flooding
/// and is dropped.
pub const MAX_PENDING_DIRECTIONS: usize = 3;

/// Difficulty level selected in the menu. Determines tick rate and music.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Level {
    Slow,
    Medium,
    Fast,
}

impl Level {
    /// All levels in menu order.
    pub const ALL: [Level; 3] = [Level::Slow, Level::Medium, Level::Fast];

    /// Fixed simulation tick interval for this level.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        match self {
            Level::Slow => Duration::from_millis(140),
            Level::Medium => Duration::from_millis(85),
            Level::Fast => Duration::from_millis(45),
        }
    }

    /// Menu key and display digit (1 = slow, 3 = fast).
    #[must_use]
    pub fn digit(self) -> char {
        match self {
            Level::Slow => '1',
            Level::Medium => '2',
            Level::Fast => '3',
        }
    }

    /// Display name used in the menu and the game-over screen.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Level::Slow => "Slow",
            Level::Medium => "Medium",
            Level::Fast => "Fast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Level};

    #[test]
    fn playable_cells_excludes_wall_band_while_walls_are_up() {
        let board = Board::new(15, 14);
        assert_eq!(board.total_cells(), 210);
        assert_eq!(board.playable_cells(true), 13 * 12);
        assert_eq!(board.playable_cells(false), 210);
    }

    #[test]
    #[should_panic(expected = "board dimensions must be positive")]
    fn zero_dimension_board_is_rejected() {
        let _ = Board::new(0, 14);
    }

    #[test]
    fn faster_levels_tick_faster() {
        assert!(Level::Fast.tick_interval() < Level::Medium.tick_interval());
        assert!(Level::Medium.tick_interval() < Level::Slow.tick_interval());
    }
}
