use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Board;
use crate::input::Direction;

/// Grid position in logical cell coordinates. Value equality.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// Snake body, food and wall state for one session.
///
/// The snake is an ordered sequence of cells with the head at the back of
/// the deque and the tail at the front. The body is non-empty for the
/// lifetime of the grid; the only transient overlap allowed is during a
/// single tick's collision check, which the controller sequences.
#[derive(Debug, Clone)]
pub struct Grid {
    board: Board,
    snake: VecDeque<Cell>,
    food: Cell,
    walls_enabled: bool,
    rng: StdRng,
}

impl Grid {
    /// Creates a grid with the snake starting two cells in from the left,
    /// halfway down the board, and food placed randomly off the snake.
    #[must_use]
    pub fn new_with_seed(board: Board, walls_enabled: bool, seed: u64) -> Self {
        let start = Cell {
            x: 2,
            y: board.rows / 2,
        };
        let mut snake = VecDeque::new();
        snake.push_back(start);

        let mut grid = Self {
            board,
            snake,
            food: start,
            walls_enabled,
            rng: StdRng::seed_from_u64(seed),
        };
        grid.place_food();
        grid
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    #[must_use]
    pub fn walls_enabled(&self) -> bool {
        self.walls_enabled
    }

    /// Permanently disables wall collisions; the head wraps at board
    /// edges from now on. Triggered by the spin escalation.
    pub fn disable_walls(&mut self) {
        self.walls_enabled = false;
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .snake
            .back()
            .expect("snake body must always contain at least one cell")
    }

    /// Computes the head cell one step in `direction`.
    ///
    /// With walls disabled the coordinates wrap modulo the board; with
    /// walls enabled out-of-bounds cells are returned as-is and show up
    /// as wall collisions at the caller.
    #[must_use]
    pub fn advance_head(&self, direction: Direction) -> Cell {
        let head = self.head();
        let mut next = match direction {
            Direction::Up => Cell {
                x: head.x,
                y: head.y - 1,
            },
            Direction::Down => Cell {
                x: head.x,
                y: head.y + 1,
            },
            Direction::Left => Cell {
                x: head.x - 1,
                y: head.y,
            },
            Direction::Right => Cell {
                x: head.x + 1,
                y: head.y,
            },
        };

        if !self.walls_enabled {
            next.x = wrap_axis(next.x, self.board.cols);
            next.y = wrap_axis(next.y, self.board.rows);
        }
        next
    }

    /// Returns true when `cell` lies on the wall band (walls enabled) or
    /// on the snake body as it stands right now.
    #[must_use]
    pub fn is_collision(&self, cell: Cell) -> bool {
        if self.walls_enabled && self.is_wall(cell) {
            return true;
        }
        self.snake.contains(&cell)
    }

    /// Returns true when `cell` is on the 1-cell border band.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        cell.x <= 0 || cell.x >= self.board.cols - 1 || cell.y <= 0 || cell.y >= self.board.rows - 1
    }

    /// Equality check against the current food cell.
    #[must_use]
    pub fn is_food_at(&self, cell: Cell) -> bool {
        self.food == cell
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    /// Appends `cell` as the new head without touching the tail.
    pub fn grow_head(&mut self, cell: Cell) {
        self.snake.push_back(cell);
    }

    /// Removes the tail cell. Called before the collision check on a
    /// normal move so the head cannot falsely collide with the cell the
    /// tail is vacating this tick.
    pub fn remove_tail(&mut self) {
        let _ = self.snake.pop_front();
    }

    /// Places food on a uniformly random free cell.
    ///
    /// Picks one random candidate inside the playable area, then on
    /// conflict scans forward cell by cell (row-major, wrapping) to the
    /// next free cell instead of re-sampling. Keeps placement O(1)
    /// amortized even when free space is nearly gone.
    pub fn place_food(&mut self) {
        let (x_min, y_min) = if self.walls_enabled { (1, 1) } else { (0, 0) };
        let x_max = if self.walls_enabled {
            self.board.cols - 2
        } else {
            self.board.cols - 1
        };
        let y_max = if self.walls_enabled {
            self.board.rows - 2
        } else {
            self.board.rows - 1
        };

        debug_assert!(
            self.snake.len() < self.board.playable_cells(self.walls_enabled),
            "place_food called with no free cells"
        );

        let mut x = self.rng.gen_range(x_min..=x_max);
        let mut y = self.rng.gen_range(y_min..=y_max);

        while self.snake.contains(&Cell { x, y }) {
            x += 1;
            if x > x_max {
                x = x_min;
                y += 1;
                if y > y_max {
                    y = y_min;
                }
            }
        }

        self.food = Cell { x, y };
    }

    /// Returns true when the snake covers every playable cell.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.snake.len() >= self.board.playable_cells(self.walls_enabled)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Iterates over body cells from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.snake.iter()
    }

    /// Replaces the snake body (back is head). Deterministic-test
    /// scaffolding; panics on an empty body.
    pub fn set_snake(&mut self, cells: Vec<Cell>) {
        assert!(!cells.is_empty(), "snake body must be non-empty");
        self.snake = VecDeque::from(cells);
    }

    /// Pins the food cell. Deterministic-test scaffolding.
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    if value > upper_bound - 1 {
        0
    } else if value < 0 {
        upper_bound - 1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Board;
    use crate::input::Direction;

    use super::{Cell, Grid};

    fn test_grid(walls: bool) -> Grid {
        Grid::new_with_seed(Board::new(15, 14), walls, 7)
    }

    #[test]
    fn snake_starts_two_in_from_the_left_halfway_down() {
        let grid = test_grid(true);
        assert_eq!(grid.head(), Cell { x: 2, y: 7 });
        assert_eq!(grid.snake_len(), 1);
    }

    #[test]
    fn advance_head_does_not_wrap_while_walls_are_up() {
        let mut grid = test_grid(true);
        grid.set_snake(vec![Cell { x: 14, y: 7 }]);

        let next = grid.advance_head(Direction::Right);
        assert_eq!(next, Cell { x: 15, y: 7 });
        assert!(grid.is_collision(next));
    }

    #[test]
    fn advance_head_wraps_on_both_axes_once_walls_are_down() {
        let mut grid = test_grid(false);

        grid.set_snake(vec![Cell { x: 14, y: 7 }]);
        assert_eq!(grid.advance_head(Direction::Right), Cell { x: 0, y: 7 });

        grid.set_snake(vec![Cell { x: 4, y: 0 }]);
        assert_eq!(grid.advance_head(Direction::Up), Cell { x: 4, y: 13 });
    }

    #[test]
    fn border_band_collides_only_while_walls_are_up() {
        let mut grid = test_grid(true);
        assert!(grid.is_collision(Cell { x: 0, y: 5 }));
        assert!(grid.is_collision(Cell { x: 14, y: 5 }));
        assert!(grid.is_collision(Cell { x: 5, y: 0 }));
        assert!(grid.is_collision(Cell { x: 5, y: 13 }));
        assert!(!grid.is_collision(Cell { x: 5, y: 5 }));

        grid.disable_walls();
        assert!(!grid.is_collision(Cell { x: 0, y: 5 }));
    }

    #[test]
    fn body_cells_collide() {
        let mut grid = test_grid(true);
        grid.set_snake(vec![
            Cell { x: 3, y: 3 },
            Cell { x: 4, y: 3 },
            Cell { x: 5, y: 3 },
        ]);

        assert!(grid.is_collision(Cell { x: 4, y: 3 }));
        assert!(!grid.is_collision(Cell { x: 6, y: 3 }));
    }

    #[test]
    fn food_is_never_placed_on_snake_or_wall() {
        let mut grid = test_grid(true);
        grid.set_snake(vec![
            Cell { x: 1, y: 1 },
            Cell { x: 2, y: 1 },
            Cell { x: 3, y: 1 },
        ]);

        for _ in 0..200 {
            grid.place_food();
            let food = grid.food();
            assert!(!grid.is_wall(food), "food on wall at {food:?}");
            assert!(!grid.segments().any(|c| *c == food), "food on snake");
        }
    }

    #[test]
    fn conflicting_placement_scans_to_next_free_cell() {
        let mut grid = Grid::new_with_seed(Board::new(4, 4), true, 0);
        // Playable area is 2x2; occupy three of the four cells.
        grid.set_snake(vec![
            Cell { x: 1, y: 1 },
            Cell { x: 2, y: 1 },
            Cell { x: 1, y: 2 },
        ]);

        grid.place_food();
        assert_eq!(grid.food(), Cell { x: 2, y: 2 });
    }

    #[test]
    fn board_full_accounts_for_wall_state() {
        let mut grid = Grid::new_with_seed(Board::new(4, 4), true, 0);
        grid.set_snake(vec![
            Cell { x: 1, y: 1 },
            Cell { x: 2, y: 1 },
            Cell { x: 1, y: 2 },
            Cell { x: 2, y: 2 },
        ]);

        assert!(grid.is_board_full());
        grid.disable_walls();
        assert!(!grid.is_board_full());
    }
}
