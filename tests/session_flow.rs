use snk::config::{Board, Level, MAX_SCORE_INCREMENT};
use snk::game::{GameEvent, GameSession, GameState, Outcome};
use snk::grid::Cell;
use snk::input::Direction;

fn new_session() -> GameSession {
    let mut session = GameSession::new_with_seed(Level::Medium, Board::new(15, 14), 42);
    session.begin();
    // Keep the food away from the paths these tests walk.
    session.grid.set_food(Cell { x: 5, y: 3 });
    session
}

#[test]
fn straight_run_into_the_right_wall_crashes_on_tick_twelve() {
    let mut session = new_session();
    assert_eq!(session.grid.head(), Cell { x: 2, y: 7 });

    // Eleven ticks of open corridor: (3,7) through (13,7).
    for tick in 1..=11 {
        let events = session.tick();
        assert!(events.is_empty(), "unexpected events on tick {tick}");
        assert_eq!(session.state, GameState::Playing);
        assert_eq!(session.grid.head(), Cell { x: 2 + tick, y: 7 });
    }

    // Tick 12 reaches x = 14, the right wall column.
    let events = session.tick();
    assert_eq!(events, vec![GameEvent::Crashed]);
    assert_eq!(session.state, GameState::Crashed);
    assert_eq!(session.grid.head(), Cell { x: 14, y: 7 });
    assert_eq!(session.outcome(), Some(Outcome::Crashed));

    // The crash frame holds for one tick, then the session is over.
    let events = session.tick();
    assert_eq!(events, vec![GameEvent::GameOver]);
    assert!(session.is_over());
}

#[test]
fn eating_food_grows_by_one_and_resets_the_increment() {
    let mut session = new_session();
    session
        .grid
        .set_snake(vec![Cell { x: 2, y: 7 }, Cell { x: 3, y: 7 }]);
    session.grid.set_food(Cell { x: 4, y: 7 });

    let events = session.tick();

    assert!(events.contains(&GameEvent::FoodEaten));
    assert_eq!(session.grid.snake_len(), 3);
    assert_eq!(session.grid.head(), Cell { x: 4, y: 7 });
    let segments: Vec<Cell> = session.grid.segments().copied().collect();
    assert_eq!(
        segments,
        vec![
            Cell { x: 2, y: 7 },
            Cell { x: 3, y: 7 },
            Cell { x: 4, y: 7 }
        ]
    );
    assert_eq!(session.score.score, MAX_SCORE_INCREMENT);
    assert_eq!(session.score.increment, MAX_SCORE_INCREMENT);
}

#[test]
fn opposite_of_a_queued_direction_is_rejected() {
    let mut session = new_session();

    // Current direction is Right. Up is legal; Down is the opposite of
    // the now-last-queued Up and must be dropped.
    session.queue_direction(Direction::Up);
    session.queue_direction(Direction::Down);

    session.tick();
    assert_eq!(session.direction(), Direction::Up);
    assert_eq!(session.grid.head(), Cell { x: 2, y: 6 });

    // Nothing else was buffered, so the snake keeps going up.
    session.tick();
    assert_eq!(session.direction(), Direction::Up);
    assert_eq!(session.grid.head(), Cell { x: 2, y: 5 });
}

#[test]
fn increment_decays_per_tick_and_floors_at_one() {
    let mut session = new_session();

    session.tick();
    assert_eq!(session.score.increment, MAX_SCORE_INCREMENT - 1);

    // Walk a 2x2 loop far from food and walls; the increment bottoms out.
    let cycle = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];
    for step in 0..120 {
        session.queue_direction(cycle[step % cycle.len()]);
        session.tick();
        assert_eq!(session.state, GameState::Playing, "crashed at step {step}");
    }

    assert_eq!(session.score.increment, 1);
    assert_eq!(session.score.score, 0);
}

#[test]
fn pause_freezes_the_simulation() {
    let mut session = new_session();

    session.toggle_pause();
    for _ in 0..5 {
        assert!(session.tick().is_empty());
    }
    assert_eq!(session.grid.head(), Cell { x: 2, y: 7 });

    session.toggle_pause();
    session.tick();
    assert_eq!(session.grid.head(), Cell { x: 3, y: 7 });
}
