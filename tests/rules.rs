use grid_snake::config::{CELL_SIZE, DEAD_COLOR, SNAKE_COLOR, TICK_THRESHOLD};
use grid_snake::state::is_touching_wall;
use grid_snake::{Cell, Color, DeathCause, Direction, GameState, Grid, Role, Snake, TickOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn segment(x: i32, y: i32, role: Role) -> Cell {
    Cell::new(x, y, CELL_SIZE, role, SNAKE_COLOR)
}

fn apple_at(x: i32, y: i32) -> Cell {
    Cell::new(x, y, CELL_SIZE, Role::Apple, Color::Green)
}

fn horizontal_snake(head_x: i32, y: i32) -> Snake {
    Snake::from_segments(vec![
        segment(head_x, y, Role::Head),
        segment(head_x - CELL_SIZE, y, Role::Body),
        segment(head_x - 2 * CELL_SIZE, y, Role::Tail),
    ])
}

fn positions(state: &GameState) -> Vec<(i32, i32)> {
    state.snake().body().iter().map(|c| c.position()).collect()
}

#[test]
fn first_tick_moves_snake_up_one_cell() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = GameState::from_parts(Grid::generate(), Snake::generate(), apple_at(0, 0));

    let mut outcome = None;
    for _ in 0..TICK_THRESHOLD {
        outcome = state.update(&mut rng);
    }

    assert!(matches!(outcome, Some(TickOutcome::Moved { .. })));
    assert_eq!(positions(&state), vec![(360, 405), (360, 360), (360, 315)]);
}

#[test]
fn eating_apple_grows_snake_and_relocates_apple() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut state = GameState::from_parts(Grid::generate(), Snake::generate(), apple_at(360, 405));

    let outcome = state.tick(&mut rng);

    assert!(matches!(outcome, TickOutcome::Ate { .. }));
    assert_eq!(state.snake().len(), 4);
    assert_eq!(
        positions(&state),
        vec![(360, 405), (360, 360), (360, 315), (315, 315)]
    );
    assert_eq!(state.snake().body()[2].role, Role::Body);
    assert_eq!(state.snake().tail().role, Role::Tail);
    assert!(!state.snake().occupies(state.apple()));
    assert!(!state.is_dead());
}

#[test]
fn reaching_right_edge_is_fatal() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut state = GameState::from_parts(Grid::generate(), horizontal_snake(675, 360), apple_at(0, 0));
    state.set_direction(Direction::Right);

    assert_eq!(state.tick(&mut rng), TickOutcome::Died(DeathCause::Wall));
    assert_eq!(state.snake().head().position(), (720, 360));
    assert!(state.is_dead());
    assert!(state.snake().body().iter().all(|c| c.color == DEAD_COLOR));
    assert!(!is_touching_wall(&segment(719, 360, Role::Head)));
}

#[test]
fn top_edge_allows_exactly_screen_height() {
    let mut rng = StdRng::seed_from_u64(10);
    let snake = Snake::from_segments(vec![
        segment(360, 675, Role::Head),
        segment(360, 630, Role::Body),
        segment(360, 585, Role::Tail),
    ]);
    let mut state = GameState::from_parts(Grid::generate(), snake, apple_at(0, 0));

    assert!(matches!(state.tick(&mut rng), TickOutcome::Moved { .. }));
    assert_eq!(state.snake().head().position(), (360, 720));
    assert!(!state.is_dead());

    assert_eq!(state.tick(&mut rng), TickOutcome::Died(DeathCause::Wall));
    assert_eq!(state.snake().head().position(), (360, 765));
}

#[test]
fn left_and_bottom_edges_kill_below_zero() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = GameState::from_parts(Grid::generate(), horizontal_snake(90, 0), apple_at(720, 720));
    state.set_direction(Direction::Down);

    assert_eq!(state.tick(&mut rng), TickOutcome::Died(DeathCause::Wall));
    assert_eq!(state.snake().head().position(), (90, -45));
}

#[test]
fn reversing_runs_into_own_body() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut state = GameState::from_parts(Grid::generate(), Snake::generate(), apple_at(0, 0));
    state.set_direction(Direction::Down);

    assert_eq!(state.tick(&mut rng), TickOutcome::Died(DeathCause::SelfCollision));
    assert_eq!(state.death(), Some(DeathCause::SelfCollision));
}

#[test]
fn dead_snake_never_moves_again() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut state = GameState::from_parts(Grid::generate(), horizontal_snake(675, 360), apple_at(0, 0));
    state.set_direction(Direction::Right);
    state.tick(&mut rng);
    let frozen = positions(&state);

    state.set_direction(Direction::Left);
    for _ in 0..TICK_THRESHOLD * 4 {
        assert_eq!(state.update(&mut rng), None);
    }
    assert_eq!(state.tick(&mut rng), TickOutcome::Died(DeathCause::Wall));
    assert_eq!(positions(&state), frozen);
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::Left => Direction::Right,
        Direction::Right => Direction::Left,
    }
}

#[test]
fn random_play_keeps_tick_invariants() {
    const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(&mut rng);

        for _ in 0..2_000 {
            if rng.gen_bool(0.2) {
                let next = DIRECTIONS[rng.gen_range(0..4)];
                if next != opposite(state.direction()) {
                    state.set_direction(next);
                }
            }

            let old_len = state.snake().len();
            let old_head = state.snake().head().position();
            let (dx, dy) = state.direction().delta();

            let outcome = state.tick(&mut rng);
            assert_eq!(state.snake().head().position(), (old_head.0 + dx, old_head.1 + dy));

            match outcome {
                TickOutcome::Moved { .. } => {
                    assert_eq!(state.snake().len(), old_len);
                    let mut seen = positions(&state);
                    seen.sort_unstable();
                    seen.dedup();
                    assert_eq!(seen.len(), state.snake().len(), "segments overlap without a collision");
                }
                TickOutcome::Ate { .. } => {
                    assert_eq!(state.snake().len(), old_len + 1);
                    assert!(!state.snake().occupies(state.apple()));
                }
                TickOutcome::Died(_) => {
                    assert_eq!(state.snake().len(), old_len);
                    break;
                }
            }
        }
    }
}
