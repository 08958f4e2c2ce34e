//! Performance benchmarks for the game engines.
//!
//! Run with: cargo bench
//!
//! Neither engine is performance-critical at 150 ms per tick, but the
//! numbers catch accidental regressions (e.g. food placement going
//! quadratic).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use grid_games::{Direction, Engine, GameRng, Outcome, Snake, SnakeConfig, SnakeEvent, TicTacToe};

/// Play one full tic-tac-toe game with uniformly random legal moves.
fn random_playout(game: &TicTacToe, rng: &mut GameRng) -> Outcome {
    let mut state = game.reset();

    while !game.is_terminal(&state) {
        let moves = game.legal_moves(&state);
        let index = moves[rng.gen_range_usize(0..moves.len())];
        game.apply_move(&mut state, index);
    }

    state.outcome()
}

fn bench_tictactoe_playout(c: &mut Criterion) {
    let game = TicTacToe::new();
    let mut rng = GameRng::new(42);

    c.bench_function("tictactoe_random_playout", |b| {
        b.iter(|| black_box(random_playout(&game, &mut rng)))
    });
}

fn bench_snake_run(c: &mut Criterion) {
    let snake = Snake::new(SnakeConfig::default());

    let mut group = c.benchmark_group("snake_run");
    for ticks in [100u32, 1000] {
        group.throughput(Throughput::Elements(u64::from(ticks)));
        group.bench_with_input(BenchmarkId::from_parameter(ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let mut state = snake.reset(42);

                // Staircase across the board: turns, wraps, and the
                // occasional meal, without ever self-colliding.
                for i in 0..ticks {
                    if i % 7 == 0 {
                        let turn = if (i / 7) % 2 == 0 {
                            Direction::Down
                        } else {
                            Direction::Right
                        };
                        snake.apply(&mut state, SnakeEvent::Turn(turn));
                    }
                    if !snake.apply(&mut state, SnakeEvent::Tick) {
                        break;
                    }
                }

                black_box(state.score())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tictactoe_playout, bench_snake_run);
criterion_main!(benches);
