use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Field, GameState};
use blockfall::term::compose_frame;
use blockfall::types::{Command, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let start = Instant::now();
    let mut state = GameState::new(12345, start);
    let mut now = start;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            // Start over once the pieces stack up, so every iteration runs a live tick.
            if state.is_stopped() {
                state = GameState::new(12345, now);
            }
            state.tick(black_box(None), now);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            for y in 16..20 {
                field.fill_row(y, ShapeKind::I);
            }
            field.clear_full_rows()
        })
    });
}

fn bench_spawn_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345, Instant::now());

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let start = Instant::now();
    let mut state = GameState::new(12345, start);

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.tick(Some(Command::MoveRight), start);
            state.tick(Some(Command::RotateRight), start);
            state.tick(Some(Command::MoveLeft), start);
        })
    });
}

fn bench_compose_frame(c: &mut Criterion) {
    let state = GameState::new(12345, Instant::now());

    c.bench_function("compose_frame", |b| b.iter(|| compose_frame(black_box(&state))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn_piece,
    bench_move,
    bench_compose_frame
);
criterion_main!(benches);
