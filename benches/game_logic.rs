use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{prototype, Board, GameState};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(10, 20, 12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.tick() {
                state = GameState::with_seed(10, 20, 12345);
            }
            state.drain_cues().for_each(drop);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_is_valid(c: &mut Criterion) {
    let mut board = Board::new(10, 20);
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::O));
    }
    let shape = prototype(PieceKind::T);

    c.bench_function("is_valid", |b| {
        b.iter(|| {
            for x in -1..9 {
                black_box(board.is_valid(shape, black_box(x), 17));
            }
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let shape = *prototype(PieceKind::I);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| black_box(black_box(shape).rotated_cw()))
    });
}

fn bench_apply_action(c: &mut Criterion) {
    let mut state = GameState::with_seed(10, 20, 12345);
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::Rotate,
    ];

    c.bench_function("apply_action", |b| {
        b.iter(|| {
            for action in actions {
                state.apply_action(black_box(action));
            }
            state.drain_cues().for_each(drop);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_is_valid,
    bench_rotation,
    bench_apply_action
);
criterion_main!(benches);
