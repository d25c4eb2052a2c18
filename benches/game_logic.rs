use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{spawn_shape, Board, GameSession};
use blockfall::types::{BlockColor, PieceKind, BOARD_WIDTH, KICK_OFFSETS};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..BOARD_WIDTH as i8 {
                    board.set(x, y, Some(BlockColor::Cyan));
                }
            }
            board.sweep();
        })
    });
}

fn bench_collision_probe(c: &mut Criterion) {
    let board = Board::new();
    let shape = spawn_shape(PieceKind::T);

    c.bench_function("collision_probe_row", |b| {
        b.iter(|| {
            for x in -2..BOARD_WIDTH as i8 + 2 {
                black_box(board.collides(shape, x, 10));
            }
        })
    });
}

fn bench_ghost_probe(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("ghost_probe", |b| {
        b.iter(|| {
            black_box(session.ghost_y());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            session.move_horizontal(1);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let shape = spawn_shape(PieceKind::I);

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            let rotated = black_box(shape).rotated(true);
            for offset in KICK_OFFSETS {
                if !board.collides(rotated, 4 + offset, 0) {
                    break;
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_collision_probe,
    bench_ghost_probe,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
