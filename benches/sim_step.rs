use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridfall::core::{Board, FallingPiece, PieceShape, ShapePicker, Simulation};
use gridfall::types::{MoveIntent, TileColor};

fn bench_step(c: &mut Criterion) {
    let mut sim = Simulation::new(12345);

    c.bench_function("sim_step", |b| {
        b.iter(|| {
            sim.set_intent(black_box(MoveIntent::Left));
            sim.step();
        })
    });
}

fn bench_gated_update(c: &mut Criterion) {
    let mut sim = Simulation::new(12345);

    c.bench_function("sim_update_16ms", |b| {
        b.iter(|| {
            sim.update(black_box(16));
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    let shape = PieceShape::from_cells(&[(0, 0), (1, 0), (0, 1), (1, 1)], TileColor::Red);
    let piece = FallingPiece::at(shape, 5, 10);

    c.bench_function("piece_cells", |b| {
        b.iter(|| {
            black_box(piece.cells());
        })
    });
}

fn bench_board_clear(c: &mut Criterion) {
    let mut board = Board::new();

    c.bench_function("board_clear", |b| {
        b.iter(|| {
            board.clear();
        })
    });
}

fn bench_shape_draw(c: &mut Criterion) {
    let mut picker = ShapePicker::new(12345);

    c.bench_function("shape_draw", |b| {
        b.iter(|| {
            black_box(picker.draw());
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_gated_update,
    bench_projection,
    bench_board_clear,
    bench_shape_draw
);
criterion_main!(benches);
