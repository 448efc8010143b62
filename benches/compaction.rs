use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twenty48::core::{Direction, TokenScale};
use twenty48::{compact, Board, GameBuilder};

fn bench_compact_line(c: &mut Criterion) {
    let scale = TokenScale::default();
    let lines: [[u32; 4]; 4] = [[2, 8, 4, 4], [2, 2, 2, 2], [0, 0, 0, 0], [0, 4, 0, 4]];
    c.bench_function("compact_line", |b| {
        b.iter(|| {
            for line in &lines {
                let _ = black_box(compact(black_box(line), 4, &scale));
            }
        })
    });
}

fn bench_transform(c: &mut Criterion) {
    let board = Board::from_cells(
        4,
        vec![2, 2, 4, 8, 0, 4, 4, 0, 16, 0, 16, 2, 2, 4, 8, 16],
        TokenScale::default(),
    )
    .unwrap();
    c.bench_function("transform_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                let mut copy = board.clone();
                let _ = black_box(copy.transform(dir));
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("cycle_until_over", |b| {
        b.iter(|| {
            let mut game = GameBuilder::new().seed(black_box(7)).build().unwrap();
            while !game.is_over() && game.move_count() < 2_000 {
                for dir in Direction::ALL {
                    if game.apply_direction(dir).is_err() {
                        break;
                    }
                }
            }
            black_box(game.score())
        })
    });
}

criterion_group!(benches, bench_compact_line, bench_transform, bench_full_game);
criterion_main!(benches);
