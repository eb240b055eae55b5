//! Reachability search on a full star board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hexjump::core::{Coord, PieceKind, PlayerId};
use hexjump::setup::GameSetup;

fn bench_paths(c: &mut Criterion) {
    let engine = GameSetup::star(4, 6).build().unwrap();
    let origins: Vec<Coord> = engine.pieces_of(PlayerId::new(0)).collect();

    c.bench_function("paths_star_opening", |b| {
        b.iter(|| {
            for &at in &origins {
                black_box(engine.paths(at).unwrap());
            }
        })
    });

    // A dense lattice of jumpable pieces gives long chains.
    let mut setup = GameSetup::star(4, 2);
    for x in (-4..=4).step_by(2) {
        for y in (-4..=4).step_by(2) {
            let at = Coord::new(x + 1, y);
            if at.distance(Coord::ORIGIN) <= 4 {
                setup = setup.piece(at, PieceKind::Jumpable);
            }
        }
    }
    let engine = setup.build().unwrap();

    c.bench_function("paths_dense_lattice", |b| {
        b.iter(|| black_box(engine.paths(Coord::ORIGIN).unwrap()))
    });
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
