use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{PathSearch, Point, SearchGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: i32, density: f64, rng: &mut StdRng) -> SearchGrid {
    let mut grid = SearchGrid::new(n, n).unwrap();
    for x in 0..n {
        for y in 0..n {
            grid.set_blocked(Point::new(x, y), rng.gen_bool(density))
                .unwrap();
        }
    }
    grid.update();
    grid
}

fn random_scenarios(grid: &SearchGrid, count: usize, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let n = grid.col();
    let mut scenarios = Vec::new();
    while scenarios.len() < count {
        let start = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        let end = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        if grid.reachable(&start, &end) {
            scenarios.push((start, end));
        }
    }
    scenarios
}

fn search_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for (n, density) in [(16, 0.2), (32, 0.2), (32, 0.35)] {
        let grid = random_grid(n, density, &mut rng);
        let scenarios = random_scenarios(&grid, 20, &mut rng);
        for (name, search) in [
            ("plain", PathSearch::new()),
            (
                "precheck",
                PathSearch {
                    component_precheck: true,
                },
            ),
        ] {
            c.bench_function(format!("{n}x{n}, density {density}, {name}").as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(search.search(&grid, *start, *end).unwrap());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
