/// Fuzzes the search by checking for many random grids that a path is found exactly when the goal
/// is reachable by being part of the same connected component, and that every path found only
/// takes legal moves and costs what the search reports.
use grid_astar::{path_cost, PathSearch, Point, SearchGrid, Step};
use rand::prelude::*;

fn random_grid(w: i32, h: i32, rng: &mut StdRng, density: f64) -> SearchGrid {
    let mut grid = SearchGrid::new(w, h).unwrap();
    for x in 0..w {
        for y in 0..h {
            grid.set_blocked(Point::new(x, y), rng.gen_bool(density)).unwrap();
        }
    }
    grid
}

fn random_grid_point(grid: &SearchGrid, rng: &mut StdRng) -> Point {
    Point::new(rng.gen_range(0..grid.col()), rng.gen_range(0..grid.row()))
}

fn visualize_grid(grid: &SearchGrid, start: &Point, end: &Point) {
    print!("{}", grid.render_path(&[], start, end));
}

/// Checks that consecutive points are one legal move apart.
fn assert_legal_moves(grid: &SearchGrid, path: &[Point]) {
    for pair in path.windows(2) {
        let (from, to) = (pair[1], pair[0]);
        assert!(Step::between(&from, &to).is_some(), "{from} -> {to} is not a single move");
        assert!(
            grid.neighbours(&from).iter().any(|(p, _)| *p == to),
            "{from} -> {to} is not allowed"
        );
    }
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let search = PathSearch::new();
    for density in [0.2, 0.4] {
        for _ in 0..N_GRIDS {
            let mut grid = random_grid(N, N, &mut rng, density);
            let start = Point::new(0, 0);
            let end = Point::new(N - 1, N - 1);
            grid.set_blocked(start, false).unwrap();
            grid.set_blocked(end, false).unwrap();
            grid.update();
            let reachable = grid.reachable(&start, &end);
            let path = search.search(&grid, start, end).unwrap();
            // Show the grid if a path is not found
            if path.is_some() != reachable {
                visualize_grid(&grid, &start, &end);
            }
            assert!(path.is_some() == reachable);
        }
    }
}

#[test]
fn fuzz_path_properties() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let search = PathSearch::new();
    for _ in 0..N_GRIDS {
        let (w, h) = (rng.gen_range(1..12), rng.gen_range(1..12));
        let grid = random_grid(w, h, &mut rng, 0.3);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        let report = search.search_report(&grid, start, end).unwrap();
        let Some(path) = report.path else {
            assert!(report.cost.is_none());
            continue;
        };
        assert_eq!(path.first(), Some(&end));
        assert_eq!(path.last(), Some(&start));
        assert!(path.iter().all(|p| !grid.is_blocked(p)));
        assert_legal_moves(&grid, &path);

        // Walking from the start, the accumulated cost grows with every move and ends at the
        // cost recorded for the end node.
        let forward = path.iter().rev().copied().collect::<Vec<_>>();
        let costs = (1..=forward.len())
            .map(|i| path_cost(&forward[..i]))
            .collect::<Vec<_>>();
        assert!(costs.windows(2).all(|c| c[0] < c[1]));
        assert_eq!(report.cost, Some(path_cost(&path)));

        let mut expanded = report.expanded.clone();
        expanded.sort_by_key(|p| (p.x, p.y));
        expanded.dedup();
        assert_eq!(expanded.len(), report.expanded.len());
    }
}

#[test]
fn fuzz_precheck_is_transparent() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(2);
    let plain = PathSearch::new();
    let prechecked = PathSearch {
        component_precheck: true,
    };
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(8, 8, &mut rng, 0.35);
        grid.generate_components();
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        assert_eq!(
            plain.search(&grid, start, end).unwrap(),
            prechecked.search(&grid, start, end).unwrap()
        );
    }
}
