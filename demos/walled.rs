use grid_astar::{path_cost, PathSearch, Point, SearchGrid};

// A 30x30 room with a few walls in it. The outer ring is blocked, and the components are
// generated up front so that unreachable targets are rejected without searching.

fn set_rectangle(grid: &mut SearchGrid, x: i32, y: i32, w: i32, h: i32, blocked: bool) {
    for x in x..x + w {
        for y in y..y + h {
            grid.set_blocked(Point::new(x, y), blocked).unwrap();
        }
    }
}

fn main() {
    const N: i32 = 30;
    let mut grid = SearchGrid::new(N, N).unwrap();
    set_rectangle(&mut grid, 0, 0, N, N, true);
    set_rectangle(&mut grid, 1, 1, N - 2, N - 2, false);
    set_rectangle(&mut grid, 8, 8, 8, 8, true);
    set_rectangle(&mut grid, 0, 3, 6, 6, true);
    set_rectangle(&mut grid, 10, 0, 6, 6, true);
    grid.update();

    let search = PathSearch {
        component_precheck: true,
    };
    let start = Point::new(1, 1);
    let end = Point::new(N - 3, N - 3);
    match search.search(&grid, start, end).unwrap() {
        Some(path) => {
            print!("{}", grid.render_path(&path, &start, &end));
            println!("{} points, cost {}", path.len(), path_cost(&path));
        }
        None => println!("No path from {:?} to {:?}", start, end),
    }
}
