use grid_astar::{PathSearch, Point, SearchGrid};

// Prints the order in which the search closes points, the way a visualiser would animate it.

fn main() {
    let blockers = (0..6).map(|y| Point::new(4, y));
    let grid = SearchGrid::with_blockers(8, 8, blockers).unwrap();
    let start = Point::new(1, 1);
    let end = Point::new(6, 1);
    let report = PathSearch::new().search_report(&grid, start, end).unwrap();

    for (i, p) in report.expanded.iter().enumerate() {
        println!("{:>3}: {:?}", i, p);
    }
    println!("Frontier peaked at {} nodes", report.max_open);
    match report.path {
        Some(path) => {
            print!("{}", grid.render_path(&path, &start, &end));
            println!("Cost: {}", report.cost.unwrap_or_default());
        }
        None => println!("No path"),
    }
}
