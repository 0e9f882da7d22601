use grid_astar::{PathSearch, Point, SearchGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() {
    let grid = SearchGrid::with_blockers(3, 3, [Point::new(1, 1)]).unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = PathSearch::new().search(&grid, start, end).unwrap().unwrap();
    println!("Path:");
    for p in path.iter().rev() {
        println!("{:?}", p);
    }
}
