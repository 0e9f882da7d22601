//! # grid_astar
//!
//! Shortest paths on a bounded grid with 8-directional movement and point obstacles, meant to
//! drive interactive visualisations.
//!
//! The search is an [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) variant with a
//! frontier kept in a [MinHeap] that supports updating entries in place. Orthogonal moves cost
//! [ORTHOGONAL_COST], diagonal moves [DIAGONAL_COST], and a diagonal move is not allowed when
//! both orthogonal cells next to it are blocked. The heuristic is the squared Euclidean distance
//! (see [heuristic]), which favours heading straight for the target over strict optimality.
//!
//! ```
//! use grid_astar::{search, Point};
//!
//! let path = search(5, 5, Point::new(0, 0), Point::new(4, 4), []).unwrap().unwrap();
//! assert_eq!(path.first(), Some(&Point::new(4, 4)));
//! assert_eq!(path.last(), Some(&Point::new(0, 0)));
//! ```
pub mod error;
pub mod grid;
pub mod heap;
pub mod search;
pub mod step;

pub use crate::error::{Error, Result};
pub use crate::grid::SearchGrid;
pub use crate::heap::MinHeap;
pub use crate::search::{heuristic, PathSearch, SearchNode, SearchReport};
pub use crate::step::Step;
pub use grid_util::point::Point;

use itertools::Itertools;

/// Cost of a horizontal or vertical move.
pub const ORTHOGONAL_COST: i32 = 10;
/// Cost of a diagonal move, an integer approximation of `10 * sqrt(2)`.
pub const DIAGONAL_COST: i32 = 15;

/// Computes a path on a `col` x `row` grid with the given blocked points, using a default
/// [PathSearch]. The path runs from `end` back to `start`; `Ok(None)` means no path exists.
pub fn search<I>(
    col: i32,
    row: i32,
    start: Point,
    end: Point,
    blockers: I,
) -> Result<Option<Vec<Point>>>
where
    I: IntoIterator<Item = Point>,
{
    let grid = SearchGrid::with_blockers(col, row, blockers)?;
    PathSearch::new().search(&grid, start, end)
}

/// Cost of moving from `p1` to `p2` taking as many diagonal steps as possible before going
/// straight. For adjacent points this is the cost of the single move between them.
pub fn move_cost(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    let diagonal = delta_x.min(delta_y);
    DIAGONAL_COST * diagonal + ORTHOGONAL_COST * (delta_x.max(delta_y) - diagonal)
}

/// Sums the move costs along a path. Works in either direction.
pub fn path_cost(path: &[Point]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| move_cost(a, b))
        .sum()
}
