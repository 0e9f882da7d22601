//! A* search over a [SearchGrid] using [MinHeap] as the frontier.
//!
//! The frontier holds at most one entry per point: when a cheaper way to reach a point that is
//! already open is found, that entry is updated in place and the heap is rebuilt, instead of
//! pushing a second entry. Popped nodes are moved into the closed map, whose insertion index
//! doubles as the parent link of the nodes they open.
use crate::error::Result;
use crate::grid::SearchGrid;
use crate::heap::MinHeap;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::{debug, info, trace, warn};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Squared Euclidean distance between `p` and `target`.
///
/// This grows quadratically while the step costs grow linearly, so it overestimates long
/// distances and the search is not guaranteed to return the cheapest path.
pub fn heuristic(p: &Point, target: &Point) -> i64 {
    let dx = i64::from(p.x) - i64::from(target.x);
    let dy = i64::from(p.y) - i64::from(target.y);
    dx * dx + dy * dy
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub point: Point,
    /// Index of the parent in the closed map, [None] for the start node.
    pub parent: Option<usize>,
    pub g: i32,
    pub h: i64,
    /// `g + h`, the key the frontier is ordered by.
    pub f: i64,
}

impl SearchNode {
    fn root(point: Point) -> SearchNode {
        SearchNode {
            point,
            parent: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }
}

fn lower_f(a: &SearchNode, b: &SearchNode) -> bool {
    a.f < b.f
}

/// Everything a single search run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// The path from the end back to the start, both inclusive.
    pub path: Option<Vec<Point>>,
    /// Accumulated cost `g` of the end node.
    pub cost: Option<i32>,
    /// Points in the order in which they were closed.
    pub expanded: Vec<Point>,
    /// Largest number of nodes held by the frontier at once.
    pub max_open: usize,
}

/// Runs searches on a [SearchGrid]. Every run owns its frontier and closed set, so a single
/// [PathSearch] can be reused for any number of searches.
#[derive(Clone, Debug, Default)]
pub struct PathSearch {
    /// Consult the grid's connected components before searching and return early if the end
    /// cannot be reached. Ignored while the components are dirty.
    pub component_precheck: bool,
}

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch {
            component_precheck: false,
        }
    }

    /// Computes a path from `start` to `end`, returned from the end back to the start.
    /// `Ok(None)` means no path exists.
    ///
    /// If `start` or `end` is a blocker no path exists. Fails with
    /// [InvalidInput](crate::Error::InvalidInput) if either lies outside the grid.
    pub fn search(
        &self,
        grid: &SearchGrid,
        start: Point,
        end: Point,
    ) -> Result<Option<Vec<Point>>> {
        self.search_report(grid, start, end).map(|report| report.path)
    }

    /// Like [search](Self::search), but also returns the cost of the path and how the search
    /// explored the grid.
    pub fn search_report(
        &self,
        grid: &SearchGrid,
        start: Point,
        end: Point,
    ) -> Result<SearchReport> {
        grid.check_bounds(&start, "start")?;
        grid.check_bounds(&end, "end")?;
        if grid.is_blocked(&start) || grid.is_blocked(&end) {
            info!("{} or {} is blocked, no path exists", start, end);
            return Ok(SearchReport::default());
        }
        let precheck = self.component_precheck && !grid.components_dirty;
        if precheck && grid.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            return Ok(SearchReport::default());
        }
        if self.component_precheck && grid.components_dirty {
            debug!("Components are dirty, skipping reachability check");
        }

        let mut open = MinHeap::new(vec![SearchNode::root(start)], lower_f);
        let mut closed: FxIndexMap<Point, SearchNode> = FxIndexMap::default();
        let mut max_open = open.len();

        while !open.is_empty() {
            let curr = open.pop()?;
            if curr.point == end {
                let path = reconstruct_path(&closed, curr);
                info!(
                    "Found path from {} to {} with {} points and cost {}",
                    start,
                    end,
                    path.len(),
                    curr.g
                );
                debug!("Closed {} points, frontier peaked at {}", closed.len(), max_open);
                return Ok(SearchReport {
                    path: Some(path),
                    cost: Some(curr.g),
                    expanded: closed.into_keys().collect(),
                    max_open,
                });
            }
            let (curr_ix, _) = closed.insert_full(curr.point, curr);
            trace!("Expanding {} (g: {}, f: {})", curr.point, curr.g, curr.f);

            for (point, step_cost) in grid.neighbours(&curr.point) {
                if closed.contains_key(&point) {
                    continue;
                }
                let g = curr.g + step_cost;
                let h = heuristic(&point, &end);
                let f = i64::from(g) + h;
                match open.position(|node| node.point == point) {
                    Some(ix) => {
                        let node = open.peek_at_mut(ix)?;
                        if node.g > g {
                            node.g = g;
                            node.h = h;
                            node.f = f;
                            node.parent = Some(curr_ix);
                            open.fix();
                        }
                    }
                    None => open.push(SearchNode {
                        point,
                        parent: Some(curr_ix),
                        g,
                        h,
                        f,
                    }),
                }
            }
            max_open = max_open.max(open.len());
        }

        if precheck {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        }
        info!("No path from {} to {} after closing {} points", start, end, closed.len());
        Ok(SearchReport {
            path: None,
            cost: None,
            expanded: closed.into_keys().collect(),
            max_open,
        })
    }
}

/// Follows the parent links from `node` back to the start node.
fn reconstruct_path(closed: &FxIndexMap<Point, SearchNode>, node: SearchNode) -> Vec<Point> {
    std::iter::successors(Some(node), |n| {
        n.parent
            .and_then(|ix| closed.get_index(ix))
            .map(|(_, parent)| *parent)
    })
    .map(|n| n.point)
    .collect()
}
