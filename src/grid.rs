use crate::error::{Error, Result};
use crate::step::Step;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

pub const N_SMALLVEC_SIZE: usize = 8;

/// [SearchGrid] holds the bounds `[0, col) x [0, row)` and the set of blocked points the search
/// runs on. Connected components are maintained in a [UnionFind] structure, using the same move
/// rules as the search, so that unreachable targets can be recognised without flood-filling.
/// The components are only built by [generate_components](Self::generate_components).
#[derive(Clone, Debug)]
pub struct SearchGrid {
    col: i32,
    row: i32,
    cells: usize,
    blockers: FxHashSet<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl SearchGrid {
    /// An empty grid. Fails if either dimension is not positive or the number of cells does not
    /// fit in a [usize].
    pub fn new(col: i32, row: i32) -> Result<SearchGrid> {
        if col <= 0 || row <= 0 {
            return Err(Error::InvalidInput(format!(
                "grid dimensions must be positive, got {col}x{row}"
            )));
        }
        let cells = (col as usize).checked_mul(row as usize).ok_or_else(|| {
            Error::InvalidInput(format!("a {col}x{row} grid has too many cells"))
        })?;
        Ok(SearchGrid {
            col,
            row,
            cells,
            blockers: FxHashSet::default(),
            components: UnionFind::new(0),
            components_dirty: true,
        })
    }

    /// A grid with the given points blocked. Every blocker has to lie inside the grid.
    pub fn with_blockers<I>(col: i32, row: i32, blockers: I) -> Result<SearchGrid>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut grid = SearchGrid::new(col, row)?;
        for p in blockers {
            grid.check_bounds(&p, "blocker")?;
            grid.blockers.insert(p);
        }
        Ok(grid)
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn in_bounds(&self, p: &Point) -> bool {
        p.x >= 0 && p.x < self.col && p.y >= 0 && p.y < self.row
    }

    pub(crate) fn check_bounds(&self, p: &Point, what: &str) -> Result<()> {
        if self.in_bounds(p) {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "{what} {p} lies outside of the {}x{} grid",
                self.col, self.row
            )))
        }
    }

    pub fn is_blocked(&self, p: &Point) -> bool {
        self.blockers.contains(p)
    }

    pub fn blockers(&self) -> impl Iterator<Item = &Point> {
        self.blockers.iter()
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> Result<()> {
        self.check_bounds(&p, "point")?;
        if blocked {
            if self.blockers.insert(p) {
                self.components_dirty = true;
            }
        } else if self.blockers.remove(&p) && !self.components_dirty {
            let ix = self.get_ix_point(&p);
            for (n, _) in self.neighbours(&p) {
                let n_ix = self.get_ix_point(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// Flips the blocked state of `p` and returns the new state.
    pub fn toggle_blocked(&mut self, p: Point) -> Result<bool> {
        let blocked = !self.is_blocked(&p);
        self.set_blocked(p, blocked)?;
        Ok(blocked)
    }

    pub fn clear_blockers(&mut self) {
        if !self.blockers.is_empty() {
            self.blockers.clear();
            self.components_dirty = true;
        }
    }

    /// The points reachable from `p` in a single move, paired with the cost of that move.
    ///
    /// A move is dropped if it leaves the grid or ends on a blocker. A diagonal move is also
    /// dropped if both orthogonal moves sharing its axes end on a blocker; leaving the grid does
    /// not count as blocked for this rule.
    pub fn neighbours(&self, p: &Point) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        let mut blocked = [false; 4];
        let mut result = SmallVec::new();
        for step in Step::ALL {
            let n = step.apply(p);
            if !self.in_bounds(&n) {
                continue;
            }
            if self.blockers.contains(&n) {
                if let Some(i) = step.orthogonal_index() {
                    blocked[i] = true;
                }
                continue;
            }
            if let Some((a, b)) = step.axes() {
                let a_blocked = a.orthogonal_index().is_some_and(|i| blocked[i]);
                let b_blocked = b.orthogonal_index().is_some_and(|i| blocked[i]);
                if a_blocked && b_blocked {
                    continue;
                }
            }
            result.push((n, step.cost()));
        }
        result
    }

    fn get_ix_point(&self, p: &Point) -> usize {
        p.y as usize * self.col as usize + p.x as usize
    }

    /// Retrieves the component id a given [Point] belongs to, [None] if the point lies outside
    /// the grid or the components are dirty.
    pub fn get_component(&self, p: &Point) -> Option<usize> {
        if self.components_dirty || !self.in_bounds(p) {
            return None;
        }
        Some(self.components.find(self.get_ix_point(p)))
    }

    /// Checks if start and goal are on the same component. Blocked or out of bounds points are
    /// never reachable. While the components are dirty any other pair counts as reachable.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.in_bounds(start)
            || !self.in_bounds(goal)
            || self.is_blocked(start)
            || self.is_blocked(goal)
        {
            true
        } else if self.components_dirty {
            false
        } else {
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.cells);
        self.components_dirty = false;
        for y in 0..self.row {
            for x in 0..self.col {
                let p = Point::new(x, y);
                if self.is_blocked(&p) {
                    continue;
                }
                let ix = self.get_ix_point(&p);
                for (n, _) in self.neighbours(&p) {
                    let n_ix = self.get_ix_point(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Renders the grid with a path drawn over it: `S` and `E` mark the ends, `*` the points in
    /// between, `#` the blockers.
    pub fn render_path(&self, path: &[Point], start: &Point, end: &Point) -> String {
        let mut out = String::new();
        for y in 0..self.row {
            for x in 0..self.col {
                let p = Point::new(x, y);
                let c = if p == *start {
                    'S'
                } else if p == *end {
                    'E'
                } else if self.is_blocked(&p) {
                    '#'
                } else if path.contains(&p) {
                    '*'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.row {
            let line = (0..self.col)
                .map(|x| {
                    if self.is_blocked(&Point::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
