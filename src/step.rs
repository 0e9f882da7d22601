use crate::{DIAGONAL_COST, ORTHOGONAL_COST};
use grid_util::point::Point;

/// The eight unit moves on the grid. `y` grows downwards, so [Step::Top] decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Step {
    /// Expansion order of the search. The orthogonal moves come first so that their blocked
    /// state is known before any diagonal is considered.
    pub const ALL: [Step; 8] = [
        Step::Top,
        Step::Right,
        Step::Bottom,
        Step::Left,
        Step::TopRight,
        Step::BottomRight,
        Step::BottomLeft,
        Step::TopLeft,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Step::Top => (0, -1),
            Step::Right => (1, 0),
            Step::Bottom => (0, 1),
            Step::Left => (-1, 0),
            Step::TopRight => (1, -1),
            Step::BottomRight => (1, 1),
            Step::BottomLeft => (-1, 1),
            Step::TopLeft => (-1, -1),
        }
    }

    pub fn diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// The two orthogonal moves sharing an axis with a diagonal move, [None] for orthogonal moves.
    pub fn axes(self) -> Option<(Step, Step)> {
        match self {
            Step::TopRight => Some((Step::Top, Step::Right)),
            Step::BottomRight => Some((Step::Bottom, Step::Right)),
            Step::BottomLeft => Some((Step::Bottom, Step::Left)),
            Step::TopLeft => Some((Step::Top, Step::Left)),
            _ => None,
        }
    }

    /// Index of an orthogonal move into [Step::ALL].
    pub(crate) fn orthogonal_index(self) -> Option<usize> {
        match self {
            Step::Top => Some(0),
            Step::Right => Some(1),
            Step::Bottom => Some(2),
            Step::Left => Some(3),
            _ => None,
        }
    }

    pub fn cost(self) -> i32 {
        if self.diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }

    pub fn apply(self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }

    /// The move leading from `from` to the adjacent `to`, if they are adjacent.
    pub fn between(from: &Point, to: &Point) -> Option<Step> {
        let delta = (to.x - from.x, to.y - from.y);
        Step::ALL.into_iter().find(|s| s.delta() == delta)
    }
}
