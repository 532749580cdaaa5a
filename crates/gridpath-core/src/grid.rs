//! The [`Grid`] type — a fixed-size 2D field of [`CellKind`]s.
//!
//! A `Grid` owns its cells outright. Dimensions are fixed at construction;
//! cell kinds may be mutated freely between searches. All queries fail
//! closed: out-of-range reads report [`CellKind::Obstacle`], out-of-range
//! writes are no-ops.

use crate::cell::CellKind;
use crate::pos::Position;

/// Neighbor direction table: cardinal first, then diagonal.
///
/// The order is fixed so that neighbor enumeration, and therefore search
/// expansion order, is deterministic.
const DIRS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed `width × height` grid of [`CellKind`]s with optional designated
/// endpoints.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
    /// Designated start cell, if any.
    pub start: Option<Position>,
    /// Designated end cell, if any.
    pub end: Option<Position>,
}

impl Grid {
    /// Create a new grid of the given dimensions, all cells
    /// [`CellKind::Empty`]. Negative dimensions clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![CellKind::default(); (w as usize) * (h as usize)],
            start: None,
            end: None,
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a position (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Position {
        Position::new(self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if self.is_valid(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Whether `p` lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn is_valid(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` can be stepped on: in bounds and not an obstacle.
    #[inline]
    pub fn is_walkable(&self, p: Position) -> bool {
        match self.index(p) {
            Some(i) => self.cells[i].walkable(),
            None => false,
        }
    }

    /// Read the cell at `p`. Out-of-range reads report
    /// [`CellKind::Obstacle`].
    pub fn get_cell(&self, p: Position) -> CellKind {
        match self.index(p) {
            Some(i) => self.cells[i],
            None => CellKind::Obstacle,
        }
    }

    /// Set the cell at `p`. No-op if `p` is out of range.
    pub fn set_cell(&mut self, p: Position, kind: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = kind;
        }
    }

    /// Fill every cell with `kind`, leaving the endpoint designations alone.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Append the walkable neighbors of `p` into `buf`, cardinal first,
    /// then diagonal.
    ///
    /// A diagonal step is kept only if at least one of the two orthogonal
    /// cells it passes is walkable; a fully blocked corner excludes the
    /// diagonal even when the target cell itself is walkable.
    pub fn neighbors_into(&self, p: Position, buf: &mut Vec<Position>) {
        for (dx, dy) in DIRS {
            let n = p.shift(dx, dy);
            if !self.is_walkable(n) {
                continue;
            }
            if dx != 0 && dy != 0 {
                let corner_open =
                    self.is_walkable(p.shift(dx, 0)) || self.is_walkable(p.shift(0, dy));
                if !corner_open {
                    continue;
                }
            }
            buf.push(n);
        }
    }

    /// The walkable neighbors of `p` as a fresh vector.
    ///
    /// Allocating convenience wrapper around
    /// [`neighbors_into`](Grid::neighbors_into).
    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(p, &mut buf);
        buf
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2);
        g.set_cell(Position::new(1, 1), CellKind::Obstacle);
        g.start = Some(Position::new(0, 0));
        g.end = Some(Position::new(2, 1));

        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width(), 3);
        assert_eq!(back.height(), 2);
        assert_eq!(back.get_cell(Position::new(1, 1)), CellKind::Obstacle);
        assert_eq!(back.start, Some(Position::new(0, 0)));
        assert_eq!(back.end, Some(Position::new(2, 1)));
    }
}
