//! The [`CellKind`] type — per-cell terrain and marking state.

/// Classification of a single grid cell.
///
/// Only [`Obstacle`](CellKind::Obstacle) affects walkability. The remaining
/// variants are caller-controlled markings (endpoint designations and
/// presentation annotations for path / open / closed overlays); terrain
/// queries treat them all as walkable and the search engine never reads
/// them as input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Start,
    End,
    Path,
    Open,
    Closed,
}

impl CellKind {
    /// Whether a cell of this kind can be stepped on.
    #[inline]
    pub const fn walkable(self) -> bool {
        !matches!(self, CellKind::Obstacle)
    }
}
