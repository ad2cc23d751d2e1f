use core::fmt;

use serde::{Deserialize, Serialize};

/// Board coordinate.
///
/// Ordering is `(x, y)` lexicographic, which is the iteration order used
/// everywhere a deterministic walk over cells is required. Coordinates are
/// signed so that neighbor arithmetic can step off the board and be rejected
/// by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Orthogonal neighbors in a fixed order: S, E, N, W.
    ///
    /// Cells are not bounds checked.
    pub const fn orthogonal(self) -> [Cell; 4] {
        [
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(-1, 0),
        ]
    }

    pub const fn diagonal(self) -> [Cell; 4] {
        [
            self.offset(1, 1),
            self.offset(1, -1),
            self.offset(-1, -1),
            self.offset(-1, 1),
        ]
    }

    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn in_board(self, board_size: u32) -> bool {
        let size = board_size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    Normal,
    Spawn,
    Obstacle,
}

impl TerrainKind {
    const fn bit(self) -> u8 {
        match self {
            TerrainKind::Normal => 1,
            TerrainKind::Spawn => 1 << 1,
            TerrainKind::Obstacle => 1 << 2,
        }
    }
}

/// Set of terrain kinds reported for one cell.
///
/// The sandbox may report more than one kind for a cell (a spawn cell is
/// usually also `normal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerrainKinds(u8);

impl TerrainKinds {
    pub const EMPTY: TerrainKinds = TerrainKinds(0);

    pub const fn only(kind: TerrainKind) -> Self {
        Self(kind.bit())
    }

    pub const fn with(self, kind: TerrainKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn insert(&mut self, kind: TerrainKind) {
        self.0 |= kind.bit();
    }

    pub const fn contains(self, kind: TerrainKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_obstacle(self) -> bool {
        self.contains(TerrainKind::Obstacle)
    }

    /// Spawn and not obstacle; obstacle wins when both are reported.
    pub fn is_spawn_only(self) -> bool {
        self.contains(TerrainKind::Spawn) && !self.is_obstacle()
    }
}

impl FromIterator<TerrainKind> for TerrainKinds {
    fn from_iter<I: IntoIterator<Item = TerrainKind>>(iter: I) -> Self {
        let mut kinds = TerrainKinds::EMPTY;
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}
