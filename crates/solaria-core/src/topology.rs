use thiserror::Error;

use crate::{Cell, TerrainKind, TerrainKinds};

/// Read-only board queries supplied by the game sandbox.
///
/// The engine does not prescribe how legality is decided; it only needs the
/// terrain of a cell, its neighbors and a distance metric.
pub trait GridTopology {
    fn board_size(&self) -> u32;

    fn terrain_kinds(&self, cell: Cell) -> TerrainKinds;

    fn adjacent_cells(&self, cell: Cell) -> Vec<Cell>;

    fn distance(&self, a: Cell, b: Cell) -> u32;
}

impl<T: GridTopology + ?Sized> GridTopology for &T {
    fn board_size(&self) -> u32 {
        (**self).board_size()
    }

    fn terrain_kinds(&self, cell: Cell) -> TerrainKinds {
        (**self).terrain_kinds(cell)
    }

    fn adjacent_cells(&self, cell: Cell) -> Vec<Cell> {
        (**self).adjacent_cells(cell)
    }

    fn distance(&self, a: Cell, b: Cell) -> u32 {
        (**self).distance(a, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Neighborhood {
    /// 4 orthogonal neighbors, Manhattan distance.
    #[default]
    VonNeumann,
    /// 8 neighbors, Chebyshev distance.
    Moore,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("arena must be non-empty")]
    Empty,
    #[error("row {row} has width {width}, expected {expected}")]
    Ragged {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown terrain glyph {glyph:?} at {cell}")]
    UnknownGlyph { glyph: char, cell: Cell },
}

/// Square reference board.
///
/// Off-board cells report `obstacle`; adjacency never yields them.
#[derive(Debug, Clone)]
pub struct SquareArena {
    size: u32,
    neighborhood: Neighborhood,
    terrain: Vec<TerrainKinds>,
}

impl SquareArena {
    /// All-normal board.
    pub fn open(size: u32) -> Self {
        assert!(size > 0, "arena must be non-empty");
        Self {
            size,
            neighborhood: Neighborhood::default(),
            terrain: vec![TerrainKinds::only(TerrainKind::Normal); (size * size) as usize],
        }
    }

    /// Parse square ASCII rows: `.` normal, `s` spawn, `#` obstacle.
    ///
    /// Row `y` is the `y`-th string, column `x` the `x`-th glyph.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ArenaError> {
        let size = rows.len();
        if size == 0 {
            return Err(ArenaError::Empty);
        }

        let mut terrain = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                return Err(ArenaError::Ragged {
                    row: y,
                    width,
                    expected: size,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kinds = match glyph {
                    '.' => TerrainKinds::only(TerrainKind::Normal),
                    's' => TerrainKinds::only(TerrainKind::Normal).with(TerrainKind::Spawn),
                    '#' => TerrainKinds::only(TerrainKind::Obstacle),
                    other => {
                        return Err(ArenaError::UnknownGlyph {
                            glyph: other,
                            cell: Cell::new(x as i32, y as i32),
                        })
                    }
                };
                terrain.push(kinds);
            }
        }

        Ok(Self {
            size: size as u32,
            neighborhood: Neighborhood::default(),
            terrain,
        })
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn set_terrain(&mut self, cell: Cell, kinds: TerrainKinds) {
        if let Some(idx) = self.idx(cell) {
            self.terrain[idx] = kinds;
        }
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !cell.in_board(self.size) {
            return None;
        }
        Some((cell.y as u32 * self.size + cell.x as u32) as usize)
    }
}

impl GridTopology for SquareArena {
    fn board_size(&self) -> u32 {
        self.size
    }

    fn terrain_kinds(&self, cell: Cell) -> TerrainKinds {
        self.idx(cell)
            .map(|idx| self.terrain[idx])
            .unwrap_or(TerrainKinds::only(TerrainKind::Obstacle))
    }

    fn adjacent_cells(&self, cell: Cell) -> Vec<Cell> {
        let mut out: Vec<Cell> = cell.orthogonal().to_vec();
        if self.neighborhood == Neighborhood::Moore {
            out.extend(cell.diagonal());
        }
        out.retain(|c| c.in_board(self.size));
        out
    }

    fn distance(&self, a: Cell, b: Cell) -> u32 {
        match self.neighborhood {
            Neighborhood::VonNeumann => a.manhattan(b),
            Neighborhood::Moore => a.chebyshev(b),
        }
    }
}
