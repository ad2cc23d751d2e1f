use core::fmt;

use solaria_core::{Cell, DeterministicRng, GridTopology, Observation, TeamId};
use tracing::trace;

use crate::{DecayMode, FieldConfig};

/// Board-sized scalar terrain.
///
/// Rebuilt from zero once per turn. Low values attract movement, high values
/// repel it.
#[derive(Debug, Clone)]
pub struct PotentialField {
    size: u32,
    heights: Vec<i32>,
    // Scratch for `spread`: number of in-board walks reaching each cell at the
    // current depth, and at the next one.
    walks: Vec<i64>,
    next_walks: Vec<i64>,
}

impl PotentialField {
    pub fn new(size: u32) -> Self {
        assert!(size > 0, "field must be non-empty");
        let len = (size * size) as usize;
        Self {
            size,
            heights: vec![0; len],
            walks: vec![0; len],
            next_walks: vec![0; len],
        }
    }

    pub fn board_size(&self) -> u32 {
        self.size
    }

    /// Zero every cell, resizing to `size` if needed.
    pub fn reset(&mut self, size: u32) {
        if size != self.size {
            *self = Self::new(size);
            return;
        }
        self.heights.fill(0);
    }

    /// Rebuild the whole field for `team` from the current board.
    ///
    /// Obstacles take precedence over spawn when a cell reports both.
    pub fn rebuild<T>(
        &mut self,
        topology: &T,
        observation: &Observation,
        team: TeamId,
        config: &FieldConfig,
    ) where
        T: GridTopology + ?Sized,
    {
        self.reset(topology.board_size());

        for y in 0..self.size as i32 {
            for x in 0..self.size as i32 {
                let cell = Cell::new(x, y);
                let kinds = topology.terrain_kinds(cell);
                if kinds.is_obstacle() {
                    self.add(cell, config.obstacle);
                } else if kinds.is_spawn_only() {
                    self.add(cell, config.spawn);
                }
            }
        }

        for (cell, occupant) in observation {
            let amount = if occupant.is_friend_of(team) {
                config.friend
            } else {
                config.enemy
            };
            self.spread(*cell, amount, config.decay);
        }

        trace!(%team, occupants = observation.len(), "rebuilt potential field\n{}", self);
    }

    /// Add a decaying cone centered at `origin`.
    ///
    /// Each step writes `amount` truncated toward zero, then decays and moves
    /// on to the four orthogonal neighbors (including back where it came
    /// from), stopping once `-1 < amount < 1` or at the board edge. Depth by
    /// depth, every in-board walk of length `k` from `origin` contributes the
    /// depth-`k` amount to the cell it ends on, so the walks are counted per
    /// cell instead of enumerated.
    pub fn spread(&mut self, origin: Cell, amount: f64, decay: DecayMode) {
        let Some(origin_idx) = self.idx(origin) else {
            return;
        };

        self.walks.fill(0);
        self.walks[origin_idx] = 1;

        let mut amount = amount;
        while amount.is_finite() && amount.abs() >= 1.0 {
            let step = amount.trunc() as i64;
            self.next_walks.fill(0);

            for idx in 0..self.walks.len() {
                let walks = self.walks[idx];
                if walks == 0 {
                    continue;
                }

                let height = self.heights[idx] as i64 + step.saturating_mul(walks);
                self.heights[idx] = height.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

                for n in self.cell_from_idx(idx).orthogonal() {
                    if let Some(n_idx) = self.idx(n) {
                        self.next_walks[n_idx] = self.next_walks[n_idx].saturating_add(walks);
                    }
                }
            }

            core::mem::swap(&mut self.walks, &mut self.next_walks);
            amount = decay.next(amount);
        }
    }

    /// Add `amount` to a single cell. Returns `false` off board.
    pub fn add(&mut self, cell: Cell, amount: i32) -> bool {
        let Some(idx) = self.idx(cell) else {
            return false;
        };
        self.heights[idx] = self.heights[idx].saturating_add(amount);
        true
    }

    /// Bounds-checked lookup.
    pub fn get(&self, cell: Cell) -> Option<i32> {
        self.idx(cell).map(|idx| self.heights[idx])
    }

    /// Direct lookup.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is off the board; callers check bounds first.
    pub fn query(&self, cell: Cell) -> i32 {
        match self.get(cell) {
            Some(height) => height,
            None => panic!("potential field queried off board at {cell}"),
        }
    }

    /// `from` and every orthogonal neighbor sharing the lowest height, `from`
    /// first then S, E, N, W. Empty if `from` is off board.
    pub fn lowest_around(&self, from: Cell) -> Vec<Cell> {
        let Some(mut lowest) = self.get(from) else {
            return Vec::new();
        };
        let mut out = vec![from];

        for n in from.orthogonal() {
            let Some(height) = self.get(n) else { continue };
            if height == lowest {
                out.push(n);
            } else if height < lowest {
                lowest = height;
                out.clear();
                out.push(n);
            }
        }
        out
    }

    /// Steepest-descent step from `from` (possibly `from` itself), ties
    /// broken uniformly at random.
    pub fn downhill<R>(&self, from: Cell, rng: &mut R) -> Option<Cell>
    where
        R: DeterministicRng,
    {
        let candidates = self.lowest_around(from);
        rng.choose(&candidates).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.heights.chunks(self.size as usize)
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !cell.in_board(self.size) {
            return None;
        }
        Some((cell.y as u32 * self.size + cell.x as u32) as usize)
    }

    fn cell_from_idx(&self, idx: usize) -> Cell {
        let idx = idx as u32;
        Cell::new((idx % self.size) as i32, (idx / self.size) as i32)
    }
}

impl PartialEq for PotentialField {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.heights == other.heights
    }
}

impl Eq for PotentialField {}

impl fmt::Display for PotentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for height in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{height:03}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
