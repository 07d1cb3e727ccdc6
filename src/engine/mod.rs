mod error;

pub use error::GridError;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Rectangular field of Conway's GoL cells with edges stitched together.
///
/// Cells are stored row-major, `rows * cols` of them, so the field can never be jagged.
/// Every transition produces a new value; the field it was computed from stays untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a blank field with all cells dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimension { rows, cols });
        }
        Ok(Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        })
    }

    /// Create a field with random cells, each alive with probability `alive_probability`.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::new(rows, cols)?.randomize(alive_probability, &mut rng)
    }

    /// Build a field from text rows: `#` or `O` is alive, anything else is dead.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut result = Self::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != cols {
                return Err(GridError::RaggedRow { row: r, len, cols });
            }
            for (c, ch) in row.chars().enumerate() {
                result.set(r, c, matches!(ch, '#' | 'O'));
            }
        }
        Ok(result)
    }

    /// Blank field of the same size.
    pub fn cleared(&self) -> Self {
        Self {
            cells: vec![false; self.cells.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// State of the cell, `None` outside of the field.
    pub fn get(&self, r: usize, c: usize) -> Option<bool> {
        if r < self.rows && c < self.cols {
            Some(self.cells[r * self.cols + c])
        } else {
            None
        }
    }

    pub fn is_alive(&self, r: usize, c: usize) -> bool {
        self.get(r, c).unwrap_or(false)
    }

    /// Panics if `(r, c)` is outside of the field.
    pub fn set(&mut self, r: usize, c: usize, alive: bool) {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) is out of bounds");
        self.cells[r * self.cols + c] = alive;
    }

    /// Read-only row-major view, one slice of `cols` cells per row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&x| x).count()
    }

    /// Number of alive cells among the 8 neighbors, wrapping around the edges.
    pub fn neighbor_count(&self, r: usize, c: usize) -> u8 {
        let r1 = if r == 0 { self.rows - 1 } else { r - 1 };
        let r2 = if r + 1 == self.rows { 0 } else { r + 1 };
        let c1 = if c == 0 { self.cols - 1 } else { c - 1 };
        let c2 = if c + 1 == self.cols { 0 } else { c + 1 };
        self.alive_u8(r1, c1)
            + self.alive_u8(r1, c)
            + self.alive_u8(r1, c2)
            + self.alive_u8(r, c1)
            + self.alive_u8(r, c2)
            + self.alive_u8(r2, c1)
            + self.alive_u8(r2, c)
            + self.alive_u8(r2, c2)
    }

    fn alive_u8(&self, r: usize, c: usize) -> u8 {
        self.cells[r * self.cols + c] as u8
    }

    /// Computes the next generation from this one.
    pub fn next_generation(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                let neibs = self.neighbor_count(r, c);
                let next = if self.cells[r * self.cols + c] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
                cells.push(next);
            }
        }
        Self {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Flips the cell at `(r, c)`.
    ///
    /// Coordinates outside of the field are ignored. Returns whether a cell was flipped.
    pub fn toggle_cell(&mut self, r: i64, c: i64) -> bool {
        let (Ok(r), Ok(c)) = (usize::try_from(r), usize::try_from(c)) else {
            return false;
        };
        if r >= self.rows || c >= self.cols {
            return false;
        }
        let cell = &mut self.cells[r * self.cols + c];
        *cell = !*cell;
        true
    }

    /// Same as [`Grid::toggle_cell`], but returns a new field.
    pub fn toggled(&self, r: i64, c: i64) -> Self {
        let mut result = self.clone();
        result.toggle_cell(r, c);
        result
    }

    /// New field of the same size where each cell is alive with probability `alive_probability`.
    pub fn randomize<R: Rng + ?Sized>(
        &self,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(GridError::InvalidProbability(alive_probability));
        }
        let cells = (0..self.cells.len())
            .map(|_| rng.gen_bool(alive_probability))
            .collect();
        Ok(Self {
            cells,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
