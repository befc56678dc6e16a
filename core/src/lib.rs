#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod error;
mod generator;
mod session;
mod types;

/// Launch parameters of a board. Fixed for the lifetime of a game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub chance_light_starts_on: f64,
}

impl BoardConfig {
    pub const DEFAULT_ROWS: Coord = 5;
    pub const DEFAULT_COLS: Coord = 5;
    pub const DEFAULT_CHANCE: f64 = 0.5;

    pub const fn new_unchecked(rows: Coord, cols: Coord, chance_light_starts_on: f64) -> Self {
        Self {
            rows,
            cols,
            chance_light_starts_on,
        }
    }

    pub fn new(rows: Coord, cols: Coord, chance_light_starts_on: f64) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, chance_light_starts_on);
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty boards and chances outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(GameError::InvalidChance);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_ROWS,
            Self::DEFAULT_COLS,
            Self::DEFAULT_CHANCE,
        )
    }
}

/// Grid of lights, `true` is lit. Indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    lights: Array2<bool>,
}

impl Board {
    pub fn from_lights(lights: Array2<bool>) -> Result<Self> {
        let (rows, cols) = lights.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        if rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { lights })
    }

    /// Builds a board from row slices, which must all have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }
        let lights = Array2::from_shape_fn((rows.len(), cols), |(row, col)| rows[row].as_ref()[col]);
        Self::from_lights(lights)
    }

    pub fn filled(size: Coord2, lit: bool) -> Result<Self> {
        Self::from_lights(Array2::from_elem(size.to_nd_index(), lit))
    }

    pub fn lights(&self) -> &Array2<bool> {
        &self.lights
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.lights.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if is_in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Out-of-bounds coordinates read as unlit.
    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.lights
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> CellCount {
        let count = self.lights.iter().filter(|&&lit| lit).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    pub fn has_won(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }

    /// Returns a copy with the light at `coords` and its orthogonal neighbors toggled.
    ///
    /// Positions outside the board are skipped, there is no wraparound.
    pub fn flip_cells_around(&self, coords: Coord2) -> Self {
        let mut lights = self.lights.clone();

        if is_in_bounds(coords, self.size()) {
            toggle(&mut lights, coords);
        }
        for pos in self.lights.iter_neighbors(coords) {
            toggle(&mut lights, pos);
        }

        Self { lights }
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(lights: Array2<bool>) -> Result<Self> {
        Self::from_lights(lights)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.lights
    }
}

fn toggle(lights: &mut Array2<bool>, coords: Coord2) {
    let light = &mut lights[coords.to_nd_index()];
    *light = !*light;
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lights[coords.to_nd_index()]
    }
}

/// One line per row, `#` for lit and `.` for unlit.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.lights.rows().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Flipped,
    Won,
}

impl FlipOutcome {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}
