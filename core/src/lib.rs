#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    rows: Coord,
    cols: Coord,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    rows: Coord,
    cols: Coord,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.rows, raw.cols)
    }
}

impl BoardConfig {
    pub const STANDARD_ROWS: Coord = 6;
    pub const STANDARD_COLS: Coord = 7;
    pub const MAX_SIZE: Coord = 64;

    /// The classic 6 rows by 7 columns board.
    pub const fn standard() -> Self {
        Self::new_unchecked(Self::STANDARD_ROWS, Self::STANDARD_COLS)
    }

    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self, ConfigError> {
        let min = LINE_LEN as Coord;
        if rows < min || cols < min {
            return Err(ConfigError::TooSmall);
        }
        if rows > Self::MAX_SIZE || cols > Self::MAX_SIZE {
            return Err(ConfigError::TooLarge);
        }
        Ok(Self::new_unchecked(rows, cols))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    /// `(rows, cols)`, usable as bounds for coordinates.
    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}
