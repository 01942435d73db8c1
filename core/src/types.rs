use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for move counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, row 0 is the top of the board.
pub type Coord2 = (Coord, Coord);

/// Number of connected pieces needed to win.
pub const LINE_LEN: usize = 4;

/// The cells of a four-in-a-row, start cell first.
pub type WinningLine = [Coord2; LINE_LEN];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The four ways a line can run across the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top along a column.
    Vertical,
    /// Bottom-left to top-right.
    AscendingDiagonal,
    /// Top-left to bottom-right.
    DescendingDiagonal,
}

impl Orientation {
    /// Orientations in the order they are checked for a win.
    pub const SCAN_ORDER: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::AscendingDiagonal,
        Orientation::DescendingDiagonal,
    ];

    /// Step `(row, col)` taken from one cell of the line to the next.
    pub const fn delta(self) -> (isize, isize) {
        use Orientation::*;
        match self {
            Horizontal => (0, 1),
            Vertical => (-1, 0),
            AscendingDiagonal => (-1, 1),
            DescendingDiagonal => (1, 1),
        }
    }

    /// The line of [`LINE_LEN`] cells starting at `start`, if all of them fit inside `bounds`.
    pub fn line_from(self, start: Coord2, bounds: Coord2) -> Option<WinningLine> {
        if start.0 >= bounds.0 || start.1 >= bounds.1 {
            return None;
        }

        let mut line = [start; LINE_LEN];
        for i in 1..LINE_LEN {
            line[i] = apply_delta(line[i - 1], self.delta(), bounds)?;
        }
        Some(line)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Walks every candidate line on a board of size `bounds`.
///
/// Orientations come in [`Orientation::SCAN_ORDER`]. Within one orientation the start cells go
/// row by row from the top, left to right, and starts whose line would leave the board are
/// skipped.
#[derive(Debug)]
pub struct LineScan {
    bounds: Coord2,
    orientation: usize,
    cursor: Coord2,
}

impl LineScan {
    pub fn new(bounds: Coord2) -> Self {
        Self {
            bounds,
            orientation: 0,
            cursor: (0, 0),
        }
    }

    fn advance(&mut self) {
        let (rows, cols) = self.bounds;
        let (row, col) = self.cursor;
        if col + 1 < cols {
            self.cursor = (row, col + 1);
        } else if row + 1 < rows {
            self.cursor = (row + 1, 0);
        } else {
            self.cursor = (0, 0);
            self.orientation += 1;
        }
    }
}

impl Iterator for LineScan {
    type Item = (Orientation, WinningLine);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let orientation = *Orientation::SCAN_ORDER.get(self.orientation)?;
            let start = self.cursor;
            self.advance();

            if let Some(line) = orientation.line_from(start, self.bounds) {
                return Some((orientation, line));
            }
        }
    }
}
