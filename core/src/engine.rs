use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Classification of the board after the latest move.
///
/// Valid transitions:
/// - InProgress -> InProgress
/// - InProgress -> Win
/// - InProgress -> Tie
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win { player: Player, line: WinningLine },
    Tie,
}

impl Outcome {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win { .. } | Self::Tie)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Win { player, .. } => Some(player),
            _ => None,
        }
    }

    pub const fn winning_line(self) -> Option<WinningLine> {
        match self {
            Self::Win { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game of Connect Four from the first drop to a win or a tie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameEngine")]
pub struct GameEngine {
    config: BoardConfig,
    board: Array2<Cell>,
    turn: Player,
    outcome: Outcome,
    move_count: CellCount,
    last_move: Option<Coord2>,
}

/// Unchecked serialized form of [`GameEngine`], validated on the way in.
#[derive(Deserialize)]
struct RawGameEngine {
    config: BoardConfig,
    board: Array2<Cell>,
    turn: Player,
    outcome: Outcome,
    move_count: CellCount,
    last_move: Option<Coord2>,
}

impl TryFrom<RawGameEngine> for GameEngine {
    type Error = ConfigError;

    fn try_from(raw: RawGameEngine) -> Result<Self, Self::Error> {
        let RawGameEngine {
            config,
            board,
            turn,
            outcome,
            move_count,
            last_move,
        } = raw;

        if board.dim() != (usize::from(config.rows()), usize::from(config.cols())) {
            return Err(ConfigError::InvalidBoardShape);
        }

        let engine = Self {
            config,
            board,
            turn,
            outcome,
            move_count,
            last_move,
        };
        engine.check_gravity()?;
        if engine.count_pieces()? != move_count {
            return Err(ConfigError::InconsistentState);
        }
        if let Some(coords) = last_move {
            if engine.cell_at(coords).is_none_or(Cell::is_empty) {
                return Err(ConfigError::InconsistentState);
            }
        }
        if engine.evaluate_outcome() != outcome {
            return Err(ConfigError::InconsistentState);
        }
        Ok(engine)
    }
}

impl GameEngine {
    /// Starts a game, flipping a coin seeded with `seed` to pick who moves first.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(seed);
        let first = Player::from_coin(rng.random_bool(0.5));
        log::debug!("seed {} picked {} to move first", seed, first);
        Self::with_first_player(config, first)
    }

    pub fn with_first_player(config: BoardConfig, first: Player) -> Self {
        Self {
            config,
            board: Array2::default(config.size().to_nd_index()),
            turn: first,
            outcome: Outcome::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    /// Builds a game from a literal grid, rows listed top to bottom.
    ///
    /// The grid must be rectangular and respect gravity. The outcome is evaluated right away, so
    /// a grid that already holds a line yields a finished game. `turn` is the player to move next
    /// and is kept as is if the grid is already finished.
    pub fn from_rows(rows: &[&[Cell]], turn: Player) -> Result<Self, ConfigError> {
        let col_count = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != col_count) {
            return Err(ConfigError::InvalidBoardShape);
        }

        let row_count = Coord::try_from(rows.len()).map_err(|_| ConfigError::TooLarge)?;
        let col_count = Coord::try_from(col_count).map_err(|_| ConfigError::TooLarge)?;
        let config = BoardConfig::new(row_count, col_count)?;

        let mut engine = Self::with_first_player(config, turn);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                engine.board[[row, col]] = cell;
            }
        }

        engine.check_gravity()?;
        engine.move_count = engine.count_pieces()?;
        engine.outcome = engine.evaluate_outcome();
        Ok(engine)
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    /// Player to move. Frozen once the game is finished.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.winning_line()
    }

    pub fn is_winning_cell(&self, coords: Coord2) -> bool {
        self.winning_line()
            .is_some_and(|line| line.contains(&coords))
    }

    pub fn move_count(&self) -> CellCount {
        self.move_count
    }

    /// Where the most recent drop landed.
    pub fn last_move(&self) -> Option<Coord2> {
        self.last_move
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.get(coords.to_nd_index()).copied()
    }

    /// Number of pieces in `column`, `None` if the column is outside the board.
    pub fn column_height(&self, column: usize) -> Option<Coord> {
        let column = self.validate_column(column).ok()?;
        let height = (0..self.rows())
            .filter(|&row| !self.board[(row, column).to_nd_index()].is_empty())
            .count();
        height.try_into().ok()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.column_height(column) == Some(self.rows())
    }

    /// Columns that would accept a drop right now, left to right.
    pub fn open_columns(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = if self.is_finished() { 0 } else { self.cols() };
        (0..cols).filter(move |&col| self.landing_row(col).is_some())
    }

    /// Drops a piece for the current player into `column`.
    ///
    /// A rejected drop leaves the game untouched. After a successful drop the turn passes to the
    /// other player unless the drop finished the game.
    pub fn drop_piece(&mut self, column: usize) -> Result<Outcome> {
        if let Err(err) = self.check_in_progress() {
            log::trace!("drop into column {} rejected: {}", column, err);
            return Err(err);
        }
        let col = self.validate_column(column).inspect_err(|err| {
            log::trace!("drop into column {} rejected: {}", column, err);
        })?;
        let Some(row) = self.landing_row(col) else {
            log::trace!("drop into column {} rejected: column full", col);
            return Err(DropError::ColumnFull);
        };

        let player = self.turn;
        let coords = (row, col);
        self.board[coords.to_nd_index()] = player.into();
        self.move_count += 1;
        self.last_move = Some(coords);
        log::debug!("{} dropped into column {}, landed on row {}", player, col, row);

        self.outcome = self.evaluate_outcome();
        match self.outcome {
            Outcome::InProgress => self.turn = player.other(),
            Outcome::Win { player, line } => {
                log::debug!("{} won after {} moves with {:?}", player, self.move_count, line);
            }
            Outcome::Tie => log::debug!("board full after {} moves, tie", self.move_count),
        }
        Ok(self.outcome)
    }

    /// Scans the whole board for a line, then for a full board.
    ///
    /// Lines are searched in [`LineScan`] order and the first one found is reported, so the
    /// result for a board holding several lines does not depend on how it was reached.
    pub fn evaluate_outcome(&self) -> Outcome {
        for (orientation, line) in LineScan::new(self.size()) {
            let first = self.board[line[0].to_nd_index()];
            let Some(player) = first.player() else {
                continue;
            };
            if line[1..]
                .iter()
                .all(|&pos| self.board[pos.to_nd_index()] == first)
            {
                log::trace!("{:?} line for {} at {:?}", orientation, player, line);
                return Outcome::Win { player, line };
            }
        }

        if self.move_count >= self.config.total_cells() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// Fails on the first piece, scanning columns left to right, that has an empty cell below it.
    fn check_gravity(&self) -> Result<(), ConfigError> {
        let (rows, cols) = self.size();
        for col in 0..cols {
            let mut piece_above = None;
            for row in 0..rows {
                if !self.board[(row, col).to_nd_index()].is_empty() {
                    piece_above = Some(row);
                } else if let Some(piece_row) = piece_above {
                    return Err(ConfigError::FloatingPiece(piece_row, col));
                }
            }
        }
        Ok(())
    }

    fn count_pieces(&self) -> Result<CellCount, ConfigError> {
        self.board
            .iter()
            .filter(|cell| !cell.is_empty())
            .count()
            .try_into()
            .map_err(|_| ConfigError::TooLarge)
    }

    fn landing_row(&self, col: Coord) -> Option<Coord> {
        (0..self.rows())
            .rev()
            .find(|&row| self.board[(row, col).to_nd_index()].is_empty())
    }

    fn validate_column(&self, column: usize) -> Result<Coord> {
        Coord::try_from(column)
            .ok()
            .filter(|&col| col < self.cols())
            .ok_or(DropError::InvalidColumn)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(DropError::GameOver)
        } else {
            Ok(())
        }
    }
}
