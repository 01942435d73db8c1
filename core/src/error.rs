use thiserror::Error;

/// Reasons a drop is rejected. None of them change the game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DropError {
    #[error("Column is outside the board")]
    InvalidColumn,
    #[error("Column is already full")]
    ColumnFull,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least 4 rows by 4 columns")]
    TooSmall,
    #[error("Board must be at most 64 rows by 64 columns")]
    TooLarge,
    #[error("Board rows do not all have the same length")]
    InvalidBoardShape,
    #[error("Piece at row {0}, column {1} has an empty cell below it")]
    FloatingPiece(u8, u8),
    #[error("Recorded game state does not match the board")]
    InconsistentState,
}

pub type Result<T, E = DropError> = core::result::Result<T, E>;
