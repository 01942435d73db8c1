use connect_four_core::{Cell, GameEngine, Outcome, Player};

/// Side of a board cell in CSS pixels, must match `.cell` in index.html.
pub(crate) const CELL_SIZE: f64 = 64.0;

/// Maps a horizontal offset inside the board to a column index.
///
/// The column may lie past the right edge; the engine rejects it.
pub(crate) fn column_at(x: f64, cell_size: f64) -> Option<usize> {
    if !x.is_finite() || x < 0.0 || cell_size <= 0.0 {
        return None;
    }
    Some((x / cell_size) as usize)
}

pub(crate) const fn player_class(player: Player) -> &'static str {
    match player {
        Player::Red => "red",
        Player::Yellow => "yellow",
    }
}

pub(crate) const fn piece_class(cell: Cell) -> Option<&'static str> {
    match cell.player() {
        Some(player) => Some(player_class(player)),
        None => None,
    }
}

/// Strip above the board: whose turn it is, who won, or a tie.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Banner {
    ToMove(Player),
    Won(Player),
    Tie,
}

impl Banner {
    pub(crate) fn of(engine: &GameEngine) -> Self {
        match engine.current_outcome() {
            Outcome::InProgress => Self::ToMove(engine.current_turn()),
            Outcome::Win { player, .. } => Self::Won(player),
            Outcome::Tie => Self::Tie,
        }
    }

    pub(crate) const fn class(self) -> &'static str {
        match self {
            Self::ToMove(player) | Self::Won(player) => player_class(player),
            Self::Tie => "tie",
        }
    }

    pub(crate) fn text(self) -> String {
        match self {
            Self::ToMove(player) => format!("{} to move", player),
            Self::Won(player) => format!("{} wins!", player),
            Self::Tie => "Tie".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four_core::BoardConfig;

    #[test]
    fn click_offset_maps_to_column() {
        assert_eq!(column_at(0.0, CELL_SIZE), Some(0));
        assert_eq!(column_at(63.9, CELL_SIZE), Some(0));
        assert_eq!(column_at(64.0, CELL_SIZE), Some(1));
        assert_eq!(column_at(6.5 * CELL_SIZE, CELL_SIZE), Some(6));
        assert_eq!(column_at(7.0 * CELL_SIZE, CELL_SIZE), Some(7));
    }

    #[test]
    fn click_left_of_board_has_no_column() {
        assert_eq!(column_at(-1.0, CELL_SIZE), None);
        assert_eq!(column_at(f64::NAN, CELL_SIZE), None);
        assert_eq!(column_at(10.0, 0.0), None);
    }

    #[test]
    fn banner_follows_outcome() {
        let mut engine = GameEngine::with_first_player(BoardConfig::standard(), Player::Yellow);
        assert_eq!(Banner::of(&engine), Banner::ToMove(Player::Yellow));
        assert_eq!(Banner::of(&engine).class(), "yellow");

        for column in [0, 0, 1, 1, 2, 2, 3] {
            engine.drop_piece(column).unwrap();
        }
        let banner = Banner::of(&engine);
        assert_eq!(banner, Banner::Won(Player::Yellow));
        assert_eq!(banner.text(), "Yellow wins!");
    }

    #[test]
    fn empty_cell_has_no_piece_class() {
        assert_eq!(piece_class(Cell::Empty), None);
        assert_eq!(piece_class(Cell::Red), Some("red"));
        assert_eq!(Banner::Tie.class(), "tie");
    }
}
