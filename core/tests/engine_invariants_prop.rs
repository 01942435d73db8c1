#![cfg(not(target_arch = "wasm32"))]

use connect_four_core::{BoardConfig, Cell, DropError, GameEngine, Outcome, Player};
use proptest::prelude::*;

/// Every column holds a contiguous block of pieces sitting on the bottom row.
fn assert_columns_settled(engine: &GameEngine) {
    let (rows, cols) = engine.size();
    for col in 0..cols {
        let mut seen_empty_below = false;
        for row in (0..rows).rev() {
            let cell = engine.cell_at((row, col)).unwrap();
            if cell.is_empty() {
                seen_empty_below = true;
            } else {
                assert!(
                    !seen_empty_below,
                    "piece at ({row}, {col}) floats above an empty cell"
                );
            }
        }
        let height = engine.column_height(usize::from(col)).unwrap();
        assert!(height <= rows);
    }
}

fn piece_count(engine: &GameEngine) -> u16 {
    let (rows, cols) = engine.size();
    let mut count = 0;
    for row in 0..rows {
        for col in 0..cols {
            if !engine.cell_at((row, col)).unwrap().is_empty() {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn winning_line_cells_belong_to_the_winner() {
    let mut engine = GameEngine::with_first_player(BoardConfig::standard(), Player::Yellow);
    for column in [0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3] {
        engine.drop_piece(column).unwrap();
    }

    let Outcome::Win { player, line } = engine.current_outcome() else {
        panic!("expected a win, got {:?}", engine.current_outcome());
    };
    assert_eq!(player, Player::Yellow);
    for coords in line {
        assert_eq!(engine.cell_at(coords), Some(Cell::Yellow));
    }
}

proptest! {
    #[test]
    fn random_drops_respect_engine_invariants(
        seed in any::<u64>(),
        columns in prop::collection::vec(0usize..9, 0..120),
    ) {
        let mut engine = GameEngine::new(BoardConfig::standard(), seed);

        for column in columns {
            let before = engine.clone();
            let turn = engine.current_turn();

            match engine.drop_piece(column) {
                Ok(outcome) => {
                    prop_assert!(!before.is_finished());
                    prop_assert!(column < 7);
                    prop_assert_eq!(outcome, engine.current_outcome());
                    prop_assert_eq!(outcome, engine.evaluate_outcome());
                    prop_assert_eq!(engine.move_count(), before.move_count() + 1);
                    prop_assert_eq!(piece_count(&engine), engine.move_count());

                    let landed = engine.last_move().unwrap();
                    prop_assert_eq!(usize::from(landed.1), column);
                    prop_assert_eq!(engine.cell_at(landed), Some(Cell::from(turn)));

                    if outcome.is_finished() {
                        prop_assert_eq!(engine.current_turn(), turn);
                    } else {
                        prop_assert_eq!(engine.current_turn(), turn.other());
                    }
                    if let Outcome::Win { player, .. } = outcome {
                        prop_assert_eq!(player, turn);
                    }
                }
                Err(err) => {
                    prop_assert_eq!(&engine, &before);
                    let expected = if before.is_finished() {
                        DropError::GameOver
                    } else if column >= 7 {
                        DropError::InvalidColumn
                    } else {
                        DropError::ColumnFull
                    };
                    prop_assert_eq!(err, expected);
                }
            }

            assert_columns_settled(&engine);
            prop_assert_eq!(engine.winning_line().is_some(), engine.current_outcome().winner().is_some());
        }
    }

    #[test]
    fn full_column_always_rejects(column in 0usize..7, first_red in any::<bool>()) {
        let first = if first_red { Player::Red } else { Player::Yellow };
        let mut engine = GameEngine::with_first_player(BoardConfig::standard(), first);
        for _ in 0..6 {
            prop_assert_eq!(engine.drop_piece(column), Ok(Outcome::InProgress));
        }
        let before = engine.clone();

        prop_assert!(engine.is_column_full(column));
        prop_assert_eq!(engine.drop_piece(column), Err(DropError::ColumnFull));
        prop_assert_eq!(engine, before);
    }
}
