//! Engine-over-Connect-Four scenario tests.
//!
//! Test coverage:
//! - Win-in-one searches (score floor, path length, both orientations)
//! - Terminal detection and endgame scoring (wins, draws, speed bonus)
//! - Chain heuristic (symmetry, dominance ladder, opening silence)
//! - Minimax vs alpha-beta parity on real boards
//! - Progressive deepening anytime records

use crate::connect_four_position;
use crate::engine::{
    minimax, minimax_alphabeta, minimax_endgame, progressive_deepen, GameState, Heuristic,
    ZeroHeuristic, ENDGAME_SCORE_FLOOR,
};

use super::*;

/// Both players have an open three; player one (X) is to move and can
/// complete four in column 0 or column 4.
fn win_in_one() -> ConnectFourBoard {
    connect_four_position! {
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . O O O . . .
        . X X X . . .
    }
}

/// A midgame board where the mover (X) has the longer chain and more
/// multi-piece chains.
fn x_dominant_midgame() -> ConnectFourBoard {
    connect_four_position! {
        . . . . . . .
        . . . . . . .
        . . O . . . .
        . . X . . . .
        . . X O . . .
        O . X O X X O
    }
}

/// A full board with no four-in-a-row anywhere.
fn drawn_board() -> ConnectFourBoard {
    "XOXOXOX/XOXOXOX/OXOXOXO/OXOXOXO/XOXOXOX/OXOXOXO"
        .parse()
        .expect("drawn board diagram is valid")
}

#[test]
fn test_win_in_one_scores_above_endgame_floor() {
    let board = win_in_one();
    let result = minimax(&board, &ZeroHeuristic, Some(1), true).unwrap();

    assert!(result.score >= ENDGAME_SCORE_FLOOR);
    // Start plus the winning move.
    assert_eq!(2, result.path.len());
    // Columns are tried left to right, so of the two winning columns the
    // leftmost is kept.
    assert_eq!(Some(0), result.leaf().last_move());
    assert_eq!(Some(Player::One), result.leaf().winner());
    // Winning on the 7th piece earns the full speed bonus:
    // 1000 + 10 * (42 - 7).
    assert_eq!(1350, result.score);
}

#[test]
fn test_win_in_one_for_the_minimizer() {
    // Same position, but the mover is cast as the minimizer: the proven
    // mover win shows up as a large negative maximizer score.
    let board = win_in_one();
    let result = minimax(&board, &ZeroHeuristic, Some(1), false).unwrap();
    assert_eq!(-1350, result.score);
    assert!(result.score.abs() >= ENDGAME_SCORE_FLOOR);
}

#[test]
fn test_deeper_search_still_takes_the_immediate_win() {
    // No three-move line can outscore the immediate win, whose speed
    // bonus is maximal.
    let board = win_in_one();
    let result = minimax_alphabeta(
        &board,
        i16::MIN,
        i16::MAX,
        &ChainHeuristic::default(),
        Some(3),
        true,
    )
    .unwrap();
    assert_eq!(1350, result.score);
    assert_eq!(2, result.path.len());
}

#[test]
fn test_won_board_is_terminal_with_no_successors() {
    let board = win_in_one().add_piece(0).unwrap();
    assert_eq!(Some(Player::One), board.winner());
    assert!(board.is_terminal());
    assert!(board.successors().is_empty());
}

#[test]
fn test_successors_follow_column_order() {
    let mut board = ConnectFourBoard::new();
    for _ in 0..ROWS {
        board = board.add_piece(2).unwrap();
    }
    let successors = board.successors();
    // Column 2 is full: six successors, in left-to-right column order.
    assert_eq!(6, successors.len());
    let columns: Vec<Option<usize>> = successors.iter().map(|s| s.last_move()).collect();
    assert_eq!(
        vec![Some(0), Some(1), Some(3), Some(4), Some(5), Some(6)],
        columns
    );
}

#[test]
fn test_drawn_board_scores_zero_for_both_perspectives() {
    let board = drawn_board();
    assert!(board.is_full());
    assert_eq!(None, board.winner());
    assert!(board.is_terminal());
    assert_eq!(0, endgame_score(&board, true));
    assert_eq!(0, endgame_score(&board, false));
    assert_eq!(0, endgame_score_faster(&board, true));
    assert_eq!(0, endgame_score_faster(&board, false));
}

#[test]
fn test_minimax_on_terminal_root_returns_single_state_path() {
    let board = drawn_board();
    let result = minimax_endgame(&board, true).unwrap();
    assert_eq!(0, result.score);
    assert_eq!(1, result.path.len());
    assert_eq!(1, result.evaluations);
}

#[test]
fn test_endgame_scores_prefer_faster_wins() {
    // The loser is the player left to move once the game ends.
    let won = win_in_one().add_piece(0).unwrap();
    assert_eq!(-ENDGAME_SCORE_FLOOR, endgame_score(&won, true));
    assert_eq!(ENDGAME_SCORE_FLOOR, endgame_score(&won, false));

    // Seven pieces played: bonus of 10 per unplayed piece.
    assert_eq!(-1350, endgame_score_faster(&won, true));
    assert_eq!(1350, endgame_score_faster(&won, false));
}

#[test]
fn test_heuristic_is_symmetric_in_perspective() {
    let heuristic = ChainHeuristic::default();
    for board in &[win_in_one(), x_dominant_midgame()] {
        assert_eq!(
            heuristic.evaluate(board, true),
            -heuristic.evaluate(board, false)
        );
    }
}

#[test]
fn test_heuristic_rewards_chain_dominance() {
    let heuristic = ChainHeuristic::default();
    let board = x_dominant_midgame();
    assert_eq!(Player::One, board.whose_turn());
    // X has a three-chain and two multi-piece chains against O's single
    // pair: full dominance score for the mover.
    assert_eq!(500, heuristic.evaluate(&board, true));
    assert_eq!(-500, heuristic.evaluate(&board, false));
}

#[test]
fn test_heuristic_scores_partial_advantage_small() {
    let heuristic = ChainHeuristic::default();
    let board = connect_four_position! {
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . X O . . .
        . X X O . . .
    };
    // O to move with equal longest chains but fewer multi-piece chains.
    assert_eq!(Player::Two, board.whose_turn());
    assert_eq!(-10, heuristic.evaluate(&board, true));
    assert_eq!(10, heuristic.evaluate(&board, false));
}

#[test]
fn test_heuristic_is_silent_in_the_opening() {
    let heuristic = ChainHeuristic::default();
    let board = ConnectFourBoard::new().add_piece(3).unwrap();
    assert_eq!(0, heuristic.evaluate(&board, true));
    assert_eq!(0, heuristic.evaluate(&board, false));
}

#[test]
fn test_pruning_never_changes_the_connect_four_result() {
    let heuristic = ChainHeuristic::default();
    for board in &[win_in_one(), x_dominant_midgame()] {
        for depth in 1..=3 {
            for &maximize in &[true, false] {
                let plain = minimax(board, &heuristic, Some(depth), maximize).unwrap();
                let pruned = minimax_alphabeta(
                    board,
                    i16::MIN,
                    i16::MAX,
                    &heuristic,
                    Some(depth),
                    maximize,
                )
                .unwrap();

                assert_eq!(plain.score, pruned.score);
                assert!(pruned.evaluations <= plain.evaluations);
                assert!(pruned.evaluations >= 1);
            }
        }
    }
}

#[test]
fn test_progressive_deepening_records_every_depth() {
    let board = x_dominant_midgame();
    let heuristic = ChainHeuristic::default();
    let anytime = progressive_deepen(&board, &heuristic, 4, true).unwrap();

    assert_eq!(4, anytime.history().len());
    for (i, recorded) in anytime.history().iter().enumerate() {
        let depth = (i + 1) as u8;
        let fresh =
            minimax_alphabeta(&board, i16::MIN, i16::MAX, &heuristic, Some(depth), true).unwrap();
        assert_eq!(fresh.score, recorded.score);
        assert!(recorded.depth() <= depth as usize);
    }
}
