// =============================================================================
// Draughts rule engine
//
// The single source of truth for move legality, capture detection and
// application, king promotion, move enumeration, and game-end detection.
// Legality checking mints a LegalMove token whose fields are private;
// perform_move accepts only that token, so a move cannot be applied without
// having been checked against the current position.
//
// Coordinate system: positions are (column, row) pairs, row 0 at Black's back
// rank. Black men advance toward row 7, Red men toward row 0; kings move in
// either direction.
// =============================================================================

use crate::board::Board;
use crate::moves::Move;
use crate::piece::{CellValue, Side};

/// Proof that a specific move was checked and found legal on the board it was
/// checked against. Consumed by `perform_move`; constructed only by
/// `check_move`.
#[derive(Clone, Copy, Debug)]
pub struct LegalMove {
    side: Side,
    from: (i32, i32),
    to: (i32, i32),
    capture: Option<(i32, i32)>,
}

impl LegalMove {
    pub fn side(&self) -> Side {
        self.side
    }

    /// The captured square, when this move is a jump.
    pub fn capture(&self) -> Option<(i32, i32)> {
        self.capture
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
        }
    }
}

/// What `perform_move` did to the board.
#[derive(Clone, Copy, Debug)]
pub struct MoveOutcome {
    /// The square emptied by a capture, if the move was a jump.
    pub capture: Option<(i32, i32)>,
    /// Whether the moving man was crowned on arrival.
    pub promoted: bool,
}

/// Check whether `side` may move the piece on `from` to `to`. Returns the
/// token carrying the detected capture square for a jump, or `None` when the
/// move is illegal for any reason: `to` off the board or not empty,
/// `from == to`, `from` not holding one of `side`'s pieces, a man moving
/// against its forward direction, or a shape that is neither a step nor a
/// jump over an opposing piece.
pub fn check_move(board: &Board, side: Side, from: (i32, i32), to: (i32, i32)) -> Option<LegalMove> {
    if from == to {
        return None;
    }
    let mover = board.value_at(from)?;
    if mover.owner() != Some(side) {
        return None;
    }
    if board.value_at(to)? != CellValue::Empty {
        return None;
    }

    let (dx, dy) = (to.0 - from.0, to.1 - from.1);

    // Men only move toward their side's far row; kings are exempt.
    if mover.is_man() && dy * side.forward() < 0 {
        return None;
    }
    if dy.abs() > 2 {
        return None;
    }

    if dy.abs() == 2 {
        let taken = check_for_take(board, side, from, to)?;
        return Some(LegalMove {
            side,
            from,
            to,
            capture: Some(taken),
        });
    }

    if dx.abs() <= 1 && dy.abs() <= 1 {
        return Some(LegalMove {
            side,
            from,
            to,
            capture: None,
        });
    }

    None
}

/// For a two-row move, the diagonal midpoint consistent with the direction of
/// `to` (front-right, front-left, back-right or back-left of `from`), when it
/// is occupied by `side`'s opponent. Pure query; mutates nothing.
pub fn check_for_take(
    board: &Board,
    side: Side,
    from: (i32, i32),
    to: (i32, i32),
) -> Option<(i32, i32)> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    if dx.abs() != 2 || dy.abs() != 2 {
        return None;
    }
    let mid = (from.0 + dx / 2, from.1 + dy / 2);
    if board.value_at(mid).and_then(|v| v.owner()) == Some(side.opposite()) {
        Some(mid)
    } else {
        None
    }
}

/// Apply a checked move: the piece moves from `from` to `to`, a man reaching
/// its far row is crowned, and the captured square (if any) is emptied.
/// Kings are never demoted.
pub fn perform_move(board: &mut Board, mv: &LegalMove) -> MoveOutcome {
    let mover = board.value_at(mv.from).unwrap_or(CellValue::Empty);
    board.set_value_at(mv.to, mover);
    board.set_value_at(mv.from, CellValue::Empty);

    let promoted = mover.is_man() && mv.to.1 == mv.side.far_row();
    if promoted {
        board.set_value_at(mv.to, CellValue::king_of(mv.side));
    }

    if let Some(taken) = mv.capture {
        board.set_value_at(taken, CellValue::Empty);
    }

    MoveOutcome {
        capture: mv.capture,
        promoted,
    }
}

/// Whether any of the four jump destinations from `origin` is a legal capture
/// for `side`. Decides forced continuation after a capture; the piece on
/// `origin` may have just been crowned, in which case backward jumps count.
pub fn has_further_jump(board: &Board, side: Side, origin: (i32, i32)) -> bool {
    let f = side.forward();
    let jumps = [(2, 2 * f), (-2, 2 * f), (2, -2 * f), (-2, -2 * f)];
    jumps.iter().any(|&(dx, dy)| {
        let to = (origin.0 + dx, origin.1 + dy);
        check_move(board, side, origin, to).is_some_and(|mv| mv.is_capture())
    })
}

/// Enumerate every legal move for `side`, scanning the board row-major and
/// trying, per origin, the four steps then the four jumps, each group ordered
/// front-right, front-left, back-right, back-left relative to the side's
/// forward direction. The order is deterministic so tests can rely on it;
/// callers that randomize pick from this list.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let f = side.forward();
    let candidates = [
        (1, f),
        (-1, f),
        (1, -f),
        (-1, -f),
        (2, 2 * f),
        (-2, 2 * f),
        (2, -2 * f),
        (-2, -2 * f),
    ];

    let mut moves = Vec::new();
    for y in 0..8 {
        for x in 0..8 {
            let from = (x, y);
            if !board.owns(side, from) {
                continue;
            }
            for &(dx, dy) in &candidates {
                let to = (x + dx, y + dy);
                if check_move(board, side, from, to).is_some() {
                    moves.push(Move { from, to });
                }
            }
        }
    }
    moves
}

/// The side that has taken all of the opponent's pieces, if either has.
pub fn winner(board: &Board) -> Option<Side> {
    if board.piece_count(Side::Red) == 0 {
        Some(Side::Black)
    } else if board.piece_count(Side::Black) == 0 {
        Some(Side::Red)
    } else {
        None
    }
}

/// True iff one side has no men or kings left.
pub fn game_over(board: &Board) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_destinations() {
        let board = Board::new();
        // same square
        assert!(check_move(&board, Side::Black, (1, 2), (1, 2)).is_none());
        // off the board
        assert!(check_move(&board, Side::Black, (1, 2), (1, 8)).is_none());
        assert!(check_move(&board, Side::Black, (1, 2), (-1, 2)).is_none());
        // occupied by a friendly piece
        assert!(check_move(&board, Side::Black, (1, 0), (2, 1)).is_none());
        // occupied by an opposing piece
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        board.set_value_at((2, 3), CellValue::RedMan);
        assert!(check_move(&board, Side::Black, (1, 2), (2, 3)).is_none());
        // moving from an empty or opposing square
        assert!(check_move(&board, Side::Black, (3, 4), (4, 5)).is_none());
        assert!(check_move(&board, Side::Black, (2, 3), (3, 4)).is_none());
    }

    #[test]
    fn men_cannot_move_backward() {
        let mut board = Board::empty();
        board.set_value_at((3, 4), CellValue::BlackMan);
        board.set_value_at((4, 3), CellValue::RedMan);

        // Black moves toward row 7 only
        assert!(check_move(&board, Side::Black, (3, 4), (2, 3)).is_none());
        assert!(check_move(&board, Side::Black, (3, 4), (2, 5)).is_some());
        // Red moves toward row 0 only
        assert!(check_move(&board, Side::Red, (4, 3), (5, 4)).is_none());
        assert!(check_move(&board, Side::Red, (4, 3), (5, 2)).is_some());
    }

    #[test]
    fn kings_move_in_both_directions() {
        let mut board = Board::empty();
        board.set_value_at((3, 4), CellValue::BlackKing);
        assert!(check_move(&board, Side::Black, (3, 4), (2, 3)).is_some());
        assert!(check_move(&board, Side::Black, (3, 4), (4, 5)).is_some());

        // a king also jumps backward
        board.set_value_at((2, 3), CellValue::RedMan);
        let mv = check_move(&board, Side::Black, (3, 4), (1, 2)).unwrap();
        assert_eq!(mv.capture(), Some((2, 3)));
    }

    #[test]
    fn jump_requires_an_opposing_midpoint() {
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        // nothing to jump over
        assert!(check_move(&board, Side::Black, (1, 2), (3, 4)).is_none());
        // own piece in the way
        board.set_value_at((2, 3), CellValue::BlackMan);
        assert!(check_move(&board, Side::Black, (1, 2), (3, 4)).is_none());
        // opposing piece: legal, and the take square is the midpoint
        board.set_value_at((2, 3), CellValue::RedMan);
        let mv = check_move(&board, Side::Black, (1, 2), (3, 4)).unwrap();
        assert_eq!(mv.capture(), Some((2, 3)));
        assert!(mv.is_capture());
    }

    #[test]
    fn capture_removes_exactly_the_midpoint() {
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        board.set_value_at((2, 3), CellValue::RedMan);
        board.set_value_at((4, 5), CellValue::RedMan);

        let mv = check_move(&board, Side::Black, (1, 2), (3, 4)).unwrap();
        let outcome = perform_move(&mut board, &mv);

        assert_eq!(outcome.capture, Some((2, 3)));
        assert_eq!(board.value_at((2, 3)), Some(CellValue::Empty));
        assert_eq!(board.value_at((3, 4)), Some(CellValue::BlackMan));
        assert_eq!(board.value_at((1, 2)), Some(CellValue::Empty));
        assert_eq!(board.piece_count(Side::Black), 1);
        assert_eq!(board.piece_count(Side::Red), 1);
    }

    #[test]
    fn capture_into_far_row_crowns_the_man() {
        // Black man at (2,5), Red man at (3,6): the jump to (4,7) captures
        // (3,6) and lands on Black's crowning row.
        let mut board = Board::empty();
        board.set_value_at((2, 5), CellValue::BlackMan);
        board.set_value_at((3, 6), CellValue::RedMan);

        let mv = check_move(&board, Side::Black, (2, 5), (4, 7)).unwrap();
        assert_eq!(mv.capture(), Some((3, 6)));

        let outcome = perform_move(&mut board, &mv);
        assert!(outcome.promoted);
        assert_eq!(board.value_at((4, 7)), Some(CellValue::BlackKing));
        assert_eq!(board.value_at((3, 6)), Some(CellValue::Empty));
    }

    #[test]
    fn red_promotes_on_row_zero_and_kings_stay_kings() {
        let mut board = Board::empty();
        board.set_value_at((2, 1), CellValue::RedMan);
        let mv = check_move(&board, Side::Red, (2, 1), (1, 0)).unwrap();
        assert!(perform_move(&mut board, &mv).promoted);
        assert_eq!(board.value_at((1, 0)), Some(CellValue::RedKing));

        // moving the king away from the crowning row keeps it a king
        let mv = check_move(&board, Side::Red, (1, 0), (0, 1)).unwrap();
        let outcome = perform_move(&mut board, &mv);
        assert!(!outcome.promoted);
        assert_eq!(board.value_at((0, 1)), Some(CellValue::RedKing));
    }

    #[test]
    fn single_man_enumerates_two_forward_steps() {
        let mut board = Board::empty();
        board.set_value_at((1, 0), CellValue::BlackMan);

        let moves = legal_moves(&board, Side::Black);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.from == (1, 0) && !m.is_jump()));
        let targets: Vec<(i32, i32)> = moves.iter().map(|m| m.to).collect();
        assert!(targets.contains(&(0, 1)));
        assert!(targets.contains(&(2, 1)));
    }

    #[test]
    fn forced_capture_chain_is_detected() {
        // Black man at (1,2), Red men at (2,3) and (4,5). After taking (2,3)
        // by jumping to (3,4), a further capture of (4,5) is available.
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        board.set_value_at((2, 3), CellValue::RedMan);
        board.set_value_at((4, 5), CellValue::RedMan);

        let mv = check_move(&board, Side::Black, (1, 2), (3, 4)).unwrap();
        perform_move(&mut board, &mv);

        assert!(has_further_jump(&board, Side::Black, (3, 4)));

        let mv = check_move(&board, Side::Black, (3, 4), (5, 6)).unwrap();
        perform_move(&mut board, &mv);
        assert!(!has_further_jump(&board, Side::Black, (5, 6)));
        assert_eq!(board.piece_count(Side::Red), 0);
    }

    #[test]
    fn winner_needs_a_bare_side() {
        let mut board = Board::empty();
        assert!(!game_over(&Board::new()));
        board.set_value_at((1, 2), CellValue::BlackMan);
        assert_eq!(winner(&board), Some(Side::Black));
        assert!(game_over(&board));

        board.set_value_at((2, 5), CellValue::RedKing);
        assert_eq!(winner(&board), None);
        assert!(!game_over(&board));
    }

    #[test]
    fn enumeration_covers_the_opening_position() {
        let board = Board::new();
        // each side opens with seven single steps from its front row
        assert_eq!(legal_moves(&board, Side::Black).len(), 7);
        assert_eq!(legal_moves(&board, Side::Red).len(), 7);
    }
}
