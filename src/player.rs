// =============================================================================
// Move sources
//
// A move source produces exactly one completed move per turn, possibly across
// several suspension points: the human source suspends between pointer events
// while it waits for a selection or a forced-capture continuation, the random
// source suspends between its select and apply phases. The turn controller
// drives either through the same MoveSource trait and resets it once the turn
// completes.
// =============================================================================

use crate::board::Board;
use crate::game::TurnState;
use crate::moves::Move;
use crate::piece::Side;
use crate::rules;

/// Platform-appropriate random number in [0, 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_f64() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// The result of one advance step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Progress {
    /// The source is waiting for further input or a further phase.
    Pending,
    /// The turn's move (the last link, for a capture chain) was applied.
    Complete(Move),
    /// The side to act has no legal move at all. The controller decides what
    /// that means; the source never guesses.
    NoMoves,
}

/// One side's supplier of moves. `input` is a pointer release already resolved
/// to a board cell by the presentation layer; automated sources are driven
/// with `None`. Board mutation goes through `rules::perform_move` only.
pub trait MoveSource {
    fn advance(
        &mut self,
        board: &mut Board,
        turn: &mut TurnState,
        input: Option<(i32, i32)>,
    ) -> Progress;

    /// Return to the initial phase, clearing any recorded selection. Called by
    /// the controller exactly once after each completed turn.
    fn reset(&mut self);

    /// The currently selected origin, for highlight rendering.
    fn armed(&self) -> Option<(i32, i32)>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    /// Waiting for a click on one of the side's own pieces.
    Idle,
    /// A piece is selected; waiting for a destination or a deselect.
    Armed((i32, i32)),
    /// Mid capture chain: the origin is fixed and cannot be deselected.
    Chaining((i32, i32)),
}

/// A human-controlled side, fed resolved pointer-release cells.
pub struct HumanPlayer {
    side: Side,
    phase: Phase,
}

impl HumanPlayer {
    pub fn new(side: Side) -> Self {
        HumanPlayer {
            side,
            phase: Phase::Idle,
        }
    }

    /// Try to move from the current origin to `cell`. Illegal destinations are
    /// ignored: the phase is unchanged and nothing happens on the board.
    fn try_move(
        &mut self,
        board: &mut Board,
        turn: &mut TurnState,
        origin: (i32, i32),
        cell: (i32, i32),
    ) -> Progress {
        let Some(legal) = rules::check_move(board, self.side, origin, cell) else {
            return Progress::Pending;
        };
        let outcome = rules::perform_move(board, &legal);
        if let Some(taken) = outcome.capture {
            turn.last_capture = Some(taken);
        }

        if outcome.capture.is_some() && rules::has_further_jump(board, self.side, cell) {
            // must keep capturing with the same piece
            turn.chain_from = Some(cell);
            self.phase = Phase::Chaining(cell);
            Progress::Pending
        } else {
            turn.chain_from = None;
            Progress::Complete(Move {
                from: origin,
                to: cell,
            })
        }
    }
}

impl MoveSource for HumanPlayer {
    fn advance(
        &mut self,
        board: &mut Board,
        turn: &mut TurnState,
        input: Option<(i32, i32)>,
    ) -> Progress {
        let Some(cell) = input else {
            return Progress::Pending;
        };
        match self.phase {
            Phase::Idle => {
                if board.owns(self.side, cell) {
                    self.phase = Phase::Armed(cell);
                }
                Progress::Pending
            }
            Phase::Armed(origin) => {
                if cell == origin {
                    // deselect
                    self.phase = Phase::Idle;
                    return Progress::Pending;
                }
                self.try_move(board, turn, origin, cell)
            }
            Phase::Chaining(origin) => self.try_move(board, turn, origin, cell),
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    fn armed(&self) -> Option<(i32, i32)> {
        match self.phase {
            Phase::Idle => None,
            Phase::Armed(origin) | Phase::Chaining(origin) => Some(origin),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum AiPhase {
    Select,
    Apply,
}

/// An automated side that picks uniformly among the legal moves. It plays a
/// single jump even when a longer chain is available, unlike the human
/// source, which is held in the chain until no capture remains.
pub struct RandomPlayer {
    side: Side,
    phase: AiPhase,
    chosen: Option<Move>,
}

impl RandomPlayer {
    pub fn new(side: Side) -> Self {
        RandomPlayer {
            side,
            phase: AiPhase::Select,
            chosen: None,
        }
    }
}

impl MoveSource for RandomPlayer {
    fn advance(
        &mut self,
        board: &mut Board,
        turn: &mut TurnState,
        _input: Option<(i32, i32)>,
    ) -> Progress {
        match self.phase {
            AiPhase::Select => {
                let moves = rules::legal_moves(board, self.side);
                if moves.is_empty() {
                    return Progress::NoMoves;
                }
                let index = (random_f64() * moves.len() as f64) as usize;
                self.chosen = Some(moves[index.min(moves.len() - 1)]);
                self.phase = AiPhase::Apply;
                Progress::Pending
            }
            AiPhase::Apply => match self.chosen.take() {
                Some(mv) => {
                    if let Some(legal) = rules::check_move(board, self.side, mv.from, mv.to) {
                        let outcome = rules::perform_move(board, &legal);
                        if let Some(taken) = outcome.capture {
                            turn.last_capture = Some(taken);
                        }
                    }
                    self.phase = AiPhase::Select;
                    Progress::Complete(mv)
                }
                None => {
                    self.phase = AiPhase::Select;
                    Progress::Pending
                }
            },
        }
    }

    fn reset(&mut self) {
        self.phase = AiPhase::Select;
        self.chosen = None;
    }

    fn armed(&self) -> Option<(i32, i32)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::CellValue;

    fn turn_state(side: Side) -> TurnState {
        TurnState::new(side)
    }

    #[test]
    fn human_arms_deselects_and_moves() {
        let mut board = Board::new();
        let mut turn = turn_state(Side::Black);
        let mut player = HumanPlayer::new(Side::Black);

        // clicking an opposing piece or an empty square does not arm
        assert_eq!(player.advance(&mut board, &mut turn, Some((0, 5))), Progress::Pending);
        assert_eq!(player.armed(), None);
        assert_eq!(player.advance(&mut board, &mut turn, Some((2, 3))), Progress::Pending);
        assert_eq!(player.armed(), None);

        // arm, deselect, re-arm
        player.advance(&mut board, &mut turn, Some((1, 2)));
        assert_eq!(player.armed(), Some((1, 2)));
        player.advance(&mut board, &mut turn, Some((1, 2)));
        assert_eq!(player.armed(), None);
        player.advance(&mut board, &mut turn, Some((1, 2)));

        // an illegal destination is ignored, a legal one completes the turn
        assert_eq!(player.advance(&mut board, &mut turn, Some((1, 4))), Progress::Pending);
        let progress = player.advance(&mut board, &mut turn, Some((2, 3)));
        assert_eq!(
            progress,
            Progress::Complete(Move { from: (1, 2), to: (2, 3) })
        );
        assert_eq!(board.value_at((2, 3)), Some(CellValue::BlackMan));
    }

    #[test]
    fn human_is_held_in_the_capture_chain() {
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        board.set_value_at((2, 3), CellValue::RedMan);
        board.set_value_at((4, 5), CellValue::RedMan);
        let mut turn = turn_state(Side::Black);
        let mut player = HumanPlayer::new(Side::Black);

        player.advance(&mut board, &mut turn, Some((1, 2)));
        let progress = player.advance(&mut board, &mut turn, Some((3, 4)));

        // first jump made, but a further capture holds the turn open
        assert_eq!(progress, Progress::Pending);
        assert_eq!(player.armed(), Some((3, 4)));
        assert_eq!(turn.chain_from, Some((3, 4)));
        assert_eq!(turn.last_capture, Some((2, 3)));

        // the fixed origin cannot be deselected
        player.advance(&mut board, &mut turn, Some((3, 4)));
        assert_eq!(player.armed(), Some((3, 4)));

        // finishing the chain completes the turn
        let progress = player.advance(&mut board, &mut turn, Some((5, 6)));
        assert_eq!(
            progress,
            Progress::Complete(Move { from: (3, 4), to: (5, 6) })
        );
        assert_eq!(turn.chain_from, None);
        assert_eq!(board.piece_count(Side::Red), 0);
    }

    #[test]
    fn random_player_selects_then_applies() {
        let mut board = Board::empty();
        // a lone man on the edge has exactly one legal move: (0,1) -> (1,2)
        board.set_value_at((0, 1), CellValue::BlackMan);
        let mut turn = turn_state(Side::Black);
        let mut player = RandomPlayer::new(Side::Black);

        assert_eq!(player.advance(&mut board, &mut turn, None), Progress::Pending);
        let progress = player.advance(&mut board, &mut turn, None);
        assert_eq!(
            progress,
            Progress::Complete(Move { from: (0, 1), to: (1, 2) })
        );
        assert_eq!(board.value_at((1, 2)), Some(CellValue::BlackMan));
    }

    #[test]
    fn random_player_signals_no_moves() {
        let mut board = Board::empty();
        // red men wedged against their own back rank have nowhere to go
        board.set_value_at((0, 1), CellValue::RedMan);
        board.set_value_at((1, 0), CellValue::RedMan);
        let mut turn = turn_state(Side::Red);
        let mut player = RandomPlayer::new(Side::Red);

        assert_eq!(player.advance(&mut board, &mut turn, None), Progress::NoMoves);
    }

    #[test]
    fn random_player_stops_after_a_single_jump() {
        // same chain position the human is forced through, with the step to
        // (0,3) blocked so the jump is black's only move; the random side
        // completes after the first jump even though (4,5) is still takeable
        let mut board = Board::empty();
        board.set_value_at((1, 2), CellValue::BlackMan);
        board.set_value_at((2, 3), CellValue::RedMan);
        board.set_value_at((0, 3), CellValue::RedMan);
        board.set_value_at((4, 5), CellValue::RedMan);
        let mut turn = turn_state(Side::Black);
        let mut player = RandomPlayer::new(Side::Black);

        player.advance(&mut board, &mut turn, None);
        let progress = player.advance(&mut board, &mut turn, None);
        assert_eq!(
            progress,
            Progress::Complete(Move { from: (1, 2), to: (3, 4) })
        );
        assert_eq!(board.piece_count(Side::Red), 2);
        assert_eq!(turn.chain_from, None);
    }
}
