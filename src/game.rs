use crate::board::Board;
use crate::moves::Move;
use crate::piece::Side;
use crate::player::{HumanPlayer, MoveSource, Progress, RandomPlayer};
use crate::rules;

/// Per-turn bookkeeping. `chain_from` is the pending-capture flag: the square
/// a capture chain must continue from, set while a forced continuation is
/// unresolved. `last_capture` records the most recently emptied square, for
/// diagnostics and rendering. Both are cleared at the start of every turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnState {
    pub active: Side,
    pub chain_from: Option<(i32, i32)>,
    pub last_capture: Option<(i32, i32)>,
}

impl TurnState {
    pub fn new(active: Side) -> Self {
        TurnState {
            active,
            chain_from: None,
            last_capture: None,
        }
    }

    fn begin_turn(&mut self, side: Side) {
        self.active = side;
        self.chain_from = None;
        self.last_capture = None;
    }
}

/// Terminal state of a game. Once a game is `Won` the controller stops
/// forwarding events entirely.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// The armed selection the presentation layer should highlight.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Highlight {
    pub pos: (i32, i32),
    pub side: Side,
    pub is_king: bool,
}

/// The turn controller: owns the board, alternates between the two sides'
/// move sources, and holds the game result. Black always moves first.
pub struct Game {
    board: Board,
    turn: TurnState,
    black: Box<dyn MoveSource>,
    red: Box<dyn MoveSource>,
    status: GameStatus,
    moves_played: u32,
    last_move: Option<Move>,
}

impl Game {
    pub fn new(black: Box<dyn MoveSource>, red: Box<dyn MoveSource>) -> Self {
        Game {
            board: Board::new(),
            turn: TurnState::new(Side::Black),
            black,
            red,
            status: GameStatus::InProgress,
            moves_played: 0,
            last_move: None,
        }
    }

    pub fn human_vs_human() -> Self {
        Game::new(
            Box::new(HumanPlayer::new(Side::Black)),
            Box::new(HumanPlayer::new(Side::Red)),
        )
    }

    /// A human playing Black against an automated Red.
    pub fn human_vs_random() -> Self {
        Game::new(
            Box::new(HumanPlayer::new(Side::Black)),
            Box::new(RandomPlayer::new(Side::Red)),
        )
    }

    /// Both sides automated, for self-play tooling.
    pub fn random_vs_random() -> Self {
        Game::new(
            Box::new(RandomPlayer::new(Side::Black)),
            Box::new(RandomPlayer::new(Side::Red)),
        )
    }

    /// Feed one event to the active side's move source. `input` is a pointer
    /// release resolved to a cell, or `None` for a tick driving an automated
    /// source. Completed turns reset the source, re-check for a winner and
    /// hand the turn to the other side; a side with no legal move forfeits.
    pub fn advance(&mut self, input: Option<(i32, i32)>) -> GameStatus {
        if self.status != GameStatus::InProgress {
            return self.status;
        }

        let source = match self.turn.active {
            Side::Black => self.black.as_mut(),
            Side::Red => self.red.as_mut(),
        };

        match source.advance(&mut self.board, &mut self.turn, input) {
            Progress::Pending => {}
            Progress::Complete(mv) => {
                source.reset();
                self.moves_played += 1;
                self.last_move = Some(mv);
                if let Some(side) = rules::winner(&self.board) {
                    self.status = GameStatus::Won(side);
                } else {
                    let next = self.turn.active.opposite();
                    self.turn.begin_turn(next);
                }
            }
            Progress::NoMoves => {
                self.status = GameStatus::Won(self.turn.active.opposite());
            }
        }

        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_side(&self) -> Side {
        self.turn.active
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Completed turns so far (a whole capture chain counts as one).
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// What the renderer should highlight: the active side's armed origin,
    /// with its owner and king-ness.
    pub fn highlight(&self) -> Option<Highlight> {
        let source = match self.turn.active {
            Side::Black => self.black.as_ref(),
            Side::Red => self.red.as_ref(),
        };
        source.armed().map(|pos| Highlight {
            pos,
            side: self.turn.active,
            is_king: self.board.is_king(pos, self.turn.active),
        })
    }
}
