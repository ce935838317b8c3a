use crate::board::Board;
use crate::game::{Game, GameStatus};
use crate::piece::{CellValue, Side};
use crate::rules;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct MoveJson {
    from: [i32; 2],
    to: [i32; 2],
    jump: bool,
}

#[derive(Serialize)]
struct HighlightJson {
    pos: [i32; 2],
    side: String,
    is_king: bool,
}

#[derive(Serialize)]
struct BoardState {
    cells: Vec<Vec<String>>,
    active_side: String,
    status: String,
    highlight: Option<HighlightJson>,
    legal_moves: Vec<MoveJson>,
    last_move: Option<[[i32; 2]; 2]>,
    last_capture: Option<[i32; 2]>,
    moves_played: u32,
}

fn cell_to_string(value: CellValue) -> String {
    match value {
        CellValue::Empty => "Empty".to_string(),
        CellValue::BlackMan => "BlackMan".to_string(),
        CellValue::RedMan => "RedMan".to_string(),
        CellValue::Unplayable => "Unplayable".to_string(),
        CellValue::BlackKing => "BlackKing".to_string(),
        CellValue::RedKing => "RedKing".to_string(),
    }
}

fn side_to_string(side: Side) -> String {
    match side {
        Side::Black => "Black".to_string(),
        Side::Red => "Red".to_string(),
    }
}

fn status_to_string(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "InProgress".to_string(),
        GameStatus::Won(Side::Black) => "BlackWins".to_string(),
        GameStatus::Won(Side::Red) => "RedWins".to_string(),
    }
}

fn build_board_state(game: &Game) -> BoardState {
    let board: &Board = game.board();
    let cells: Vec<Vec<String>> = (0..8)
        .map(|y| {
            (0..8)
                .map(|x| cell_to_string(board.value_at((x, y)).unwrap_or(CellValue::Unplayable)))
                .collect()
        })
        .collect();

    // While a capture chain is pending only moves from its fixed origin are
    // offered; otherwise every legal move for the active side.
    let legal_moves: Vec<MoveJson> = rules::legal_moves(board, game.active_side())
        .into_iter()
        .filter(|m| match game.turn_state().chain_from {
            Some(origin) => m.from == origin,
            None => true,
        })
        .map(|m| MoveJson {
            from: [m.from.0, m.from.1],
            to: [m.to.0, m.to.1],
            jump: m.is_jump(),
        })
        .collect();

    BoardState {
        cells,
        active_side: side_to_string(game.active_side()),
        status: status_to_string(game.status()),
        highlight: game.highlight().map(|hl| HighlightJson {
            pos: [hl.pos.0, hl.pos.1],
            side: side_to_string(hl.side),
            is_king: hl.is_king,
        }),
        legal_moves,
        last_move: game
            .last_move()
            .map(|m| [[m.from.0, m.from.1], [m.to.0, m.to.1]]),
        last_capture: game.turn_state().last_capture.map(|p| [p.0, p.1]),
        moves_played: game.moves_played(),
    }
}

/// The JS-facing game handle. The frontend owns rendering, pixel-to-cell
/// mapping and frame pacing; it hands this wrapper resolved cells only.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    vs_ai: bool,
}

#[wasm_bindgen]
impl WasmGame {
    /// `vs_ai = true` pits the human (Black) against a random Red.
    #[wasm_bindgen(constructor)]
    pub fn new(vs_ai: bool) -> WasmGame {
        WasmGame {
            game: if vs_ai {
                Game::human_vs_random()
            } else {
                Game::human_vs_human()
            },
            vs_ai,
        }
    }

    pub fn reset_game(&mut self) {
        self.game = if self.vs_ai {
            Game::human_vs_random()
        } else {
            Game::human_vs_human()
        };
    }

    pub fn get_board_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&build_board_state(&self.game)).unwrap_or(JsValue::NULL)
    }

    /// A pointer release resolved to a cell by the frontend.
    pub fn click(&mut self, col: i32, row: i32) -> JsValue {
        self.game.advance(Some((col, row)));
        self.get_board_state()
    }

    /// Run the automated side's whole turn: its select and apply phases are
    /// two ticks. A human source ignores ticks, so this is a no-op while the
    /// game waits on pointer input.
    pub fn ai_step(&mut self) -> JsValue {
        let side = self.game.active_side();
        for _ in 0..2 {
            if self.game.status() != GameStatus::InProgress || self.game.active_side() != side {
                break;
            }
            self.game.advance(None);
        }
        self.get_board_state()
    }

    /// Legal destinations from one square, for hover/selection hints.
    pub fn legal_destinations(&self, col: i32, row: i32) -> JsValue {
        let targets: Vec<[i32; 2]> = rules::legal_moves(self.game.board(), self.game.active_side())
            .into_iter()
            .filter(|m| m.from == (col, row))
            .map(|m| [m.to.0, m.to.1])
            .collect();
        serde_wasm_bindgen::to_value(&targets).unwrap_or(JsValue::NULL)
    }
}
