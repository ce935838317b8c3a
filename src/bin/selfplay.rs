use draughts::game::{Game, GameStatus};
use draughts::piece::Side;

const MAX_TICKS: u32 = 4000;

fn main() {
    let mut game = Game::random_vs_random();
    let mut ticks = 0;

    while game.status() == GameStatus::InProgress && ticks < MAX_TICKS {
        game.advance(None);
        ticks += 1;
    }

    let result = match game.status() {
        GameStatus::Won(Side::Black) => "Black wins",
        GameStatus::Won(Side::Red) => "Red wins",
        GameStatus::InProgress => "unfinished",
    };
    eprintln!("Game over after {} moves: {result}", game.moves_played());
    if let Some(mv) = game.last_move() {
        eprintln!("Last move: {}", mv.to_notation());
    }

    // final position on stdout, for piping into inspection tooling
    match serde_json::to_string_pretty(game.board()) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("could not serialize the final board: {err}"),
    }
}
