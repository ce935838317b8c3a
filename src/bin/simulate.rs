use std::io::Write;

use draughts::game::{Game, GameStatus};
use draughts::piece::Side;

const GAMES: usize = 200;
const MAX_TICKS: u32 = 4000;

struct Tally {
    black_wins: u32,
    red_wins: u32,
    unfinished: u32,
    total_moves: u64,
    total_captures: u64,
}

/// One random-vs-random game: final status, completed moves, pieces captured.
fn play_game() -> (GameStatus, u32, u32) {
    let mut game = Game::random_vs_random();
    let mut ticks = 0;
    while game.status() == GameStatus::InProgress && ticks < MAX_TICKS {
        game.advance(None);
        ticks += 1;
    }
    let remaining =
        game.board().piece_count(Side::Black) + game.board().piece_count(Side::Red);
    (game.status(), game.moves_played(), 24 - remaining as u32)
}

fn main() {
    println!("=== Random self-play simulation (built {}) ===", env!("BUILD_TIMESTAMP"));
    println!("Games: {GAMES}, tick cap per game: {MAX_TICKS}\n");

    let mut tally = Tally {
        black_wins: 0,
        red_wins: 0,
        unfinished: 0,
        total_moves: 0,
        total_captures: 0,
    };

    for i in 0..GAMES {
        let (status, moves, captures) = play_game();
        match status {
            GameStatus::Won(Side::Black) => tally.black_wins += 1,
            GameStatus::Won(Side::Red) => tally.red_wins += 1,
            GameStatus::InProgress => tally.unfinished += 1,
        }
        tally.total_moves += u64::from(moves);
        tally.total_captures += u64::from(captures);

        if (i + 1) % 50 == 0 {
            print!("  {} / {GAMES} games played...\r", i + 1);
            std::io::stdout().flush().ok();
        }
    }

    let decided = tally.black_wins + tally.red_wins;
    println!("\n--- Results ---\n");
    println!("  Black wins: {}", tally.black_wins);
    println!("  Red wins:   {}", tally.red_wins);
    println!("  Unfinished (hit tick cap): {}", tally.unfinished);
    if decided > 0 {
        println!(
            "  Black win rate among decided games: {:.1}%",
            100.0 * f64::from(tally.black_wins) / f64::from(decided)
        );
    }
    println!(
        "  Average game length: {:.1} moves",
        tally.total_moves as f64 / GAMES as f64
    );
    println!(
        "  Average captures per game: {:.1} of 24 pieces",
        tally.total_captures as f64 / GAMES as f64
    );
}
