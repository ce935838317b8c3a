pub mod board;
pub mod game;
pub mod moves;
pub mod piece;
pub mod player;
pub mod rules;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
