pub use board::*;
pub use config::*;
pub use errors::*;
pub use heuristic::{best_candidate, score_position, Candidate};
pub use position::*;
pub use score::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
pub mod heuristic;
mod position;
mod score;
mod turn;
mod visualization;
