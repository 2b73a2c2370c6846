//! File adapters.
//!
//! - [`tsplib`]: Node coordinates from TSPLIB instance files
//! - [`moves`]: JSON move lists (input base moves, output combined moves)

pub mod moves;
pub mod tsplib;

pub use moves::{read_moves, save_moves};
pub use tsplib::read_instance;
