//! Assembly of recorded combinations into output moves.

mod assembler;

pub use assembler::{assemble_move, assemble_moves};
