//! JSON move-list files.
//!
//! A move file is a JSON array of moves, each `[[removed], [added]]` with
//! edges as `[a, b]` node-id pairs. Output files use the same layout, so a
//! combined move list can be fed back in as base moves.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::{BaseMove, OutputMove};

/// Reads base moves from a JSON file.
pub fn read_moves<P: AsRef<Path>>(path: P) -> Result<Vec<BaseMove>> {
    let file = File::open(path)?;
    parse_moves(BufReader::new(file))
}

/// Parses base moves from JSON.
///
/// # Examples
///
/// ```
/// use u_kmove::io::moves::parse_moves;
///
/// let json = r#"[[[[1, 2], [3, 4]], [[1, 3], [2, 4]]], [[[5, 6]], [[5, 7]]]]"#;
/// let moves = parse_moves(json.as_bytes()).unwrap();
/// assert_eq!(moves.len(), 2);
/// assert_eq!(moves[0].k(), 2);
/// ```
pub fn parse_moves<R: Read>(reader: R) -> Result<Vec<BaseMove>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes moves as JSON.
pub fn write_moves<W: Write>(writer: W, moves: &[OutputMove]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer(&mut writer, moves)?;
    writer.flush()?;
    Ok(())
}

/// Writes moves to a JSON file, replacing any existing file.
pub fn save_moves<P: AsRef<Path>>(path: P, moves: &[OutputMove]) -> Result<()> {
    write_moves(File::create(path)?, moves)
}
