//! TSPLIB instance reader.
//!
//! Only the `NODE_COORD_SECTION` is read; header keywords before it are
//! skipped. Each coordinate line has the form `id x y`, and ids must run
//! 1, 2, 3, ... so that node id `k` maps to the `k`-th point. The section
//! ends at a line containing `EOF`, at a blank line, or at end of input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{KmoveError, Result};
use crate::models::Point;

const SECTION_MARKER: &str = "NODE_COORD_SECTION";
const END_MARKER: &str = "EOF";

/// Reads node coordinates from a TSPLIB instance file.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = File::open(path)?;
    parse_node_coords(BufReader::new(file))
}

/// Parses node coordinates from TSPLIB text.
///
/// Stricter than readers that number points by line position: a coordinate
/// line whose id is not the next in sequence is an error.
///
/// # Examples
///
/// ```
/// use u_kmove::io::tsplib::parse_node_coords;
///
/// let text = "NAME : square\nTYPE : TSP\nDIMENSION : 2\n\
///             EDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n\
///             1 0.0 0.0\n2 3.0 4.0\nEOF\n";
/// let points = parse_node_coords(text.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y(), 4.0);
/// ```
pub fn parse_node_coords<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut lines = reader.lines().enumerate();

    let mut found_section = false;
    for (_, line) in lines.by_ref() {
        if line?.contains(SECTION_MARKER) {
            found_section = true;
            break;
        }
    }
    if !found_section {
        return Err(KmoveError::Tsplib {
            line: 0,
            message: format!("missing {SECTION_MARKER}"),
        });
    }

    let mut points = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.contains(END_MARKER) {
            break;
        }
        let point = parse_coord_line(line, points.len() + 1).map_err(|message| {
            KmoveError::Tsplib {
                line: idx + 1,
                message,
            }
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_coord_line(line: &str, expected_id: usize) -> std::result::Result<Point, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(format!("expected `id x y`, got {} field(s)", fields.len()));
    }

    let id: usize = fields[0]
        .parse()
        .map_err(|_| format!("invalid node id `{}`", fields[0]))?;
    if id != expected_id {
        return Err(format!("node id {id} out of sequence (expected {expected_id})"));
    }

    let coord = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate `{s}`"))
    };
    Ok(Point::new(coord(fields[1])?, coord(fields[2])?))
}
