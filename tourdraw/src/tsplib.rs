//! Reader for the coordinate part of TSPLIB files.
//!
//! Only `NODE_COORD_SECTION` is interpreted. Header lines before it are
//! skipped (apart from `NAME`, which is reported back), and the section ends
//! at a line reading `EOF` or at the first blank line.

use std::collections::HashSet;

use crate::error::{Result, TourError};
use crate::geometry::limits;
use crate::model::Node;

pub const COORD_SECTION: &str = "NODE_COORD_SECTION";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Instance {
    pub name: Option<String>,
    pub nodes: Vec<Node>,
}

pub fn parse(content: &str) -> Result<Instance> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines
        .iter()
        .position(|l| l.trim() == COORD_SECTION)
        .ok_or(TourError::MissingCoordSection)?;
    let name = lines[..start].iter().find_map(|l| header_value(l, "NAME"));

    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    for (i, raw) in lines.iter().enumerate().skip(start + 1) {
        let line = raw.trim();
        if line.is_empty() || line == "EOF" {
            break;
        }
        let lineno = i + 1;
        let node = parse_coord_line(line, lineno)?;
        if !seen.insert(node.id.clone()) {
            return Err(TourError::DuplicateId(node.id));
        }
        if nodes.len() >= limits::MAX_NODES {
            return Err(TourError::LimitExceeded { what: "node", limit: limits::MAX_NODES });
        }
        nodes.push(node);
    }
    Ok(Instance { name, nodes })
}

fn parse_coord_line(line: &str, lineno: usize) -> Result<Node> {
    let bad = |reason: String| TourError::TsplibLine { line: lineno, reason };
    let mut fields = line.split_whitespace();
    let (Some(id), Some(x), Some(y)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(bad("expected 'id x y'".to_string()));
    };
    if !limits::valid_id(id) {
        return Err(bad(format!("node id longer than {} bytes", limits::MAX_ID_LEN)));
    }
    let coord = |s: &str| -> Result<f64> {
        match s.parse::<f64>() {
            Ok(v) if limits::in_coord_bounds(v) => Ok(v),
            Ok(_) => Err(bad(format!("coordinate '{}' out of range", s))),
            Err(_) => Err(bad(format!("'{}' is not a number", s))),
        }
    };
    Ok(Node::new(id, coord(x)?, coord(y)?))
}

// "KEY : value" or "KEY: value"
fn header_value(line: &str, key: &str) -> Option<String> {
    let (k, v) = line.split_once(':')?;
    (k.trim() == key).then(|| v.trim().to_string()).filter(|v| !v.is_empty())
}
