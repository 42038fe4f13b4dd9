//! Node sets the editor can start from without loading a file.

use crate::model::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Five lettered points laid out for an 800x600 canvas.
    Pentagon,
    /// TSPLIB `burma14`, raw coordinates.
    Burma14,
}

impl Preset {
    pub fn parse(name: &str) -> Option<Preset> {
        match name {
            "pentagon" => Some(Preset::Pentagon),
            "burma14" => Some(Preset::Burma14),
            _ => None,
        }
    }

    pub fn nodes(&self) -> Vec<Node> {
        let table: &[(&str, f64, f64)] = match self {
            Preset::Pentagon => &PENTAGON,
            Preset::Burma14 => &BURMA14,
        };
        table.iter().map(|&(id, x, y)| Node::new(id, x, y)).collect()
    }
}

const PENTAGON: [(&str, f64, f64); 5] = [
    ("A", 100.0, 100.0),
    ("B", 400.0, 100.0),
    ("C", 700.0, 300.0),
    ("D", 400.0, 500.0),
    ("E", 100.0, 300.0),
];

const BURMA14: [(&str, f64, f64); 14] = [
    ("1", 164.7, 961.0),
    ("2", 164.7, 944.4),
    ("3", 200.9, 925.4),
    ("4", 223.9, 933.7),
    ("5", 252.3, 972.4),
    ("6", 220.0, 960.5),
    ("7", 204.7, 970.2),
    ("8", 172.0, 962.9),
    ("9", 163.0, 973.8),
    ("10", 140.5, 981.2),
    ("11", 165.3, 973.8),
    ("12", 215.2, 955.9),
    ("13", 194.1, 971.3),
    ("14", 200.9, 945.5),
];
