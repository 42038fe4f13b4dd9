use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node { id: id.into(), x, y }
    }
}

/// Undirected edge between two node slots. `a` is the endpoint that was
/// picked first; uniqueness is enforced on the unordered pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    #[inline]
    pub fn key(&self) -> (u32, u32) {
        pair_key(self.a, self.b)
    }
}

#[inline]
pub fn pair_key(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
