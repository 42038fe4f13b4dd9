pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod presets;
pub mod tsplib;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod rescale;
}
pub mod algorithms {
    pub mod cost;
    pub mod picking;
    pub mod selection;
    pub mod tour_check;
}
mod json;
mod svg;

pub use config::{EditorConfig, TourMode};
pub use editor::{CostReadout, Editor};
pub use error::{Result, TourError};

use geometry::limits;
use model::{pair_key, Edge, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Nodes and the user-drawn undirected edges between them.
///
/// Node slots are stable for the lifetime of a node set; the whole set is
/// only ever swapped out by [`Graph::replace_nodes`]. Edge ids are slot
/// indices and stay valid until the edge is removed or the edges are cleared.
///
/// Removed edges leave an empty slot behind, so the edge table grows with
/// the number of edges ever added, not with the live count. Edge walks
/// (`edges()`, cost, picking) skip the holes; [`Graph::clear_edges`] and
/// node replacement release them.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,               // slot is index
    pub(crate) index: HashMap<String, u32>,    // id -> slot
    pub(crate) edges: Vec<Option<Edge>>,       // id is index
    pub(crate) pairs: HashMap<(u32, u32), u32>, // unordered pair -> edge id
    pub(crate) geom_ver: u64,
}

pub struct EdgeArrays {
    pub ids: Vec<u32>,
    pub endpoints: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Pick {
    #[serde(rename = "node")]
    Node { id: String, dist: f64 },
    #[serde(rename = "edge")]
    Edge { id: u32, t: f64, dist: f64 },
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            pairs: HashMap::new(),
            geom_ver: 1,
        }
    }

    /// Build a graph from a literal node list; edges start empty.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        let mut g = Graph::new();
        g.replace_nodes(nodes)?;
        Ok(g)
    }

    /// Monotonic version; increments on every node/edge mutation.
    pub fn geom_version(&self) -> u64 {
        self.geom_ver
    }

    #[inline]
    fn bump(&mut self) {
        self.geom_ver = self.geom_ver.wrapping_add(1);
    }

    // Nodes
    pub fn add_node(&mut self, id: &str, x: f64, y: f64) -> Result<u32> {
        check_node(id, x, y)?;
        if self.index.contains_key(id) {
            return Err(TourError::DuplicateId(id.to_string()));
        }
        if self.nodes.len() >= limits::MAX_NODES {
            return Err(TourError::LimitExceeded { what: "node", limit: limits::MAX_NODES });
        }
        let slot = self.nodes.len() as u32;
        self.nodes.push(Node::new(id, x, y));
        self.index.insert(id.to_string(), slot);
        self.bump();
        Ok(slot)
    }

    /// Swap in a whole new node set. Validation happens before anything is
    /// touched, so a rejected set leaves the graph as it was. Edges are
    /// cleared on success.
    pub fn replace_nodes(&mut self, nodes: Vec<Node>) -> Result<()> {
        if nodes.len() > limits::MAX_NODES {
            return Err(TourError::LimitExceeded { what: "node", limit: limits::MAX_NODES });
        }
        let mut index = HashMap::with_capacity(nodes.len());
        for (slot, n) in nodes.iter().enumerate() {
            check_node(&n.id, n.x, n.y)?;
            if index.insert(n.id.clone(), slot as u32).is_some() {
                return Err(TourError::DuplicateId(n.id.clone()));
            }
        }
        self.nodes = nodes;
        self.index = index;
        self.edges.clear();
        self.pairs.clear();
        self.bump();
        Ok(())
    }

    pub fn node_slot(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied()
    }

    pub fn node_at(&self, slot: u32) -> Option<&Node> {
        self.nodes.get(slot as usize)
    }

    pub fn get_node(&self, id: &str) -> Option<(f64, f64)> {
        self.node_slot(id)
            .and_then(|s| self.node_at(s))
            .map(|n| (n.x, n.y))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // Edges
    pub fn edge_between(&self, a: &str, b: &str) -> Option<u32> {
        let (sa, sb) = (self.node_slot(a)?, self.node_slot(b)?);
        self.pairs.get(&pair_key(sa, sb)).copied()
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_between(a, b).is_some()
    }

    /// Connect `a` and `b`. Returns the id of the new edge, or of the edge
    /// already joining the pair (in which case nothing changes).
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<u32> {
        let sa = self.node_slot(a).ok_or_else(|| TourError::UnknownNode(a.to_string()))?;
        let sb = self.node_slot(b).ok_or_else(|| TourError::UnknownNode(b.to_string()))?;
        self.add_edge_slots(sa, sb)
    }

    pub(crate) fn add_edge_slots(&mut self, sa: u32, sb: u32) -> Result<u32> {
        if sa == sb {
            let id = self.node_at(sa).map(|n| n.id.clone()).unwrap_or_default();
            return Err(TourError::SelfLoop(id));
        }
        let key = pair_key(sa, sb);
        if let Some(&eid) = self.pairs.get(&key) {
            return Ok(eid);
        }
        if self.pairs.len() >= limits::MAX_EDGES {
            return Err(TourError::LimitExceeded { what: "edge", limit: limits::MAX_EDGES });
        }
        let eid = self.edges.len() as u32;
        self.edges.push(Some(Edge { a: sa, b: sb }));
        self.pairs.insert(key, eid);
        self.bump();
        Ok(eid)
    }

    pub fn remove_edge(&mut self, id: u32) -> bool {
        let Some(slot) = self.edges.get_mut(id as usize) else { return false };
        match slot.take() {
            Some(e) => {
                self.pairs.remove(&e.key());
                self.bump();
                true
            }
            None => false,
        }
    }

    pub fn remove_edge_between(&mut self, a: &str, b: &str) -> bool {
        match self.edge_between(a, b) {
            Some(eid) => self.remove_edge(eid),
            None => false,
        }
    }

    pub fn get_edge(&self, id: u32) -> Option<Edge> {
        self.edges.get(id as usize).and_then(|e| *e)
    }

    /// Endpoint ids of an edge, in the order they were picked.
    pub fn edge_endpoints(&self, id: u32) -> Option<(&str, &str)> {
        let e = self.get_edge(id)?;
        Some((self.node_at(e.a)?.id.as_str(), self.node_at(e.b)?.id.as_str()))
    }

    /// Live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (u32, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (i as u32, e)))
    }

    pub fn edge_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn clear_edges(&mut self) {
        self.edges.clear();
        self.pairs.clear();
        self.bump();
    }

    pub fn get_node_arrays(&self) -> (Vec<String>, Vec<f64>) {
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut pos = Vec::with_capacity(self.nodes.len() * 2);
        for n in &self.nodes {
            ids.push(n.id.clone());
            pos.push(n.x);
            pos.push(n.y);
        }
        (ids, pos)
    }

    pub fn get_edge_arrays(&self) -> EdgeArrays {
        let mut ids = Vec::new();
        let mut ep = Vec::new();
        for (i, e) in self.edges() {
            ids.push(i);
            ep.push(e.a);
            ep.push(e.b);
        }
        EdgeArrays { ids, endpoints: ep }
    }

    // Picking
    pub fn pick(&self, x: f64, y: f64, tol: f64) -> Option<Pick> {
        algorithms::picking::pick_impl(self, x, y, tol)
    }

    // JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
    pub fn from_json_value(&mut self, v: serde_json::Value) -> Result<()> {
        json::from_json_impl(self, v)
    }

    // SVG
    pub fn to_svg_paths(&self) -> Vec<String> {
        svg::to_svg_paths_impl(self)
    }
}

fn check_node(id: &str, x: f64, y: f64) -> Result<()> {
    if !limits::valid_id(id) {
        return Err(TourError::OutOfRange {
            param: "id",
            min: 1.0,
            max: limits::MAX_ID_LEN as f64,
            got: id.len() as f64,
        });
    }
    if !x.is_finite() {
        return Err(TourError::NonFinite("x"));
    }
    if !y.is_finite() {
        return Err(TourError::NonFinite("y"));
    }
    for (param, v) in [("x", x), ("y", y)] {
        if !limits::in_coord_bounds(v) {
            return Err(TourError::OutOfRange {
                param,
                min: limits::COORD_MIN,
                max: limits::COORD_MAX,
                got: v,
            });
        }
    }
    Ok(())
}
