use log::debug;
use serde::Serialize;

use crate::error::{Result, TourError};
use crate::Graph;

/// Pending half of an edge being drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    /// Node slot clicked first, waiting for the second click.
    OnePicked(u32),
}

/// What a click did, so the renderer can arm/disarm nodes and redraw edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClickOutcome {
    Armed { node: String },
    /// Same node clicked twice; the selection was dropped.
    Disarmed { node: String },
    EdgeAdded { edge: u32, a: String, b: String },
    /// The pair was already connected; nothing was added.
    EdgeExists { edge: u32, pending: String },
    EdgeRemoved { edge: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Selection {
        self.state
    }

    /// Id of the armed node, if any.
    pub fn pending<'g>(&self, g: &'g Graph) -> Option<&'g str> {
        match self.state {
            Selection::OnePicked(slot) => g.node_at(slot).map(|n| n.id.as_str()),
            Selection::Idle => None,
        }
    }

    pub fn click_node(&mut self, g: &mut Graph, id: &str) -> Result<ClickOutcome> {
        let slot = g.node_slot(id).ok_or_else(|| TourError::UnknownNode(id.to_string()))?;
        let pending = match self.state {
            Selection::OnePicked(p) if g.node_at(p).is_some() => Some(p),
            _ => None,
        };
        let outcome = match pending {
            None => {
                self.state = Selection::OnePicked(slot);
                ClickOutcome::Armed { node: id.to_string() }
            }
            Some(p) if p == slot => {
                self.state = Selection::Idle;
                ClickOutcome::Disarmed { node: id.to_string() }
            }
            Some(p) => {
                let first = g.node_at(p).map(|n| n.id.clone()).unwrap_or_default();
                let existed = g.edge_between(&first, id);
                self.state = Selection::Idle;
                match existed {
                    Some(edge) => ClickOutcome::EdgeExists { edge, pending: first },
                    None => {
                        let edge = g.add_edge_slots(p, slot)?;
                        ClickOutcome::EdgeAdded { edge, a: first, b: id.to_string() }
                    }
                }
            }
        };
        debug!("click node {}: {:?}", id, outcome);
        Ok(outcome)
    }

    /// Remove the clicked edge. The pending node, if any, stays armed.
    pub fn click_edge(&mut self, g: &mut Graph, edge: u32) -> Result<ClickOutcome> {
        if !g.remove_edge(edge) {
            return Err(TourError::UnknownEdge(edge));
        }
        debug!("click edge {}: removed", edge);
        Ok(ClickOutcome::EdgeRemoved { edge })
    }

    /// Drop every edge and the pending node.
    pub fn reset(&mut self, g: &mut Graph) {
        g.clear_edges();
        self.clear();
    }

    pub fn clear(&mut self) {
        self.state = Selection::Idle;
    }
}
