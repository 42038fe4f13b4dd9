use crate::error::{Result, TourError};
use crate::geometry::limits;
use crate::model::Node;
use crate::Graph;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct EdgeSer {
    #[serde(default, skip_deserializing)]
    id: u32,
    source: String,
    target: String,
}

#[derive(Serialize, Deserialize)]
struct Doc {
    #[serde(default = "default_version")]
    version: u32,
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<EdgeSer>,
}

fn default_version() -> u32 {
    VERSION
}

pub fn to_json_impl(g: &Graph) -> Value {
    let edges = g
        .edges()
        .filter_map(|(id, e)| {
            Some(EdgeSer {
                id,
                source: g.node_at(e.a)?.id.clone(),
                target: g.node_at(e.b)?.id.clone(),
            })
        })
        .collect();
    let doc = Doc { version: VERSION, nodes: g.nodes.clone(), edges };
    serde_json::to_value(doc).unwrap_or(Value::Null)
}

/// Replace the whole graph from a snapshot. The document is checked in full
/// against a scratch graph first; on any error `g` is untouched. Repeated
/// pairs collapse into one edge, like a repeated click would.
pub fn from_json_impl(g: &mut Graph, v: Value) -> Result<()> {
    let doc: Doc = serde_json::from_value(v)?;
    if doc.version != VERSION {
        return Err(TourError::Json(format!("unsupported version {}", doc.version)));
    }
    if doc.edges.len() > limits::MAX_EDGES {
        return Err(TourError::LimitExceeded { what: "edge", limit: limits::MAX_EDGES });
    }
    let mut fresh = Graph::from_nodes(doc.nodes)?;
    for e in &doc.edges {
        fresh.add_edge(&e.source, &e.target)?;
    }
    fresh.geom_ver = g.geom_ver.wrapping_add(1);
    *g = fresh;
    Ok(())
}
