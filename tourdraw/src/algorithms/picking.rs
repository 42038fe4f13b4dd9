use crate::geometry::math::seg_distance_sq;
use crate::{Graph, Pick};

// Nodes win over edges so a click on a node never also hits the edges
// drawn into it.
pub fn pick_impl(g: &Graph, x: f64, y: f64, tol: f64) -> Option<Pick> {
    if !x.is_finite() || !y.is_finite() || !(tol >= 0.0) { return None; }
    let tol2 = tol*tol;
    let mut best_node: Option<(usize,f64)> = None;
    for (i, n) in g.nodes.iter().enumerate() {
        let dx=n.x-x; let dy=n.y-y; let d2=dx*dx+dy*dy;
        if d2<=tol2 && best_node.map_or(true, |(_,bd)| d2<bd) { best_node=Some((i, d2)); }
    }
    if let Some((i,d2))=best_node { return Some(Pick::Node{ id: g.nodes[i].id.clone(), dist: d2.sqrt() }); }
    let mut best_edge: Option<(u32,f64,f64)> = None;
    for (id,e) in g.edges() {
        let (Some(a), Some(b)) = (g.node_at(e.a), g.node_at(e.b)) else { continue };
        let (d2,t)=seg_distance_sq(x,y,a.x,a.y,b.x,b.y);
        if d2<=tol2 && best_edge.map_or(true, |(_,bd,_)| d2<bd) { best_edge=Some((id, d2, t)); }
    }
    if let Some((id,d2,t))=best_edge { return Some(Pick::Edge{ id, t, dist: d2.sqrt() }); }
    None
}
