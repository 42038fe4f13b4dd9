use crate::config::TourMode;
use crate::geometry::math::distance;
use crate::Graph;

pub fn edge_length(g: &Graph, id: u32) -> Option<f64> {
    let e = g.get_edge(id)?;
    let (a, b) = (g.node_at(e.a)?, g.node_at(e.b)?);
    Some(distance(a.x, a.y, b.x, b.y))
}

/// Sum of Euclidean lengths of all current edges; 0 when there are none.
pub fn total_cost(g: &Graph) -> f64 {
    // Float `sum` of an empty iterator is -0.0, which would print as "-0.00".
    g.edges()
        .filter_map(|(id, _)| edge_length(g, id))
        .fold(0.0, |acc, l| acc + l)
}

pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

/// Text for the cost display: `None` (blank) unless the edges have the
/// shape `mode` asks for.
pub fn cost_display(g: &Graph, mode: TourMode) -> Option<String> {
    mode.accepts(g).then(|| format_cost(total_cost(g)))
}
