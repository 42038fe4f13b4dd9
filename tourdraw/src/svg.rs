use crate::Graph;

pub fn to_svg_paths_impl(g: &Graph) -> Vec<String> {
    let mut paths = Vec::with_capacity(g.edge_count());
    for (_, e) in g.edges() {
        let (Some(a), Some(b)) = (g.node_at(e.a), g.node_at(e.b)) else {
            continue;
        };
        paths.push(format!("M {} {} L {} {}", a.x, a.y, b.x, b.y));
    }
    paths
}
