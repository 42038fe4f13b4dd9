use crate::Graph;

/// What the current edge set amounts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourShape {
    /// Closed tour; node slots in visiting order, starting at slot 0.
    Cycle(Vec<u32>),
    /// Open tour; node slots from one endpoint to the other.
    Path(Vec<u32>),
    Incomplete,
}

impl TourShape {
    pub fn classify(g: &Graph) -> TourShape {
        if let Some(order) = cycle_order(g) {
            return TourShape::Cycle(order);
        }
        if let Some(order) = path_order(g) {
            return TourShape::Path(order);
        }
        TourShape::Incomplete
    }

    pub fn order(&self) -> Option<&[u32]> {
        match self {
            TourShape::Cycle(o) | TourShape::Path(o) => Some(o),
            TourShape::Incomplete => None,
        }
    }
}

pub fn is_hamiltonian_cycle(g: &Graph) -> bool {
    cycle_order(g).is_some()
}

pub fn is_hamiltonian_path(g: &Graph) -> bool {
    path_order(g).is_some()
}

/// Visiting order if the edges form one closed loop through every node.
pub fn cycle_order(g: &Graph) -> Option<Vec<u32>> {
    let n = g.node_count();
    // A cycle over N nodes has exactly N edges.
    if n == 0 || g.edge_count() != n {
        return None;
    }
    let adj = adjacency(g);
    if adj.iter().any(|nb| nb.len() != 2) {
        return None;
    }
    walk(&adj, 0, true)
}

/// Visiting order if the edges form one open path through every node.
pub fn path_order(g: &Graph) -> Option<Vec<u32>> {
    let n = g.node_count();
    if n < 2 || g.edge_count() != n - 1 {
        return None;
    }
    let adj = adjacency(g);
    let mut start = None;
    let mut ends = 0usize;
    for (slot, nb) in adj.iter().enumerate() {
        match nb.len() {
            1 => {
                ends += 1;
                start.get_or_insert(slot as u32);
            }
            2 => {}
            _ => return None,
        }
    }
    if ends != 2 {
        return None;
    }
    walk(&adj, start?, false)
}

fn adjacency(g: &Graph) -> Vec<Vec<u32>> {
    let mut adj = vec![Vec::with_capacity(2); g.node_count()];
    for (_, e) in g.edges() {
        adj[e.a as usize].push(e.b);
        adj[e.b as usize].push(e.a);
    }
    adj
}

// Step to the neighbour we did not just come from until the walk closes
// (cycle) or runs out (path); succeed only if every slot was visited once.
fn walk(adj: &[Vec<u32>], start: u32, closed: bool) -> Option<Vec<u32>> {
    let n = adj.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut prev: Option<u32> = None;
    let mut cur = start;
    loop {
        if visited[cur as usize] {
            return None;
        }
        visited[cur as usize] = true;
        order.push(cur);
        let next = adj[cur as usize].iter().copied().find(|&v| Some(v) != prev);
        let Some(next) = next else {
            // Dead end: fine only at the far end of an open path.
            return (!closed && order.len() == n).then_some(order);
        };
        prev = Some(cur);
        cur = next;
        if closed && cur == start {
            // Early return to start means a sub-cycle.
            return (order.len() == n).then_some(order);
        }
    }
}
