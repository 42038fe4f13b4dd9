use proptest::prelude::*;
use std::collections::HashSet;
use tourdraw::algorithms::selection::ClickOutcome;
use tourdraw::algorithms::tour_check::{is_hamiltonian_cycle, is_hamiltonian_path};
use tourdraw::model::Node;
use tourdraw::{Editor, Graph};

#[derive(Clone, Debug)]
enum Op {
    ClickNode { idx: u16 },
    ClickEdge { idx: u16 },
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => any::<u16>().prop_map(|idx| Op::ClickNode { idx }),
        2 => any::<u16>().prop_map(|idx| Op::ClickEdge { idx }),
        1 => Just(Op::Reset),
    ]
}

fn editor_with(n: usize) -> Editor {
    let mut ed = Editor::new();
    let nodes = (0..n)
        .map(|i| Node::new(i.to_string(), (i % 7) as f64 * 10.0, (i / 7) as f64 * 10.0))
        .collect();
    ed.seed(nodes).unwrap();
    ed
}

fn apply_op(ed: &mut Editor, op: Op) {
    match op {
        Op::ClickNode { idx } => {
            let n = ed.graph().node_count();
            let id = (idx as usize % n).to_string();
            let edges_before = ed.graph().edge_count();
            let out = ed.click_node(&id).unwrap();
            let delta = ed.graph().edge_count() as i64 - edges_before as i64;
            match out {
                ClickOutcome::EdgeAdded { .. } => assert_eq!(delta, 1),
                _ => assert_eq!(delta, 0),
            }
        }
        Op::ClickEdge { idx } => {
            let ids = ed.graph().get_edge_arrays().ids;
            if ids.is_empty() {
                return;
            }
            let pending = ed.pending().map(str::to_string);
            let eid = ids[idx as usize % ids.len()];
            let before = ed.graph().edge_count();
            ed.click_edge(eid).unwrap();
            assert_eq!(ed.graph().edge_count(), before - 1);
            assert!(ed.graph().get_edge(eid).is_none());
            assert_eq!(ed.pending().map(str::to_string), pending);
        }
        Op::Reset => ed.reset(),
    }
}

fn assert_invariants(g: &Graph) {
    let mut pairs = HashSet::new();
    let ea = g.get_edge_arrays();
    assert_eq!(ea.ids.len(), g.edge_count());
    for i in 0..ea.ids.len() {
        let a = ea.endpoints[2 * i];
        let b = ea.endpoints[2 * i + 1];
        assert!(g.node_at(a).is_some(), "edge {} missing node {}", i, a);
        assert!(g.node_at(b).is_some(), "edge {} missing node {}", i, b);
        assert_ne!(a, b, "edge {} is a self loop", i);
        assert!(pairs.insert((a.min(b), a.max(b))), "duplicate pair {}-{}", a, b);
    }
}

// Brute force over the edge set: one connected component where every
// degree is two, with as many edges as nodes.
fn reference_cycle(g: &Graph) -> bool {
    let n = g.node_count();
    if n < 3 || g.edge_count() != n {
        return false;
    }
    let mut deg = vec![0usize; n];
    let mut parent: Vec<usize> = (0..n).collect();
    fn find(p: &mut Vec<usize>, x: usize) -> usize {
        let mut r = x;
        while p[r] != r {
            r = p[r];
        }
        p[x] = r;
        r
    }
    for (_, e) in g.edges() {
        deg[e.a as usize] += 1;
        deg[e.b as usize] += 1;
        let (ra, rb) = (find(&mut parent, e.a as usize), find(&mut parent, e.b as usize));
        parent[ra] = rb;
    }
    let root = find(&mut parent, 0);
    deg.iter().all(|&d| d == 2) && (0..n).all(|i| find(&mut parent, i) == root)
}

fn permutation_strategy() -> impl Strategy<Value = Vec<usize>> {
    (3usize..40).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
}

// Sizes of both loops are at least three.
fn split_strategy() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (3usize..20, 3usize..20).prop_flat_map(|(a, b)| (Just(a), Just((0..a + b).collect::<Vec<_>>()).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]

    #[test]
    fn click_sequences_keep_graph_consistent(n in 2usize..12, seq in prop::collection::vec(op_strategy(), 1..80)) {
        let mut ed = editor_with(n);
        for op in seq {
            apply_op(&mut ed, op);
            assert_invariants(ed.graph());
            prop_assert_eq!(is_hamiltonian_cycle(ed.graph()), reference_cycle(ed.graph()));
        }
    }

    #[test]
    fn any_visiting_order_closes_into_a_cycle(perm in permutation_strategy()) {
        let n = perm.len();
        let mut ed = editor_with(n);
        for i in 0..n {
            ed.click_node(&perm[i].to_string()).unwrap();
            ed.click_node(&perm[(i + 1) % n].to_string()).unwrap();
            if i + 2 == n {
                prop_assert!(is_hamiltonian_path(ed.graph()));
            }
        }
        prop_assert!(is_hamiltonian_cycle(ed.graph()));
        prop_assert!(ed.cost_readout().display.is_some());
    }

    #[test]
    fn splitting_into_two_loops_is_never_a_cycle((cut, perm) in split_strategy()) {
        let n = perm.len();
        let mut ed = editor_with(n);
        for (lo, hi) in [(0, cut), (cut, n)] {
            let len = hi - lo;
            for i in 0..len {
                let a = perm[lo + i].to_string();
                let b = perm[lo + (i + 1) % len].to_string();
                ed.click_node(&a).unwrap();
                ed.click_node(&b).unwrap();
            }
        }
        prop_assert_eq!(ed.graph().edge_count(), n);
        prop_assert!(!is_hamiltonian_cycle(ed.graph()));
        prop_assert_eq!(ed.cost_readout().display, None);
    }
}
