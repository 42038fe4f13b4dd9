use tourdraw::algorithms::tour_check::{
    cycle_order, is_hamiltonian_cycle, is_hamiltonian_path, path_order, TourShape,
};
use tourdraw::model::Node;
use tourdraw::Graph;

fn points(n: usize) -> Graph {
    let nodes = (0..n)
        .map(|i| Node::new(format!("n{}", i), i as f64, (i * i) as f64))
        .collect();
    Graph::from_nodes(nodes).unwrap()
}

fn connect(g: &mut Graph, pairs: &[(usize, usize)]) {
    for &(a, b) in pairs {
        g.add_edge(&format!("n{}", a), &format!("n{}", b)).unwrap();
    }
}

#[test]
fn single_loops_are_cycles_for_every_size() {
    for n in 3..40 {
        let mut g = points(n);
        // Visit in a scrambled but single-loop order: 0, 2, 4, ..., then odds back down.
        let mut order: Vec<usize> = (0..n).step_by(2).collect();
        order.extend((1..n).step_by(2).rev());
        let pairs: Vec<_> = (0..n).map(|i| (order[i], order[(i + 1) % n])).collect();
        connect(&mut g, &pairs);
        assert!(is_hamiltonian_cycle(&g), "n={}", n);
        let walked = cycle_order(&g).unwrap();
        assert_eq!(walked.len(), n);
        assert_eq!(walked[0], 0);
    }
}

#[test]
fn two_disjoint_triangles_are_rejected() {
    let mut g = points(6);
    connect(&mut g, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    assert_eq!(g.edge_count(), g.node_count());
    assert!(!is_hamiltonian_cycle(&g));
    assert!(!is_hamiltonian_path(&g));
    assert_eq!(TourShape::classify(&g), TourShape::Incomplete);
}

#[test]
fn wrong_degree_rejected_even_with_matching_count() {
    // Triangle plus a pendant: 4 nodes, 4 edges, degrees 3,2,2,1.
    let mut g = points(4);
    connect(&mut g, &[(0, 1), (1, 2), (2, 0), (0, 3)]);
    assert_eq!(g.edge_count(), 4);
    assert!(!is_hamiltonian_cycle(&g));
}

#[test]
fn edge_count_mismatch_rejected() {
    let mut g = points(5);
    connect(&mut g, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert!(!is_hamiltonian_cycle(&g));
    connect(&mut g, &[(4, 0), (0, 2)]);
    assert_eq!(g.edge_count(), 6);
    assert!(!is_hamiltonian_cycle(&g));
}

#[test]
fn empty_and_tiny_graphs() {
    assert!(!is_hamiltonian_cycle(&Graph::new()));
    assert!(!is_hamiltonian_path(&Graph::new()));
    assert!(!is_hamiltonian_cycle(&points(1)));
    assert!(!is_hamiltonian_path(&points(1)));

    // Two nodes would need the same pair twice to close.
    let mut g = points(2);
    connect(&mut g, &[(0, 1), (1, 0)]);
    assert_eq!(g.edge_count(), 1);
    assert!(!is_hamiltonian_cycle(&g));
    assert!(is_hamiltonian_path(&g));
}

#[test]
fn path_requires_two_endpoints_and_full_coverage() {
    let mut g = points(5);
    connect(&mut g, &[(3, 1), (1, 0), (0, 4), (4, 2)]);
    assert_eq!(path_order(&g), Some(vec![2, 4, 0, 1, 3]));

    // Path over three nodes plus a separate edge: right count, wrong shape.
    let mut h = points(5);
    connect(&mut h, &[(0, 1), (1, 2), (3, 4)]);
    assert!(!is_hamiltonian_path(&h));

    // Star: one hub of degree 3.
    let mut s = points(4);
    connect(&mut s, &[(0, 1), (0, 2), (0, 3)]);
    assert!(!is_hamiltonian_path(&s));

    // Path of three plus a disjoint triangle: degrees and count both line up.
    let mut t = points(6);
    connect(&mut t, &[(0, 1), (1, 2), (3, 4), (4, 5), (5, 3)]);
    assert_eq!(t.edge_count(), t.node_count() - 1);
    assert!(!is_hamiltonian_path(&t));
}

#[test]
fn closing_a_path_turns_it_into_a_cycle() {
    let mut g = points(4);
    connect(&mut g, &[(0, 1), (1, 2), (2, 3)]);
    assert!(matches!(TourShape::classify(&g), TourShape::Path(_)));
    connect(&mut g, &[(3, 0)]);
    assert_eq!(TourShape::classify(&g), TourShape::Cycle(vec![0, 1, 2, 3]));
    assert_eq!(TourShape::classify(&g).order().map(|o| o.len()), Some(4));
}
