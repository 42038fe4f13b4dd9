use std::time::Instant;
use tourdraw::algorithms::tour_check::{is_hamiltonian_cycle, is_hamiltonian_path};
use tourdraw::algorithms::cost::total_cost;
use tourdraw::model::Node;
use tourdraw::Graph;

fn build_ring(n: usize) -> Graph {
    let nodes = (0..n).map(|i| {
        let a = i as f64 / n as f64 * std::f64::consts::TAU;
        Node::new(i.to_string(), 500.0 + 400.0 * a.cos(), 500.0 + 400.0 * a.sin())
    }).collect();
    let mut g = Graph::from_nodes(nodes).unwrap_or_default();
    for i in 0..n { let _ = g.add_edge(&i.to_string(), &((i + 1) % n).to_string()); }
    g
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut nodes = 100_000usize;
    let mut iters = 50usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--nodes=") { if let Ok(v)=val.parse() { nodes=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }
    let nodes = nodes.max(3);

    let mut g = build_ring(nodes);
    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let mut ok = 0usize;
    for k in 0..iters {
        // Alternate closed and open rings so both walks are timed.
        if k % 2 == 1 { let _ = g.remove_edge_between(&(nodes - 1).to_string(), "0"); }
        let t0 = Instant::now();
        let valid = if k % 2 == 0 { is_hamiltonian_cycle(&g) } else { is_hamiltonian_path(&g) };
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        if valid { ok += 1; }
        if k % 2 == 1 { let _ = g.add_edge(&(nodes - 1).to_string(), "0"); }
    }
    times_ms.sort_by(|a,b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    println!("nodes={} iters={} valid={} cost={:.2} median_ms={:.4} p90_ms={:.4}", nodes, iters, ok, total_cost(&g), med, p90);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
