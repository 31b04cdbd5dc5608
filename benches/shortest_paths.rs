use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_cost::RouteService;

// Dense random graph over all 52 letters, as adjacency text
fn random_graph_text(edge_chance: f64) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let names: Vec<char> = ('A'..='Z').chain('a'..='z').collect();
    let mut text = String::new();
    for &origin in &names {
        let mut dests = Vec::new();
        for &dest in &names {
            if dest != origin && rng.gen_bool(edge_chance) {
                dests.push(format!("{}{}", dest, rng.gen_range(1..100)));
            }
        }
        text.push_str(&format!("{}: {}\n", origin, dests.join(", ")));
    }
    text
}

fn bench_find_routes(c: &mut Criterion) {
    let service = RouteService::new();

    for (name, chance) in [("sparse", 0.1), ("dense", 0.8)] {
        let text = random_graph_text(chance);
        c.bench_function(&format!("find_routes/{}", name), |b| {
            b.iter(|| service.find_routes(Some(black_box(text.as_bytes())), "A").unwrap())
        });
    }
}

criterion_group!(benches, bench_find_routes);
criterion_main!(benches);
