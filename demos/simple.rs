use shortest_path::{Graph, ShortestPath};

fn main() {
    // A small road network between towns, both directions per road
    let mut graph: Graph<&str> = Graph::default();
    let roads = [
        ("Ashby", "Brill", 4.0),
        ("Ashby", "Corfe", 2.0),
        ("Brill", "Corfe", 1.0),
        ("Brill", "Dent", 5.0),
        ("Corfe", "Dent", 8.0),
        ("Corfe", "Eyam", 10.0),
        ("Dent", "Eyam", 2.0),
        ("Dent", "Frome", 6.0),
        ("Eyam", "Frome", 2.0),
    ];
    for (from, to, km) in roads {
        if let Err(e) = graph.add_edge(from, to, km, true) {
            println!("Skipping road: {}", e);
        }
    }

    // Adding a road twice is reported, not applied
    if let Err(e) = graph.add_edge("Corfe", "Ashby", 3.0, true) {
        println!("Rejected: {}", e);
    }

    let solver = ShortestPath::new(&graph);

    match solver.solve(&"Ashby", &"Frome") {
        Ok(Some((km, path))) => println!("Ashby to Frome: {} ({} km)", path.join(" -> "), km),
        Ok(None) => println!("Ashby to Frome: no route"),
        Err(e) => println!("Query failed: {}", e),
    }

    println!("Distances from Ashby:");
    if let Ok(distances) = solver.distances(&"Ashby") {
        let mut sorted_distances: Vec<_> = distances.into_iter().collect();
        sorted_distances.sort_by(|a, b| a.1.total_cmp(&b.1));

        for (town, km) in sorted_distances {
            println!("  {} -> {:.1}", town, km);
        }
    }
}
