use log::info;
use shortest_path::{Edge, Graph, ShortestPath, path_cost};
use std::env;
use std::path::Path;

fn example_graph() -> Graph<String> {
    let edges = [
        ("a", "b", 2.0),
        ("a", "c", 10.0),
        ("a", "f", 3.0),
        ("b", "c", 6.0),
        ("b", "d", 7.0),
        ("c", "d", 3.0),
        ("c", "f", 5.0),
        ("d", "e", 1.0),
        ("e", "f", 0.0),
    ];
    Graph::new(
        edges
            .into_iter()
            .map(|(start, end, cost)| (start.to_string(), end.to_string(), cost)),
    )
}

fn load_graph(path: &Path, undirected: bool) -> Result<Graph<String>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let mut graph = Graph::parse_edge_list(&text)?;

    if undirected {
        let reversed: Vec<Edge<String>> = graph
            .edges()
            .iter()
            .map(|edge| Edge::new(edge.end.clone(), edge.start.clone(), edge.cost))
            .collect();
        graph = Graph::new(graph.edges().iter().cloned().chain(reversed));
    }

    info!(
        "Loaded {} with {} vertices and {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn print_help(program: &str) {
    println!("Find the cheapest path between two vertices.");
    println!();
    println!("Usage: {} [OPTIONS] [<edge list> <source> <destination>]", program);
    println!();
    println!("Without arguments, runs a built-in example graph from a to e.");
    println!("Edge list files hold one `start end [cost]` edge per line; `#` starts a comment.");
    println!();
    println!("Options:");
    println!("  --undirected   Also add the reverse of every edge in the file");
    println!("  -h, --help     Print this help");
    println!();
    println!("Set RUST_LOG=debug for search details.");
}

struct Options<'a> {
    program: &'a str,
    help: bool,
    undirected: bool,
    positional: Vec<&'a str>,
}

fn parse_args(args: &[String]) -> Options<'_> {
    let mut options = Options {
        program: args.first().map(String::as_str).unwrap_or("find_path"),
        help: false,
        undirected: false,
        positional: Vec::new(),
    };

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--undirected" => options.undirected = true,
            other => options.positional.push(other),
        }
    }
    options
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Options {
        program,
        help,
        undirected,
        positional,
    } = parse_args(&args);

    if help {
        print_help(program);
        std::process::exit(0);
    }

    let (graph, source, destination) = match positional.as_slice() {
        [] => (example_graph(), "a".to_string(), "e".to_string()),
        [path, source, destination] => (
            load_graph(Path::new(path), undirected)?,
            source.to_string(),
            destination.to_string(),
        ),
        _ => {
            eprintln!("Error: expected either no arguments or <edge list> <source> <destination>");
            eprintln!("Try '{} --help' for more information.", program);
            std::process::exit(1);
        }
    };

    let path = ShortestPath::new(&graph).find(&source, &destination)?;

    if path.is_empty() {
        println!("No path from {} to {}", source, destination);
        return Ok(());
    }

    println!("{}", path.join(" -> "));
    if let Some(cost) = path_cost(&graph, &path) {
        println!("Total cost: {}", cost);
    }

    Ok(())
}
