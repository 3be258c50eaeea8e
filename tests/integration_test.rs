mod graph_loader;

use graph_loader::read_edge_list;
use shortest_path::{Graph, GraphError, ShortestPath, find, path_cost};
use std::path::Path;

#[test]
fn example_graph_from_file() {
    let graph = read_edge_list(Path::new("tests/test_data/example.edges"));
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.vertex_count(), 6);

    let path = find(&graph, &"a".to_string(), &"e".to_string()).unwrap();
    assert_eq!(path, vec!["a", "b", "d", "e"]);
    assert_eq!(path_cost(&graph, &path), Some(10.0));

    // Every other simple route from a to e is more expensive.
    for other in [
        vec!["a", "b", "c", "d", "e"],
        vec!["a", "c", "d", "e"],
    ] {
        let other: Vec<String> = other.into_iter().map(String::from).collect();
        assert!(path_cost(&graph, &other).unwrap() > 10.0);
    }
}

#[test]
fn grid_path_from_file() {
    let graph = read_edge_list(Path::new("tests/test_data/grid.edges"));
    let solver = ShortestPath::new(&graph);

    let (distance, path) = solver
        .solve(&"0_0".to_string(), &"11_11".to_string())
        .unwrap()
        .unwrap();

    assert!(distance > 0.0 && distance < f64::INFINITY);
    assert_eq!(path.first().map(String::as_str), Some("0_0"));
    assert_eq!(path.last().map(String::as_str), Some("11_11"));
    assert_eq!(path_cost(&graph, &path), Some(distance));

    // The island is never reached from the grid.
    assert!(solver.find(&"0_0".to_string(), &"x_1".to_string()).unwrap().is_empty());
    assert_eq!(
        solver.find(&"x_1".to_string(), &"x_2".to_string()).unwrap(),
        vec!["x_1", "x_2"]
    );
}

#[test]
fn malformed_records_are_rejected() {
    assert_eq!(
        Graph::parse_edge_list("a b 1\na\n").unwrap_err(),
        GraphError::InvalidEdgeFormat { line: 2, fields: 1 }
    );
    assert_eq!(
        Graph::try_from_records([["a", "b", "1", "2"]]).unwrap_err(),
        GraphError::InvalidEdgeFormat { line: 1, fields: 4 }
    );
}

#[test]
fn unknown_source_is_an_error() {
    let graph = read_edge_list(Path::new("tests/test_data/example.edges"));
    let err = find(&graph, &"q".to_string(), &"a".to_string()).unwrap_err();

    assert!(matches!(err, GraphError::UnknownSourceVertex(_)));
    assert_eq!(err.to_string(), "source vertex \"q\" does not exist in the graph");
}

#[test]
fn add_then_remove_restores_edges() {
    let original = read_edge_list(Path::new("tests/test_data/example.edges"));

    for both_ends in [true, false] {
        let mut graph = original.clone();
        graph
            .add_edge("e".to_string(), "a".to_string(), 4.0, both_ends)
            .unwrap();
        assert_eq!(
            graph.edge_count(),
            original.edge_count() + if both_ends { 2 } else { 1 }
        );

        graph.remove_edge(&"e".to_string(), &"a".to_string(), both_ends);
        assert_eq!(graph, original);
    }
}

#[test]
fn vertices_follow_mutation() {
    let mut graph = read_edge_list(Path::new("tests/test_data/example.edges"));

    graph
        .add_edge("e".to_string(), "g".to_string(), 1.0, false)
        .unwrap();
    assert!(graph.vertices().contains(&"g".to_string()));
    assert_eq!(graph.vertex_count(), 7);

    // Dropping d's edges drops d itself.
    for (from, to) in [("b", "d"), ("c", "d"), ("d", "e")] {
        graph.remove_edge(&from.to_string(), &to.to_string(), false);
    }
    let vertices = graph.vertices();
    assert!(!vertices.contains(&"d".to_string()));

    let expected: std::collections::HashSet<String> = graph
        .edges()
        .iter()
        .flat_map(|e| [e.start.clone(), e.end.clone()])
        .collect();
    assert_eq!(vertices.len(), expected.len());
    assert!(expected.iter().all(|v| vertices.contains(v)));

    // e is no longer reachable from a.
    assert!(find(&graph, &"a".to_string(), &"e".to_string()).unwrap().is_empty());
}
