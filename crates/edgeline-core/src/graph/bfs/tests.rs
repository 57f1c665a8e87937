use crate::graph::WeightedGraph;

fn graph(triples: &[(&str, &str, f64)]) -> WeightedGraph {
    WeightedGraph::from_edges(
        triples
            .iter()
            .map(|(u, v, w)| (u.to_string(), v.to_string(), *w)),
    )
}

/// A-B(1), B-C(2), A-C(5)
fn triangle() -> WeightedGraph {
    graph(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)])
}

#[test]
fn test_same_node_is_single_node_path() {
    let g = triangle();
    for node in g.nodes() {
        assert_eq!(
            g.shortest_path_unweighted(&node, &node),
            Some(vec![node.clone()])
        );
    }
}

#[test]
fn test_equal_unknown_labels_still_single_node_path() {
    // Equality is checked before label lookup
    let g = triangle();
    assert_eq!(
        g.shortest_path_unweighted("Z", "Z"),
        Some(vec!["Z".to_string()])
    );
}

#[test]
fn test_direct_edge_beats_two_hops() {
    let g = triangle();
    assert_eq!(
        g.shortest_path_unweighted("A", "C"),
        Some(vec!["A".to_string(), "C".to_string()])
    );
}

#[test]
fn test_chain_path_in_order() {
    let g = graph(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]);
    assert_eq!(
        g.shortest_path_unweighted("A", "D"),
        Some(vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ])
    );
}

#[test]
fn test_lexicographic_tie_break() {
    // Two 2-hop routes from A to D, via B or via C; BFS discovers B first
    let g = graph(&[
        ("A", "C", 1.0),
        ("A", "B", 1.0),
        ("B", "D", 1.0),
        ("C", "D", 1.0),
    ]);
    assert_eq!(
        g.shortest_path_unweighted("A", "D"),
        Some(vec!["A".to_string(), "B".to_string(), "D".to_string()])
    );
}

#[test]
fn test_unreachable_is_none() {
    let g = graph(&[("A", "B", 1.0), ("C", "D", 1.0)]);
    assert_eq!(g.shortest_path_unweighted("A", "D"), None);
}

#[test]
fn test_unknown_label_is_none() {
    let g = triangle();
    assert_eq!(g.shortest_path_unweighted("A", "Z"), None);
    assert_eq!(g.shortest_path_unweighted("Z", "A"), None);
}

#[test]
fn test_consecutive_pairs_are_edges() {
    let g = graph(&[
        ("A", "B", 1.0),
        ("B", "C", 1.0),
        ("C", "D", 1.0),
        ("A", "E", 1.0),
        ("E", "D", 1.0),
        ("B", "E", 1.0),
    ]);
    for from in g.nodes() {
        for to in g.nodes() {
            let path = g.shortest_path_unweighted(&from, &to).unwrap();
            for pair in path.windows(2) {
                assert!(
                    g.edge_weight(&pair[0], &pair[1]).is_some(),
                    "{} -> {} is not an edge",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn test_path_length_matches_bfs_distance() {
    // Line graph: distance between endpoints is known exactly
    let g = graph(&[
        ("N0", "N1", 1.0),
        ("N1", "N2", 1.0),
        ("N2", "N3", 1.0),
        ("N3", "N4", 1.0),
    ]);
    let path = g.shortest_path_unweighted("N0", "N4").unwrap();
    assert_eq!(path.len() - 1, 4);
}
