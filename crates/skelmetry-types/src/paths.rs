//! Path decomposition of a skeleton's edge graph.

// Vertex indices are u32 by construction; volumes with more than 4B
// skeleton vertices are out of scope.
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashSet;

/// A depth-first traversal frame.
struct Frame {
    vertex: u32,
    next: usize,
    extended: bool,
}

/// Decomposes an undirected edge graph into maximal simple walks.
///
/// Per connected component the walk is rooted at the smallest-index
/// degree-1 vertex, falling back to the smallest index in the component
/// when every vertex has degree >= 2. Neighbors are explored in ascending
/// index order and a path (the root-to-leaf traversal stack) is emitted at
/// every dead end, so each edge appears in at least one path and
/// consecutive path vertices are always graph-adjacent.
pub(crate) fn decompose_paths(vertex_count: usize, edges: &[[u32; 2]]) -> Vec<Vec<u32>> {
    let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
    for &[a, b] in edges {
        if a == b {
            continue;
        }
        let (a_idx, b_idx) = (a as usize, b as usize);
        if a_idx >= vertex_count || b_idx >= vertex_count {
            continue;
        }
        adjacency[a_idx].push(b);
        adjacency[b_idx].push(a);
    }
    for neighbors in &mut adjacency {
        neighbors.sort_unstable();
        neighbors.dedup();
    }

    let mut paths = Vec::new();
    let mut component_seen = vec![false; vertex_count];
    let mut used_edges: HashSet<(u32, u32)> = HashSet::new();

    for start in 0..vertex_count {
        if component_seen[start] {
            continue;
        }
        let component = collect_component(start as u32, &adjacency, &mut component_seen);

        if adjacency[start].is_empty() && component.len() == 1 {
            paths.push(vec![start as u32]);
            continue;
        }

        let root = component
            .iter()
            .copied()
            .find(|&v| adjacency[v as usize].len() == 1)
            .unwrap_or(start as u32);

        walk_from(root, &adjacency, &mut used_edges, &mut paths);
    }

    paths
}

/// Gathers one connected component in ascending discovery order.
fn collect_component(start: u32, adjacency: &[Vec<u32>], seen: &mut [bool]) -> Vec<u32> {
    let mut component = Vec::new();
    let mut stack = vec![start];
    seen[start as usize] = true;
    while let Some(v) = stack.pop() {
        component.push(v);
        for &w in &adjacency[v as usize] {
            if !seen[w as usize] {
                seen[w as usize] = true;
                stack.push(w);
            }
        }
    }
    component.sort_unstable();
    component
}

/// Iterative DFS emitting one path per dead end.
fn walk_from(
    root: u32,
    adjacency: &[Vec<u32>],
    used_edges: &mut HashSet<(u32, u32)>,
    paths: &mut Vec<Vec<u32>>,
) {
    let mut path = vec![root];
    let mut stack = vec![Frame {
        vertex: root,
        next: 0,
        extended: false,
    }];

    while let Some(top) = stack.last_mut() {
        let v = top.vertex;
        let neighbors = &adjacency[v as usize];
        let mut advanced = false;

        while top.next < neighbors.len() {
            let w = neighbors[top.next];
            top.next += 1;
            if used_edges.insert(edge_key(v, w)) {
                top.extended = true;
                path.push(w);
                stack.push(Frame {
                    vertex: w,
                    next: 0,
                    extended: false,
                });
                advanced = true;
                break;
            }
        }

        if !advanced {
            if let Some(frame) = stack.pop() {
                if !frame.extended && path.len() >= 2 {
                    paths.push(path.clone());
                }
            }
            path.pop();
        }
    }
}

const fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_set(edges: &[[u32; 2]]) -> HashSet<(u32, u32)> {
        edges.iter().map(|&[a, b]| edge_key(a, b)).collect()
    }

    fn covered_edges(paths: &[Vec<u32>]) -> HashSet<(u32, u32)> {
        let mut covered = HashSet::new();
        for path in paths {
            for pair in path.windows(2) {
                covered.insert(edge_key(pair[0], pair[1]));
            }
        }
        covered
    }

    #[test]
    fn test_simple_chain() {
        let paths = decompose_paths(4, &[[0, 1], [1, 2], [2, 3]]);
        assert_eq!(paths, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_chain_reversed_edges() {
        let paths = decompose_paths(4, &[[3, 2], [1, 0], [2, 1]]);
        assert_eq!(paths, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_branching_tree_covers_all_edges() {
        // A Y-shaped tree: 0-1-2 with branches 2-3 and 2-4.
        let edges = [[0, 1], [1, 2], [2, 3], [2, 4]];
        let paths = decompose_paths(5, &edges);

        assert_eq!(covered_edges(&paths), edge_set(&edges));
        for path in &paths {
            assert_eq!(path[0], 0, "all walks start at the smallest leaf");
            for pair in path.windows(2) {
                assert!(edge_set(&edges).contains(&edge_key(pair[0], pair[1])));
            }
        }
    }

    #[test]
    fn test_two_components() {
        let edges = [[0, 1], [2, 3]];
        let paths = decompose_paths(4, &edges);
        assert_eq!(paths, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_isolated_vertex() {
        let paths = decompose_paths(3, &[[1, 2]]);
        assert_eq!(paths, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_cycle_covered() {
        // No leaf: the walk roots at the smallest index.
        let edges = [[0, 1], [1, 2], [2, 0]];
        let paths = decompose_paths(3, &edges);
        assert_eq!(covered_edges(&paths), edge_set(&edges));
        assert_eq!(paths[0][0], 0);
    }

    #[test]
    fn test_deterministic() {
        let edges = [[0, 1], [1, 2], [2, 3], [1, 4], [4, 5]];
        let a = decompose_paths(6, &edges);
        let b = decompose_paths(6, &edges);
        assert_eq!(a, b);
    }

    #[test]
    fn test_self_loops_and_out_of_range_ignored() {
        let paths = decompose_paths(2, &[[0, 0], [0, 1], [1, 7]]);
        assert_eq!(paths, vec![vec![0, 1]]);
    }
}
