use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::{errors::PolymerError, graph::MolecularGraph};

/// Components as sorted atom lists, ordered by their smallest atom.
pub fn connected_components(graph: &MolecularGraph) -> Vec<Vec<usize>> {
    let adjacency = graph.adjacency();
    let mut components = Vec::new();
    let mut visited = AHashSet::new();
    for id in 0..graph.atom_count() {
        if !visited.insert(id) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &(next, _) in &adjacency[node] {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }
    components
}

/// Breadth-first shortest path from `start` to `end`, inclusive of both.
pub fn shortest_path(
    graph: &MolecularGraph,
    start: usize,
    end: usize,
) -> Result<Option<Vec<usize>>, PolymerError> {
    graph.atom(start)?;
    graph.atom(end)?;
    if start == end {
        return Ok(Some(vec![start]));
    }
    let adjacency = graph.adjacency();
    let mut queue = VecDeque::new();
    let mut parents = AHashMap::new();
    let mut seen = AHashSet::new();
    queue.push_back(start);
    seen.insert(start);
    let mut found = false;
    while let Some(node) = queue.pop_front() {
        for &(next, _) in &adjacency[node] {
            if seen.insert(next) {
                parents.insert(next, node);
                if next == end {
                    found = true;
                    break;
                }
                queue.push_back(next);
            }
        }
        if found {
            break;
        }
    }
    if !found {
        return Ok(None);
    }
    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        if parent == start {
            break;
        }
        current = parent;
    }
    path.reverse();
    Ok(Some(path))
}
