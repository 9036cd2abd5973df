use crate::{errors::PolymerError, graph::MolecularGraph};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedGraph {
    pub graph: MolecularGraph,
    /// Global index of each copy's first atom; `offsets[0] == 0`.
    pub offsets: Vec<usize>,
}

/// Folds the copies into one graph, copy 0 first.
pub fn combine_copies(copies: Vec<MolecularGraph>) -> Result<CombinedGraph, PolymerError> {
    let mut iter = copies.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| PolymerError::invalid_input("no monomer copies to combine"))?;
    let (graph, offsets) = iter.fold((first, vec![0]), |(mut graph, mut offsets), copy| {
        offsets.push(graph.combine(&copy));
        (graph, offsets)
    });
    log::debug!(
        "combined {} copies into {} atoms",
        offsets.len(),
        graph.atom_count()
    );
    Ok(CombinedGraph { graph, offsets })
}
