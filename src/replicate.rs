use serde::{Deserialize, Serialize};

use crate::{errors::PolymerError, graph::MolecularGraph};

/// Connection points of one monomer copy in that copy's local indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub head: usize,
    pub head_neighbor: usize,
    pub tail: usize,
    pub tail_neighbor: usize,
}

impl ConnectionRecord {
    /// Global indices of (head, tail) once the copy sits at `offset`.
    pub fn global_markers(&self, offset: usize) -> (usize, usize) {
        (self.head + offset, self.tail + offset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonomerCopy {
    pub graph: MolecularGraph,
    pub record: ConnectionRecord,
}

/// Produces `degree` independent copies of a tagged monomer, each with its
/// connection record.
pub fn replicate(tagged: &MolecularGraph, degree: usize) -> Result<Vec<MonomerCopy>, PolymerError> {
    if degree == 0 {
        return Err(PolymerError::invalid_input("degree must be a positive integer"));
    }
    let mut copies = Vec::with_capacity(degree);
    for copy in 0..degree {
        let graph = tagged.clone();
        let record = connection_record(&graph, copy)?;
        copies.push(MonomerCopy { graph, record });
    }
    log::debug!(
        "replicated monomer of {} atoms into {degree} copies",
        tagged.atom_count()
    );
    Ok(copies)
}

/// Locates the two connection markers of one copy. The lower index is the
/// head and the higher index the tail.
pub fn connection_record(
    graph: &MolecularGraph,
    copy: usize,
) -> Result<ConnectionRecord, PolymerError> {
    let markers = graph.indices_where(|atom| atom.is_connection_point());
    let [head, tail] = markers[..] else {
        return Err(PolymerError::MalformedCopy {
            copy,
            found: markers.len(),
        });
    };
    Ok(ConnectionRecord {
        head,
        head_neighbor: sole_neighbor(graph, copy, head)?,
        tail,
        tail_neighbor: sole_neighbor(graph, copy, tail)?,
    })
}

fn sole_neighbor(graph: &MolecularGraph, copy: usize, atom: usize) -> Result<usize, PolymerError> {
    let neighbors = graph.neighbors(atom)?;
    match neighbors[..] {
        [neighbor] => Ok(neighbor),
        _ => Err(PolymerError::DisconnectedConnectionPoint {
            copy,
            atom,
            neighbors: neighbors.len(),
        }),
    }
}
