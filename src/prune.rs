use serde::Serialize;

use crate::{
    errors::PolymerError,
    graph::{AtomKind, MolecularGraph},
    replicate::ConnectionRecord,
    stitch::check_lengths,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PruneOutcome {
    /// Removed marker indices, in removal (descending) order.
    pub removed: Vec<usize>,
    /// Final index of the surviving head marker of copy 0.
    pub head: usize,
    /// Final index of the surviving tail marker of the last copy.
    pub tail: usize,
}

/// Deletes every internal connection marker, keeping the chain's first head
/// and last tail, then turns the two survivors back into open placeholders.
///
/// Markers are removed from the highest index down, so each removal only
/// shifts atoms above it and never a marker still waiting to be removed.
pub fn prune_connection_points(
    graph: &mut MolecularGraph,
    records: &[ConnectionRecord],
    offsets: &[usize],
) -> Result<PruneOutcome, PolymerError> {
    check_lengths(records, offsets)?;
    let mut markers: Vec<usize> = records
        .iter()
        .zip(offsets)
        .flat_map(|(record, &offset)| {
            let (head, tail) = record.global_markers(offset);
            [head, tail]
        })
        .collect();
    markers.sort_unstable_by(|a, b| b.cmp(a));

    let mut present = graph.indices_where(|atom| atom.is_connection_point());
    present.reverse();
    if present != markers {
        return Err(PolymerError::invalid_structure(format!(
            "connection markers out of sync: expected {markers:?}, found {present:?}"
        )));
    }
    let (Some(&last_tail), Some(&first_head)) = (markers.first(), markers.last()) else {
        return Err(PolymerError::invalid_input("no connection markers to prune"));
    };

    let removed = markers[1..markers.len() - 1].to_vec();
    graph.remove_atoms_descending(&removed)?;
    let head = first_head;
    let tail = last_tail - removed.len();
    for survivor in [head, tail] {
        let atom = graph.atom_mut(survivor)?;
        if atom.kind != AtomKind::Connection {
            return Err(PolymerError::invalid_structure(format!(
                "atom {survivor} is not a surviving connection marker"
            )));
        }
        atom.kind = AtomKind::Placeholder;
    }
    log::debug!(
        "pruned {} internal markers, open ends at {head} and {tail}",
        removed.len()
    );
    Ok(PruneOutcome {
        removed,
        head,
        tail,
    })
}
