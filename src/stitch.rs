use serde::Serialize;

use crate::{
    errors::PolymerError,
    graph::{BondOrder, MolecularGraph},
    replicate::ConnectionRecord,
};

/// A bond joining copy `copy` to copy `copy + 1`, in global indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StitchBond {
    pub copy: usize,
    pub tail_neighbor: usize,
    pub head_neighbor: usize,
}

/// Bonds the tail neighbor of each copy to the head neighbor of the next.
/// Connection markers are left in place for the pruner.
pub fn stitch_chain(
    graph: &mut MolecularGraph,
    records: &[ConnectionRecord],
    offsets: &[usize],
) -> Result<Vec<StitchBond>, PolymerError> {
    check_lengths(records, offsets)?;
    let mut stitches = Vec::with_capacity(records.len().saturating_sub(1));
    for (copy, (pair, offset)) in records.windows(2).zip(offsets.windows(2)).enumerate() {
        let tail_neighbor = offset[0] + pair[0].tail_neighbor;
        let head_neighbor = offset[1] + pair[1].head_neighbor;
        // endpoints sit in different copies, so they cannot be bonded yet
        graph.push_bond(tail_neighbor, head_neighbor, BondOrder::Single)?;
        stitches.push(StitchBond {
            copy,
            tail_neighbor,
            head_neighbor,
        });
    }
    log::debug!("added {} stitch bonds", stitches.len());
    Ok(stitches)
}

pub(crate) fn check_lengths(
    records: &[ConnectionRecord],
    offsets: &[usize],
) -> Result<(), PolymerError> {
    if records.len() != offsets.len() {
        return Err(PolymerError::invalid_input(format!(
            "{} connection records but {} offsets",
            records.len(),
            offsets.len()
        )));
    }
    Ok(())
}
