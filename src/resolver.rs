use crate::{
    config::PlaceholderPolicy,
    errors::PolymerError,
    graph::{AtomKind, MolecularGraph},
};

/// Claims the monomer's two connection points by re-tagging its first two
/// `*` placeholders as [`AtomKind::Connection`].
pub fn resolve_connection_points(
    mut monomer: MolecularGraph,
    policy: PlaceholderPolicy,
) -> Result<MolecularGraph, PolymerError> {
    let placeholders = monomer.indices_where(|atom| atom.is_placeholder());
    if placeholders.len() < 2 {
        return Err(PolymerError::invalid_monomer(format!(
            "monomer must have at least two connection points denoted by [*], found {}",
            placeholders.len()
        )));
    }
    if placeholders.len() > 2 {
        match policy {
            PlaceholderPolicy::Reject => {
                return Err(PolymerError::invalid_monomer(format!(
                    "monomer must have exactly two connection points, found {}",
                    placeholders.len()
                )));
            }
            PlaceholderPolicy::FirstTwo => log::warn!(
                "monomer has {} connection points, using atoms {} and {}",
                placeholders.len(),
                placeholders[0],
                placeholders[1]
            ),
        }
    }
    let (head, tail) = (placeholders[0], placeholders[1]);
    // A bonded pair with other neighbors is left to the replicator, which
    // reports the offending neighbor count.
    if monomer.bond_between(head, tail).is_some()
        && monomer.degree(head)? == 1
        && monomer.degree(tail)? == 1
    {
        return Err(PolymerError::invalid_monomer(
            "connection points are bonded to each other",
        ));
    }
    monomer.atom_mut(head)?.kind = AtomKind::Connection;
    monomer.atom_mut(tail)?.kind = AtomKind::Connection;
    log::debug!("tagged connection points at atoms {head} and {tail}");
    Ok(monomer)
}
