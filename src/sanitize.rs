use ahash::AHashSet;
use serde::Serialize;

use crate::{
    errors::PolymerError,
    graph::{Atom, AtomKind, BondOrder, MolecularGraph},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    pub atoms: usize,
    pub bonds: usize,
    pub implicit_hydrogens: usize,
}

/// Validates bonds and valences after graph surgery and stores the implicit
/// hydrogen count of every atom.
pub fn sanitize(graph: &mut MolecularGraph) -> Result<SanitizeReport, PolymerError> {
    check_bonds(graph)?;
    let adjacency = graph.adjacency();
    let mut hydrogens = Vec::with_capacity(graph.atom_count());
    for (idx, atom) in graph.atoms().iter().enumerate() {
        hydrogens.push(check_atom(idx, atom, &adjacency[idx])?);
    }
    let mut report = SanitizeReport {
        atoms: graph.atom_count(),
        bonds: graph.bond_count(),
        implicit_hydrogens: 0,
    };
    for (idx, count) in hydrogens.into_iter().enumerate() {
        graph.atom_mut(idx)?.implicit_hydrogens = count;
        report.implicit_hydrogens += usize::from(count);
    }
    log::debug!(
        "sanitized graph: atoms={} bonds={} implicit_h={}",
        report.atoms,
        report.bonds,
        report.implicit_hydrogens
    );
    Ok(report)
}

pub fn bond_valence(neighbors: &[(usize, BondOrder)]) -> u32 {
    neighbors
        .iter()
        .map(|(_, order)| u32::from(order.valence()))
        .sum()
}

/// Hydrogens an atom written without brackets carries: the gap between its
/// bond valence and the lowest allowed valence that fits. Aromatic atoms
/// spend one extra unit on the ring when they have room for it.
pub fn default_hydrogens(atom: &Atom, neighbors: &[(usize, BondOrder)]) -> u8 {
    let Some(element) = atom.element_kind() else {
        return 0;
    };
    if !element.is_organic() {
        return 0;
    }
    let valences = element.valences_for_charge(atom.charge);
    let Some(&max) = valences.last() else {
        return 0;
    };
    let mut used = bond_valence(neighbors);
    if atom.aromatic && used < u32::from(max) {
        used += 1;
    }
    valences
        .iter()
        .map(|&v| u32::from(v))
        .find(|&v| v >= used)
        .map(|v| (v - used) as u8)
        .unwrap_or(0)
}

/// Hydrogen count as the atom would be written: explicit if bracketed,
/// otherwise derived from its bonds.
pub fn hydrogen_count(atom: &Atom, neighbors: &[(usize, BondOrder)]) -> u8 {
    atom.explicit_hydrogens
        .unwrap_or_else(|| default_hydrogens(atom, neighbors))
}

fn check_atom(
    idx: usize,
    atom: &Atom,
    neighbors: &[(usize, BondOrder)],
) -> Result<u8, PolymerError> {
    let element = match atom.kind {
        AtomKind::Connection => {
            return Err(PolymerError::invalid_structure(format!(
                "unresolved connection marker at atom {idx}"
            )));
        }
        AtomKind::Placeholder => return Ok(0),
        AtomKind::Element(element) => element,
    };
    let aromatic_bonds = neighbors
        .iter()
        .filter(|(_, order)| *order == BondOrder::Aromatic)
        .count();
    if atom.aromatic && aromatic_bonds < 2 {
        return Err(PolymerError::invalid_structure(format!(
            "non-ring atom {idx} marked aromatic"
        )));
    }
    if !atom.aromatic && aromatic_bonds > 0 {
        return Err(PolymerError::invalid_structure(format!(
            "aromatic bond on non-aromatic atom {idx}"
        )));
    }
    let implicit = match atom.explicit_hydrogens {
        Some(_) => 0,
        None => default_hydrogens(atom, neighbors),
    };
    let allowed = element.valences_for_charge(atom.charge);
    if let Some(&max) = allowed.last() {
        let total = bond_valence(neighbors) + u32::from(hydrogen_count(atom, neighbors));
        if total > u32::from(max) {
            return Err(PolymerError::invalid_structure(format!(
                "explicit valence for atom {idx} {}, {total}, is greater than permitted",
                element.symbol()
            )));
        }
    }
    Ok(implicit)
}

fn check_bonds(graph: &MolecularGraph) -> Result<(), PolymerError> {
    let atoms = graph.atom_count();
    let mut seen = AHashSet::with_capacity(graph.bond_count());
    for bond in graph.bonds() {
        if bond.begin >= atoms || bond.end >= atoms {
            return Err(PolymerError::invalid_structure(format!(
                "bond {}-{} references a missing atom",
                bond.begin, bond.end
            )));
        }
        if bond.begin == bond.end {
            return Err(PolymerError::invalid_structure(format!(
                "self loop on atom {}",
                bond.begin
            )));
        }
        let key = (bond.begin.min(bond.end), bond.begin.max(bond.end));
        if !seen.insert(key) {
            return Err(PolymerError::invalid_structure(format!(
                "duplicate bond between atoms {} and {}",
                key.0, key.1
            )));
        }
    }
    Ok(())
}
