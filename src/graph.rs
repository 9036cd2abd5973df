use serde::{Deserialize, Serialize};

use crate::errors::PolymerError;

mod types;

pub use types::{Atom, AtomKind, Bond, BondOrder};

/// Atoms addressed by their position in the atom vector, bonds as unordered
/// index pairs. Removing an atom shifts every higher index down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MolecularGraph {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MolecularGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom(&self, index: usize) -> Result<&Atom, PolymerError> {
        self.atoms
            .get(index)
            .ok_or_else(|| PolymerError::invalid_input(format!("atom {index} does not exist")))
    }

    pub fn atom_mut(&mut self, index: usize) -> Result<&mut Atom, PolymerError> {
        self.atoms
            .get_mut(index)
            .ok_or_else(|| PolymerError::invalid_input(format!("atom {index} does not exist")))
    }

    /// Appends an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub fn add_bond(
        &mut self,
        begin: usize,
        end: usize,
        order: BondOrder,
    ) -> Result<usize, PolymerError> {
        if self.bond_between(begin, end).is_some() {
            return Err(PolymerError::invalid_input(format!(
                "atoms {begin} and {end} are already bonded"
            )));
        }
        self.push_bond(begin, end, order)
    }

    /// Like [`add_bond`](Self::add_bond) without the duplicate scan, for
    /// callers that know `begin` and `end` are not bonded yet.
    pub fn push_bond(
        &mut self,
        begin: usize,
        end: usize,
        order: BondOrder,
    ) -> Result<usize, PolymerError> {
        if begin >= self.atoms.len() || end >= self.atoms.len() {
            return Err(PolymerError::invalid_input(format!(
                "bond {begin}-{end} references a missing atom"
            )));
        }
        if begin == end {
            return Err(PolymerError::invalid_input(format!(
                "self loops are not supported (atom {begin})"
            )));
        }
        self.bonds.push(Bond { begin, end, order });
        Ok(self.bonds.len() - 1)
    }

    pub fn bond_between(&self, a: usize, b: usize) -> Option<&Bond> {
        self.bonds.iter().find(|bond| bond.connects(a, b))
    }

    /// Neighbor indices in bond insertion order.
    pub fn neighbors(&self, index: usize) -> Result<Vec<usize>, PolymerError> {
        self.atom(index)?;
        Ok(self
            .bonds
            .iter()
            .filter_map(|bond| bond.partner(index))
            .collect())
    }

    pub fn degree(&self, index: usize) -> Result<usize, PolymerError> {
        self.atom(index)?;
        Ok(self.bonds.iter().filter(|bond| bond.touches(index)).count())
    }

    /// Per-atom neighbor lists with the connecting bond order.
    pub fn adjacency(&self) -> Vec<Vec<(usize, BondOrder)>> {
        let mut adjacency = vec![Vec::new(); self.atoms.len()];
        for bond in &self.bonds {
            adjacency[bond.begin].push((bond.end, bond.order));
            adjacency[bond.end].push((bond.begin, bond.order));
        }
        adjacency
    }

    pub fn indices_where<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&Atom) -> bool,
    {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, atom)| predicate(atom))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Appends `other` after this graph's atoms and returns the offset
    /// applied to `other`'s indices.
    pub fn combine(&mut self, other: &MolecularGraph) -> usize {
        let offset = self.atoms.len();
        self.atoms.extend(other.atoms.iter().cloned());
        self.bonds.extend(other.bonds.iter().map(|bond| Bond {
            begin: bond.begin + offset,
            end: bond.end + offset,
            order: bond.order,
        }));
        offset
    }

    /// Removes the atom and its bonds. Every index above `index` shifts down
    /// by one, so callers holding indices must account for it.
    pub fn remove_atom(&mut self, index: usize) -> Result<Atom, PolymerError> {
        self.atom(index)?;
        self.bonds.retain(|bond| !bond.touches(index));
        for bond in &mut self.bonds {
            if bond.begin > index {
                bond.begin -= 1;
            }
            if bond.end > index {
                bond.end -= 1;
            }
        }
        Ok(self.atoms.remove(index))
    }

    /// Removes atoms given in strictly descending order, as if each were
    /// passed to [`remove_atom`](Self::remove_atom) in turn. Any other order
    /// is refused before the graph is touched. The survivors are compacted
    /// in one pass through an old-to-new index map.
    pub fn remove_atoms_descending(&mut self, indices: &[usize]) -> Result<(), PolymerError> {
        if let Some(pair) = indices.windows(2).find(|pair| pair[0] <= pair[1]) {
            return Err(PolymerError::invalid_input(format!(
                "atom removal must be strictly descending, got {} before {}",
                pair[0], pair[1]
            )));
        }
        if let Some(&first) = indices.first() {
            self.atom(first)?;
        }
        let mut removed = vec![false; self.atoms.len()];
        for &index in indices {
            removed[index] = true;
        }
        let mut next = 0;
        let remap: Vec<Option<usize>> = removed
            .iter()
            .map(|&gone| {
                if gone {
                    None
                } else {
                    next += 1;
                    Some(next - 1)
                }
            })
            .collect();

        let mut index = 0;
        self.atoms.retain(|_| {
            index += 1;
            !removed[index - 1]
        });
        self.bonds
            .retain_mut(|bond| match (remap[bond.begin], remap[bond.end]) {
                (Some(begin), Some(end)) => {
                    bond.begin = begin;
                    bond.end = end;
                    true
                }
                _ => false,
            });
        Ok(())
    }
}
