//! SMILES reading and canonical writing.
//!
//! The reader covers the organic subset, bracket atoms (isotope, symbol,
//! hydrogen count, charge, atom class), `*` placeholders, branches, ring
//! closures (`0-9`, `%nn`) and `.` fragments. Chirality marks and
//! directional bonds are accepted and dropped.
//!
//! The writer ranks atoms by ordered partition refinement over atom
//! invariants and bond orders, breaks ties deterministically and writes
//! each fragment depth-first from its lowest-ranked terminal atom.

use std::{cmp::Reverse, collections::BTreeSet};

use ahash::{AHashMap, AHashSet};

use crate::{
    algo::connected_components,
    element::Element,
    errors::PolymerError,
    graph::{Atom, AtomKind, BondOrder, MolecularGraph},
    sanitize::{default_hydrogens, hydrogen_count},
};

/// Parses a SMILES string. Text after the first whitespace is treated as a
/// title and ignored.
pub fn parse_smiles(input: &str) -> Result<MolecularGraph, PolymerError> {
    let text = input.split_whitespace().next().unwrap_or("");
    if text.is_empty() {
        return Err(PolymerError::parse("empty SMILES string"));
    }
    Parser::new(text).run()
}

struct RingOpening {
    atom: usize,
    order: Option<BondOrder>,
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    graph: MolecularGraph,
    current: Option<usize>,
    branches: Vec<usize>,
    pending: Option<BondOrder>,
    rings: AHashMap<u16, RingOpening>,
    bonded: AHashSet<(usize, usize)>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            graph: MolecularGraph::new(),
            current: None,
            branches: Vec::new(),
            pending: None,
            rings: AHashMap::new(),
            bonded: AHashSet::new(),
        }
    }

    fn run(mut self) -> Result<MolecularGraph, PolymerError> {
        while let Some(byte) = self.peek() {
            match byte {
                b'(' => self.open_branch()?,
                b')' => self.close_branch()?,
                b'-' | b'=' | b'#' | b':' | b'/' | b'\\' | b'$' => self.bond_symbol(byte)?,
                b'.' => {
                    if self.pending.is_some() || self.current.is_none() {
                        return Err(self.error("misplaced fragment separator"));
                    }
                    self.pos += 1;
                    self.current = None;
                }
                b'0'..=b'9' | b'%' => self.ring_closure()?,
                b'[' => {
                    let atom = self.bracket_atom()?;
                    self.attach(atom)?;
                }
                b'*' => {
                    self.pos += 1;
                    self.attach(Atom::placeholder())?;
                }
                _ => {
                    let atom = self.organic_atom()?;
                    self.attach(atom)?;
                }
            }
        }
        if self.pending.is_some() {
            return Err(self.error("SMILES ends with a bond"));
        }
        if !self.branches.is_empty() {
            return Err(self.error("unclosed branch"));
        }
        if let Some(ring) = self.rings.keys().min() {
            return Err(PolymerError::parse(format!(
                "unclosed ring {ring} in '{}'",
                self.text
            )));
        }
        Ok(self.graph)
    }

    fn open_branch(&mut self) -> Result<(), PolymerError> {
        let atom = self
            .current
            .ok_or_else(|| self.error("branch opened before any atom"))?;
        if self.pending.is_some() {
            return Err(self.error("bond symbol before branch"));
        }
        self.pos += 1;
        if self.peek() == Some(b')') {
            return Err(self.error("empty branch"));
        }
        self.branches.push(atom);
        Ok(())
    }

    fn close_branch(&mut self) -> Result<(), PolymerError> {
        if self.pending.is_some() {
            return Err(self.error("branch ends with a bond"));
        }
        let atom = self
            .branches
            .pop()
            .ok_or_else(|| self.error("unmatched ')'"))?;
        self.pos += 1;
        self.current = Some(atom);
        Ok(())
    }

    fn bond_symbol(&mut self, byte: u8) -> Result<(), PolymerError> {
        if self.current.is_none() {
            return Err(self.error("bond symbol before any atom"));
        }
        if self.pending.is_some() {
            return Err(self.error("consecutive bond symbols"));
        }
        let order = match byte {
            b'=' => BondOrder::Double,
            b'#' => BondOrder::Triple,
            b':' => BondOrder::Aromatic,
            b'$' => return Err(self.error("quadruple bonds are not supported")),
            _ => BondOrder::Single,
        };
        self.pos += 1;
        self.pending = Some(order);
        Ok(())
    }

    fn ring_closure(&mut self) -> Result<(), PolymerError> {
        let atom = self
            .current
            .ok_or_else(|| self.error("ring closure before any atom"))?;
        let number = if self.peek() == Some(b'%') {
            self.pos += 1;
            match (self.peek_digit(0), self.peek_digit(1)) {
                (Some(tens), Some(ones)) => {
                    self.pos += 2;
                    tens * 10 + ones
                }
                _ => return Err(self.error("'%' must be followed by two digits")),
            }
        } else {
            let digit = self
                .peek_digit(0)
                .ok_or_else(|| self.error("expected ring closure digit"))?;
            self.pos += 1;
            digit
        };

        match self.rings.remove(&number) {
            Some(open) => {
                let order = match (open.order, self.pending.take()) {
                    (Some(a), Some(b)) if a != b => {
                        return Err(self.error(&format!(
                            "conflicting bond orders for ring {number}"
                        )));
                    }
                    (Some(order), _) | (None, Some(order)) => order,
                    (None, None) => self.implicit_order(open.atom, atom),
                };
                if open.atom == atom {
                    return Err(self.error(&format!("ring {number} closes on its own atom")));
                }
                if !self.bonded.insert(bond_key(open.atom, atom)) {
                    return Err(self.error(&format!(
                        "ring {number} duplicates an existing bond"
                    )));
                }
                self.graph.push_bond(open.atom, atom, order)?;
            }
            None => {
                let order = self.pending.take();
                self.rings.insert(number, RingOpening { atom, order });
            }
        }
        Ok(())
    }

    fn organic_atom(&mut self) -> Result<Atom, PolymerError> {
        let byte = self.peek().unwrap_or(b' ');
        let next = self.peek_at(1);
        let (atom, width) = match (byte, next) {
            (b'C', Some(b'l')) => (Atom::element(Element::Cl), 2),
            (b'B', Some(b'r')) => (Atom::element(Element::Br), 2),
            (b'B', _) => (Atom::element(Element::B), 1),
            (b'C', _) => (Atom::element(Element::C), 1),
            (b'N', _) => (Atom::element(Element::N), 1),
            (b'O', _) => (Atom::element(Element::O), 1),
            (b'P', _) => (Atom::element(Element::P), 1),
            (b'S', _) => (Atom::element(Element::S), 1),
            (b'F', _) => (Atom::element(Element::F), 1),
            (b'I', _) => (Atom::element(Element::I), 1),
            (b'b', _) => (Atom::aromatic(Element::B), 1),
            (b'c', _) => (Atom::aromatic(Element::C), 1),
            (b'n', _) => (Atom::aromatic(Element::N), 1),
            (b'o', _) => (Atom::aromatic(Element::O), 1),
            (b'p', _) => (Atom::aromatic(Element::P), 1),
            (b's', _) => (Atom::aromatic(Element::S), 1),
            (other, _) => {
                return Err(self.error(&format!("unexpected character '{}'", other as char)));
            }
        };
        self.pos += width;
        Ok(atom)
    }

    fn bracket_atom(&mut self) -> Result<Atom, PolymerError> {
        self.pos += 1;
        let isotope = match self.number() {
            Some(value) => Some(
                u16::try_from(value).map_err(|_| self.error("isotope out of range"))?,
            ),
            None => None,
        };
        let mut atom = self.bracket_symbol()?;
        atom.isotope = isotope;

        while self.peek() == Some(b'@') {
            self.pos += 1;
        }

        let hydrogens = if self.peek() == Some(b'H') {
            self.pos += 1;
            let count = self.number().unwrap_or(1);
            u8::try_from(count).map_err(|_| self.error("hydrogen count out of range"))?
        } else {
            0
        };
        atom.explicit_hydrogens = match atom.kind {
            AtomKind::Element(_) => Some(hydrogens),
            _ if hydrogens > 0 => Some(hydrogens),
            _ => None,
        };

        atom.charge = self.charge()?;

        if self.peek() == Some(b':') {
            self.pos += 1;
            let class = self
                .number()
                .ok_or_else(|| self.error("atom class must be a number"))?;
            atom.atom_class = Some(class);
        }

        if self.peek() != Some(b']') {
            return Err(self.error("expected ']'"));
        }
        self.pos += 1;
        Ok(atom)
    }

    fn bracket_symbol(&mut self) -> Result<Atom, PolymerError> {
        let first = self
            .peek()
            .ok_or_else(|| self.error("unterminated bracket atom"))?;
        if first == b'*' {
            self.pos += 1;
            return Ok(Atom::placeholder());
        }
        if !first.is_ascii_alphabetic() {
            return Err(self.error("expected element symbol"));
        }
        let aromatic = first.is_ascii_lowercase();
        let lead = first.to_ascii_uppercase() as char;
        if let Some(second) = self.peek_at(1).filter(u8::is_ascii_lowercase) {
            let symbol = format!("{lead}{}", second as char);
            if let Some(element) = Element::from_symbol(&symbol) {
                if !aromatic || element.can_be_aromatic() {
                    self.pos += 2;
                    return Ok(self.bracket_element(element, aromatic));
                }
            }
        }
        let element = Element::from_symbol(&lead.to_string())
            .filter(|element| !aromatic || element.can_be_aromatic())
            .ok_or_else(|| self.error("unknown element symbol"))?;
        self.pos += 1;
        Ok(self.bracket_element(element, aromatic))
    }

    fn bracket_element(&self, element: Element, aromatic: bool) -> Atom {
        if aromatic {
            Atom::aromatic(element)
        } else {
            Atom::element(element)
        }
    }

    fn charge(&mut self) -> Result<i8, PolymerError> {
        let sign: i32 = match self.peek() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Ok(0),
        };
        let symbol = self.bytes[self.pos];
        self.pos += 1;
        let magnitude = match self.number() {
            Some(value) => value,
            None => {
                let mut count = 1;
                while self.peek() == Some(symbol) {
                    self.pos += 1;
                    count += 1;
                }
                count
            }
        };
        i32::try_from(magnitude)
            .ok()
            .and_then(|value| i8::try_from(sign * value).ok())
            .ok_or_else(|| self.error("charge out of range"))
    }

    fn attach(&mut self, atom: Atom) -> Result<(), PolymerError> {
        let index = self.graph.add_atom(atom);
        if let Some(previous) = self.current {
            let order = match self.pending.take() {
                Some(order) => order,
                None => self.implicit_order(previous, index),
            };
            self.bonded.insert(bond_key(previous, index));
            self.graph.push_bond(previous, index, order)?;
        }
        self.current = Some(index);
        Ok(())
    }

    fn implicit_order(&self, a: usize, b: usize) -> BondOrder {
        let atoms = self.graph.atoms();
        if atoms[a].aromatic && atoms[b].aromatic {
            BondOrder::Aromatic
        } else {
            BondOrder::Single
        }
    }

    fn number(&mut self) -> Option<u32> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(digit) = self.peek_digit(0) {
            value = value.saturating_mul(10).saturating_add(u32::from(digit));
            self.pos += 1;
        }
        (self.pos > start).then_some(value)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn peek_digit(&self, offset: usize) -> Option<u16> {
        self.peek_at(offset)
            .filter(u8::is_ascii_digit)
            .map(|byte| u16::from(byte - b'0'))
    }

    fn error(&self, msg: &str) -> PolymerError {
        PolymerError::parse(format!("{msg} at position {} in '{}'", self.pos, self.text))
    }
}

fn bond_key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

/// Writes the canonical SMILES for `graph`. Equal graphs always produce
/// equal strings; fragments are joined with `.`.
pub fn to_smiles(graph: &MolecularGraph) -> Result<String, PolymerError> {
    let adjacency = graph.adjacency();
    let ranks = canonical_ranks(graph, &adjacency);
    let mut starts: Vec<usize> = connected_components(graph)
        .iter()
        .filter_map(|component| {
            component
                .iter()
                .copied()
                .min_by_key(|&atom| (adjacency[atom].len(), ranks[atom]))
        })
        .collect();
    starts.sort_by_key(|&atom| ranks[atom]);
    let mut walk = Walk::new(graph.atom_count());
    let fragments = starts
        .into_iter()
        .map(|start| write_fragment(graph, &adjacency, &ranks, &mut walk, start))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fragments.join("."))
}

type AtomInvariant = (u8, u8, bool, i8, Option<u16>, u8, usize, Option<u32>);

fn atom_invariant(atom: &Atom, neighbors: &[(usize, BondOrder)]) -> AtomInvariant {
    let (kind, atomic_number) = match atom.kind {
        AtomKind::Placeholder => (0, 0),
        AtomKind::Connection => (1, 0),
        AtomKind::Element(element) => (2, element.atomic_number()),
    };
    (
        kind,
        atomic_number,
        atom.aromatic,
        atom.charge,
        atom.isotope,
        hydrogen_count(atom, neighbors),
        neighbors.len(),
        atom.atom_class,
    )
}

fn canonical_ranks(graph: &MolecularGraph, adjacency: &[Vec<(usize, BondOrder)>]) -> Vec<usize> {
    let invariants: Vec<AtomInvariant> = graph
        .atoms()
        .iter()
        .zip(adjacency)
        .map(|(atom, neighbors)| atom_invariant(atom, neighbors))
        .collect();
    let mut partition = Partition::new(&invariants);
    partition.refine(adjacency);
    let mut cursor = 0;
    while cursor < partition.order.len() {
        let end = partition.cell_end[cursor];
        if end - cursor == 1 {
            cursor = end;
            continue;
        }
        partition.individualize(cursor);
        partition.refine(adjacency);
    }
    partition.pos
}

type SplitKey = [u32; 4];

/// Ordered partition of the atoms. Each cell is a contiguous run of
/// `order` named by its start position; cells only ever split, and a split
/// keeps the pieces in key order, so positions only depend on structure.
struct Partition {
    order: Vec<usize>,
    pos: Vec<usize>,
    cell: Vec<usize>,
    /// Exclusive end of the cell starting at each position.
    cell_end: Vec<usize>,
    /// Cells still to be used as splitters.
    pending: BTreeSet<usize>,
}

impl Partition {
    fn new(invariants: &[AtomInvariant]) -> Self {
        let n = invariants.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| invariants[a].cmp(&invariants[b]));
        let mut pos = vec![0; n];
        let mut cell = vec![0; n];
        let mut cell_end = vec![0; n];
        let mut pending = BTreeSet::new();
        let mut start = 0;
        for (idx, &atom) in order.iter().enumerate() {
            if idx > 0 && invariants[atom] != invariants[order[idx - 1]] {
                start = idx;
            }
            pos[atom] = idx;
            cell[atom] = start;
            cell_end[start] = idx + 1;
            pending.insert(start);
        }
        Self {
            order,
            pos,
            cell,
            cell_end,
            pending,
        }
    }

    /// Splits cells until every atom of a cell has the same number of bonds
    /// of each order into every cell. Only atoms next to a splitter are
    /// visited, and the largest piece of a split is not queued again.
    fn refine(&mut self, adjacency: &[Vec<(usize, BondOrder)>]) {
        while let Some(splitter) = self.pending.pop_first() {
            let members = self.order[splitter..self.cell_end[splitter]].to_vec();
            let mut counts: AHashMap<usize, SplitKey> = AHashMap::new();
            for &atom in &members {
                for &(neighbor, order) in &adjacency[atom] {
                    counts.entry(neighbor).or_default()[order as usize] += 1;
                }
            }
            let mut touched: AHashMap<usize, Vec<(usize, SplitKey)>> = AHashMap::new();
            for (atom, key) in counts {
                touched.entry(self.cell[atom]).or_default().push((atom, key));
            }
            let mut cells: Vec<(usize, Vec<(usize, SplitKey)>)> = touched.into_iter().collect();
            cells.sort_unstable_by_key(|(start, _)| *start);
            for (start, hits) in cells {
                self.split(start, hits);
            }
        }
    }

    fn split(&mut self, start: usize, mut hits: Vec<(usize, SplitKey)>) {
        let end = self.cell_end[start];
        let untouched = end - start - hits.len();
        hits.sort_unstable_by_key(|&(_, key)| key);
        let uniform = hits.first().map(|hit| hit.1) == hits.last().map(|hit| hit.1);
        if untouched == 0 && uniform {
            return;
        }

        // touched atoms go to the back of the cell, in key order
        let mut boundary = end;
        for &(atom, _) in &hits {
            boundary -= 1;
            let from = self.pos[atom];
            let displaced = self.order[boundary];
            self.order.swap(from, boundary);
            self.pos[displaced] = from;
            self.pos[atom] = boundary;
        }
        for (offset, &(atom, _)) in hits.iter().enumerate() {
            self.order[boundary + offset] = atom;
            self.pos[atom] = boundary + offset;
        }

        let mut pieces = Vec::new();
        if untouched > 0 {
            pieces.push((start, boundary));
        }
        let mut piece_start = boundary;
        for idx in 1..=hits.len() {
            if idx == hits.len() || hits[idx].1 != hits[idx - 1].1 {
                pieces.push((piece_start, boundary + idx));
                piece_start = boundary + idx;
            }
        }
        for &(piece, piece_end) in &pieces {
            self.cell_end[piece] = piece_end;
            if piece >= boundary {
                for position in piece..piece_end {
                    self.cell[self.order[position]] = piece;
                }
            }
        }
        self.queue_pieces(start, &pieces);
    }

    /// Moves the lowest-indexed atom of the cell at `start` into a cell of
    /// its own.
    fn individualize(&mut self, start: usize) {
        let end = self.cell_end[start];
        let Some(&chosen) = self.order[start..end].iter().min() else {
            return;
        };
        let from = self.pos[chosen];
        let displaced = self.order[start];
        self.order.swap(start, from);
        self.pos[displaced] = from;
        self.pos[chosen] = start;
        self.cell_end[start] = start + 1;
        self.cell_end[start + 1] = end;
        for position in start + 1..end {
            self.cell[self.order[position]] = start + 1;
        }
        self.queue_pieces(start, &[(start, start + 1), (start + 1, end)]);
    }

    fn queue_pieces(&mut self, start: usize, pieces: &[(usize, usize)]) {
        if self.pending.contains(&start) {
            self.pending.extend(pieces.iter().map(|&(piece, _)| piece));
            return;
        }
        let largest = pieces
            .iter()
            .enumerate()
            .max_by_key(|&(idx, &(piece, piece_end))| (piece_end - piece, Reverse(idx)))
            .map(|(idx, _)| idx);
        for (idx, &(piece, _)) in pieces.iter().enumerate() {
            if Some(idx) != largest {
                self.pending.insert(piece);
            }
        }
    }
}

enum Emit {
    Atom(usize),
    Open,
    Close,
}

/// Depth-first tree over the whole graph, shared by all fragments since
/// they never overlap.
struct Walk {
    position: Vec<Option<usize>>,
    parent: Vec<Option<(usize, BondOrder)>>,
    children: Vec<Vec<usize>>,
}

impl Walk {
    fn new(atoms: usize) -> Self {
        Self {
            position: vec![None; atoms],
            parent: vec![None; atoms],
            children: vec![Vec::new(); atoms],
        }
    }
}

fn write_fragment(
    graph: &MolecularGraph,
    adjacency: &[Vec<(usize, BondOrder)>],
    ranks: &[usize],
    walk: &mut Walk,
    start: usize,
) -> Result<String, PolymerError> {
    let atoms = graph.atoms();
    let Walk {
        position,
        parent,
        children,
    } = walk;
    let mut order = Vec::new();

    let mut stack = vec![(start, None)];
    while let Some((atom, from)) = stack.pop() {
        if position[atom].is_some() {
            continue;
        }
        position[atom] = Some(order.len());
        order.push(atom);
        if let Some((up, bond)) = from {
            parent[atom] = Some((up, bond));
            children[up].push(atom);
        }
        let mut next: Vec<(usize, BondOrder)> = adjacency[atom]
            .iter()
            .copied()
            .filter(|&(neighbor, _)| position[neighbor].is_none())
            .collect();
        next.sort_by_key(|&(neighbor, _)| Reverse(ranks[neighbor]));
        stack.extend(next.into_iter().map(|(neighbor, bond)| (neighbor, Some((atom, bond)))));
    }

    let mut opens: AHashMap<usize, Vec<(usize, BondOrder)>> = AHashMap::new();
    let mut closes: AHashMap<usize, Vec<usize>> = AHashMap::new();
    for &atom in &order {
        for &(neighbor, bond) in &adjacency[atom] {
            let tree_edge = parent[atom].map(|(up, _)| up) == Some(neighbor)
                || parent[neighbor].map(|(up, _)| up) == Some(atom);
            if !tree_edge && position[atom] < position[neighbor] {
                opens.entry(atom).or_default().push((neighbor, bond));
                closes.entry(neighbor).or_default().push(atom);
            }
        }
    }
    for list in opens.values_mut() {
        list.sort_by_key(|&(partner, _)| position[partner]);
    }
    for list in closes.values_mut() {
        list.sort_by_key(|&partner| position[partner]);
    }

    let mut in_use = [false; 100];
    let mut digits: AHashMap<(usize, usize), usize> = AHashMap::new();
    let mut ring_text: AHashMap<usize, String> = AHashMap::new();
    for &atom in &order {
        let mut text = String::new();
        let mut released = Vec::new();
        for &partner in closes.get(&atom).map(Vec::as_slice).unwrap_or(&[]) {
            if let Some(digit) = digits.remove(&(partner, atom)) {
                text.push_str(&ring_label(digit));
                released.push(digit);
            }
        }
        for &(partner, bond) in opens.get(&atom).map(Vec::as_slice).unwrap_or(&[]) {
            let digit = (1..in_use.len())
                .find(|&digit| !in_use[digit])
                .ok_or_else(|| {
                    PolymerError::invalid_structure("more than 99 ring closures open at once")
                })?;
            in_use[digit] = true;
            digits.insert((atom, partner), digit);
            text.push_str(bond_symbol(bond, atoms[atom].aromatic, atoms[partner].aromatic));
            text.push_str(&ring_label(digit));
        }
        for digit in released {
            in_use[digit] = false;
        }
        ring_text.insert(atom, text);
    }

    let mut out = String::new();
    let mut emit = vec![Emit::Atom(start)];
    while let Some(item) = emit.pop() {
        match item {
            Emit::Open => out.push('('),
            Emit::Close => out.push(')'),
            Emit::Atom(atom) => {
                if let Some((up, bond)) = parent[atom] {
                    out.push_str(bond_symbol(bond, atoms[up].aromatic, atoms[atom].aromatic));
                }
                out.push_str(&atom_token(&atoms[atom], &adjacency[atom]));
                if let Some(text) = ring_text.get(&atom) {
                    out.push_str(text);
                }
                if let Some((last, rest)) = children[atom].split_last() {
                    emit.push(Emit::Atom(*last));
                    for &branch in rest.iter().rev() {
                        emit.push(Emit::Close);
                        emit.push(Emit::Atom(branch));
                        emit.push(Emit::Open);
                    }
                }
            }
        }
    }
    Ok(out)
}

fn ring_label(digit: usize) -> String {
    if digit < 10 {
        digit.to_string()
    } else {
        format!("%{digit}")
    }
}

fn bond_symbol(order: BondOrder, a_aromatic: bool, b_aromatic: bool) -> &'static str {
    let both_aromatic = a_aromatic && b_aromatic;
    match order {
        BondOrder::Single if both_aromatic => "-",
        BondOrder::Single => "",
        BondOrder::Double => "=",
        BondOrder::Triple => "#",
        BondOrder::Aromatic if both_aromatic => "",
        BondOrder::Aromatic => ":",
    }
}

fn atom_token(atom: &Atom, neighbors: &[(usize, BondOrder)]) -> String {
    let hydrogens = hydrogen_count(atom, neighbors);
    let plain = atom.charge == 0 && atom.isotope.is_none() && atom.atom_class.is_none();
    match atom.kind {
        AtomKind::Placeholder | AtomKind::Connection => {
            if plain && hydrogens == 0 {
                "*".to_string()
            } else {
                bracket(atom, "*", hydrogens)
            }
        }
        AtomKind::Element(element) => {
            let symbol = if atom.aromatic {
                element.symbol().to_ascii_lowercase()
            } else {
                element.symbol().to_string()
            };
            let organic = element.is_organic() && (!atom.aromatic || element.is_aromatic_organic());
            if plain && organic && hydrogens == default_hydrogens(atom, neighbors) {
                symbol
            } else {
                bracket(atom, &symbol, hydrogens)
            }
        }
    }
}

fn bracket(atom: &Atom, symbol: &str, hydrogens: u8) -> String {
    let mut token = String::from("[");
    if let Some(isotope) = atom.isotope {
        token.push_str(&isotope.to_string());
    }
    token.push_str(symbol);
    match hydrogens {
        0 => {}
        1 => token.push('H'),
        count => token.push_str(&format!("H{count}")),
    }
    match atom.charge {
        0 => {}
        1 => token.push('+'),
        -1 => token.push('-'),
        charge if charge > 0 => token.push_str(&format!("+{charge}")),
        charge => token.push_str(&format!("-{}", i16::from(charge).abs())),
    }
    if let Some(class) = atom.atom_class {
        token.push_str(&format!(":{class}"));
    }
    token.push(']');
    token
}
