use serde::{Deserialize, Serialize};

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtomKind {
    /// Open connection point as written in notation (`*`).
    Placeholder,
    /// Connection point claimed by the chain builder.
    Connection,
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub kind: AtomKind,
    pub aromatic: bool,
    pub charge: i8,
    pub isotope: Option<u16>,
    /// Hydrogen count written inside brackets; `None` means implicit.
    pub explicit_hydrogens: Option<u8>,
    pub atom_class: Option<u32>,
    /// Filled in by the sanitizer.
    pub implicit_hydrogens: u8,
}

impl Atom {
    pub fn new(kind: AtomKind) -> Self {
        Self {
            kind,
            aromatic: false,
            charge: 0,
            isotope: None,
            explicit_hydrogens: None,
            atom_class: None,
            implicit_hydrogens: 0,
        }
    }

    pub fn element(element: Element) -> Self {
        Self::new(AtomKind::Element(element))
    }

    pub fn aromatic(element: Element) -> Self {
        Self {
            aromatic: true,
            ..Self::new(AtomKind::Element(element))
        }
    }

    pub fn placeholder() -> Self {
        Self::new(AtomKind::Placeholder)
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == AtomKind::Placeholder
    }

    pub fn is_connection_point(&self) -> bool {
        self.kind == AtomKind::Connection
    }

    pub fn element_kind(&self) -> Option<Element> {
        match self.kind {
            AtomKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn total_hydrogens(&self) -> u8 {
        self.explicit_hydrogens.unwrap_or(self.implicit_hydrogens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Valence contributed to each endpoint. Aromatic bonds count as one;
    /// the shared pi electron is accounted for per atom.
    pub fn valence(self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.begin == a && self.end == b) || (self.begin == b && self.end == a)
    }

    pub fn touches(&self, atom: usize) -> bool {
        self.begin == atom || self.end == atom
    }

    /// The endpoint opposite `atom`, if the bond touches it.
    pub fn partner(&self, atom: usize) -> Option<usize> {
        if self.begin == atom {
            Some(self.end)
        } else if self.end == atom {
            Some(self.begin)
        } else {
            None
        }
    }
}
