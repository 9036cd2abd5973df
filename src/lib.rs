//! Linear polymer assembly from monomers with two `*` connection points.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod algo;
pub mod bench_utils;
pub mod cli;
pub mod codec;
pub mod combine;
pub mod config;
pub mod element;
pub mod errors;
pub mod graph;
pub mod polymer;
pub mod prune;
pub mod replicate;
pub mod resolver;
pub mod sanitize;
pub mod smiles;
pub mod stitch;

pub use crate::codec::{NotationCodec, SmilesCodec};
pub use crate::config::{PlaceholderPolicy, PolymerConfig};
pub use crate::element::Element;
pub use crate::errors::PolymerError;
pub use crate::graph::{Atom, AtomKind, Bond, BondOrder, MolecularGraph};
pub use crate::polymer::{AssemblyReport, PolymerChain, Polymerizer, assemble_chain, polymerize};
pub use crate::replicate::ConnectionRecord;
pub use crate::smiles::{parse_smiles, to_smiles};
