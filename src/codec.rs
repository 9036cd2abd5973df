use crate::{errors::PolymerError, graph::MolecularGraph, smiles};

/// Text notation for molecular graphs.
///
/// `encode` must be deterministic: the same graph always yields the same
/// string, so `decode(encode(g))` is a stable canonical form.
pub trait NotationCodec {
    fn decode(&self, text: &str) -> Result<MolecularGraph, PolymerError>;
    fn encode(&self, graph: &MolecularGraph) -> Result<String, PolymerError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmilesCodec;

impl NotationCodec for SmilesCodec {
    fn decode(&self, text: &str) -> Result<MolecularGraph, PolymerError> {
        smiles::parse_smiles(text)
    }

    fn encode(&self, graph: &MolecularGraph) -> Result<String, PolymerError> {
        smiles::to_smiles(graph)
    }
}
