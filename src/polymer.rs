use serde::Serialize;

use crate::{
    algo::{connected_components, shortest_path},
    codec::{NotationCodec, SmilesCodec},
    combine::combine_copies,
    config::PolymerConfig,
    errors::PolymerError,
    graph::MolecularGraph,
    prune::prune_connection_points,
    replicate::{ConnectionRecord, replicate},
    resolver::resolve_connection_points,
    sanitize::sanitize,
    stitch::stitch_chain,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssemblyReport {
    pub degree: usize,
    pub monomer_atoms: usize,
    pub monomer_bonds: usize,
    pub atoms: usize,
    pub bonds: usize,
    pub offsets: Vec<usize>,
    pub stitch_bonds: Vec<(usize, usize)>,
    pub removed_markers: usize,
    /// Final indices of the two open placeholders (head, tail).
    pub open_ends: (usize, usize),
    pub components: usize,
    /// Bonds on the shortest path between the open ends.
    pub backbone_length: Option<usize>,
    pub implicit_hydrogens: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolymerChain {
    pub graph: MolecularGraph,
    pub report: AssemblyReport,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PolymerOutput {
    pub smiles: String,
    pub report: AssemblyReport,
}

/// Builds the chain of `config.degree` copies of `monomer`.
pub fn assemble_chain(
    monomer: &MolecularGraph,
    config: &PolymerConfig,
) -> Result<PolymerChain, PolymerError> {
    let tagged = resolve_connection_points(monomer.clone(), config.placeholder_policy)?;
    config.validate()?;
    let copies = replicate(&tagged, config.degree)?;
    let (graphs, records): (Vec<MolecularGraph>, Vec<ConnectionRecord>) = copies
        .into_iter()
        .map(|copy| (copy.graph, copy.record))
        .unzip();
    let combined = combine_copies(graphs)?;
    let mut graph = combined.graph;
    let offsets = combined.offsets;
    let stitches = stitch_chain(&mut graph, &records, &offsets)?;
    let pruned = prune_connection_points(&mut graph, &records, &offsets)?;
    let sanitized = sanitize(&mut graph)?;

    let backbone_length =
        shortest_path(&graph, pruned.head, pruned.tail)?.map(|path| path.len() - 1);
    let report = AssemblyReport {
        degree: config.degree,
        monomer_atoms: monomer.atom_count(),
        monomer_bonds: monomer.bond_count(),
        atoms: graph.atom_count(),
        bonds: graph.bond_count(),
        offsets,
        stitch_bonds: stitches
            .iter()
            .map(|stitch| (stitch.tail_neighbor, stitch.head_neighbor))
            .collect(),
        removed_markers: pruned.removed.len(),
        open_ends: (pruned.head, pruned.tail),
        components: connected_components(&graph).len(),
        backbone_length,
        implicit_hydrogens: sanitized.implicit_hydrogens,
    };
    log::debug!(
        "assembled chain: degree={} atoms={} bonds={}",
        report.degree,
        report.atoms,
        report.bonds
    );
    Ok(PolymerChain { graph, report })
}

/// Notation in, notation out.
#[derive(Clone, Debug, Default)]
pub struct Polymerizer<C = SmilesCodec> {
    codec: C,
    config: PolymerConfig,
}

impl Polymerizer<SmilesCodec> {
    pub fn new(config: PolymerConfig) -> Self {
        Self::with_codec(SmilesCodec, config)
    }
}

impl<C: NotationCodec> Polymerizer<C> {
    pub fn with_codec(codec: C, config: PolymerConfig) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &PolymerConfig {
        &self.config
    }

    pub fn polymerize(&self, notation: &str) -> Result<String, PolymerError> {
        self.polymerize_with_report(notation)
            .map(|output| output.smiles)
    }

    pub fn polymerize_with_report(&self, notation: &str) -> Result<PolymerOutput, PolymerError> {
        let monomer = self.codec.decode(notation)?;
        let chain = assemble_chain(&monomer, &self.config)?;
        let smiles = self.codec.encode(&chain.graph)?;
        Ok(PolymerOutput {
            smiles,
            report: chain.report,
        })
    }
}

/// Joins `degree` copies of the monomer written in `notation` and returns
/// the chain's canonical SMILES.
pub fn polymerize(notation: &str, degree: usize) -> Result<String, PolymerError> {
    Polymerizer::new(PolymerConfig::new(degree)).polymerize(notation)
}
