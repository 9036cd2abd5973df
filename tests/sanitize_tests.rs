use polychain::{
    Atom, AtomKind, BondOrder, Element, MolecularGraph, PolymerError, parse_smiles,
    sanitize::sanitize,
};

#[test]
fn sanitize_fills_implicit_hydrogens() {
    let mut graph = parse_smiles("CC(=O)O").unwrap();
    let report = sanitize(&mut graph).unwrap();
    assert_eq!(report.atoms, 4);
    assert_eq!(report.bonds, 3);
    assert_eq!(report.implicit_hydrogens, 4);
    let counts: Vec<u8> = graph.atoms().iter().map(|atom| atom.implicit_hydrogens).collect();
    assert_eq!(counts, vec![3, 0, 0, 1]);
}

#[test]
fn aromatic_rings_spend_one_unit_on_the_ring() {
    let mut benzene = parse_smiles("c1ccccc1").unwrap();
    assert_eq!(sanitize(&mut benzene).unwrap().implicit_hydrogens, 6);

    let mut pyrrole = parse_smiles("c1cc[nH]c1").unwrap();
    let report = sanitize(&mut pyrrole).unwrap();
    assert_eq!(report.implicit_hydrogens, 4);
    assert_eq!(pyrrole.atoms()[3].total_hydrogens(), 1);
}

#[test]
fn bracket_atoms_keep_their_written_hydrogens() {
    let mut graph = parse_smiles("[NH4+].[O-]C").unwrap();
    let report = sanitize(&mut graph).unwrap();
    assert_eq!(report.implicit_hydrogens, 3);
    assert_eq!(graph.atoms()[0].total_hydrogens(), 4);
    assert_eq!(graph.atoms()[1].total_hydrogens(), 0);
}

#[test]
fn placeholders_carry_no_hydrogens() {
    let mut graph = parse_smiles("*CC*").unwrap();
    let report = sanitize(&mut graph).unwrap();
    assert_eq!(report.implicit_hydrogens, 4);
    assert_eq!(graph.atoms()[0].implicit_hydrogens, 0);
}

#[test]
fn over_valent_atoms_are_rejected() {
    for smiles in ["C(C)(C)(C)(C)C", "[CH3]C(=O)=O", "O=O=O"] {
        let err = sanitize(&mut parse_smiles(smiles).unwrap()).unwrap_err();
        assert!(
            matches!(err, PolymerError::InvalidStructure(_)),
            "{smiles}: {err:?}"
        );
    }
    let err = sanitize(&mut parse_smiles("C(C)(C)(C)(C)C").unwrap()).unwrap_err();
    assert!(err.to_string().contains("is greater than permitted"));
}

#[test]
fn aromatic_flags_must_match_ring_bonds() {
    let err = sanitize(&mut parse_smiles("cC").unwrap()).unwrap_err();
    assert!(matches!(err, PolymerError::InvalidStructure(_)));

    let mut graph = MolecularGraph::new();
    let a = graph.add_atom(Atom::element(Element::C));
    let b = graph.add_atom(Atom::element(Element::C));
    graph.add_bond(a, b, BondOrder::Aromatic).unwrap();
    let err = sanitize(&mut graph).unwrap_err();
    assert!(matches!(err, PolymerError::InvalidStructure(_)));
}

#[test]
fn leftover_connection_markers_are_rejected() {
    let mut graph = parse_smiles("*CC*").unwrap();
    graph.atom_mut(3).unwrap().kind = AtomKind::Connection;
    let err = sanitize(&mut graph).unwrap_err();
    assert_eq!(err.kind(), "invalid_structure");
}
