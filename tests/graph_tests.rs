use polychain::{
    Atom, AtomKind, BondOrder, Element, MolecularGraph, PolymerError,
    algo::{connected_components, shortest_path},
};

#[test]
fn add_bond_rejects_missing_atoms_self_loops_and_duplicates() {
    let mut graph = MolecularGraph::new();
    let a = graph.add_atom(Atom::element(Element::C));
    let b = graph.add_atom(Atom::element(Element::O));
    graph.add_bond(a, b, BondOrder::Double).unwrap();

    assert!(matches!(
        graph.add_bond(a, 7, BondOrder::Single),
        Err(PolymerError::InvalidInput(_))
    ));
    assert!(matches!(
        graph.add_bond(a, a, BondOrder::Single),
        Err(PolymerError::InvalidInput(_))
    ));
    assert!(matches!(
        graph.add_bond(b, a, BondOrder::Single),
        Err(PolymerError::InvalidInput(_))
    ));
    assert_eq!(graph.bond_count(), 1);
}

#[test]
fn combine_appends_and_returns_offset() {
    let mut left = chain_of(3);
    let right = chain_of(2);
    let offset = left.combine(&right);

    assert_eq!(offset, 3);
    assert_eq!(left.atom_count(), 5);
    assert_eq!(left.bond_count(), 3);
    assert!(left.bond_between(3, 4).is_some());
    assert!(left.bond_between(2, 3).is_none());
}

#[test]
fn remove_atom_drops_incident_bonds_and_shifts_higher_indices() {
    let mut graph = chain_of(4);
    graph.atom_mut(3).unwrap().kind = AtomKind::Element(Element::N);
    let removed = graph.remove_atom(1).unwrap();

    assert_eq!(removed.kind, AtomKind::Element(Element::C));
    assert_eq!(graph.atom_count(), 3);
    assert_eq!(graph.bond_count(), 1);
    assert!(graph.bond_between(1, 2).is_some());
    assert_eq!(graph.atoms()[2].kind, AtomKind::Element(Element::N));
}

#[test]
fn remove_atoms_descending_refuses_other_orders_untouched() {
    let mut graph = chain_of(5);
    let before = graph.clone();

    let err = graph.remove_atoms_descending(&[1, 3]).unwrap_err();
    assert!(matches!(err, PolymerError::InvalidInput(_)));
    let err = graph.remove_atoms_descending(&[3, 3]).unwrap_err();
    assert!(matches!(err, PolymerError::InvalidInput(_)));
    assert!(graph.remove_atoms_descending(&[9, 1]).is_err());
    assert_eq!(graph, before);

    graph.remove_atoms_descending(&[3, 1]).unwrap();
    assert_eq!(graph.atom_count(), 3);
    assert_eq!(graph.bond_count(), 0);
}

#[test]
fn remove_atoms_descending_matches_one_at_a_time() {
    let mut graph = chain_of(12);
    graph.add_bond(0, 11, BondOrder::Double).unwrap();
    graph.add_bond(3, 8, BondOrder::Single).unwrap();
    graph.atom_mut(9).unwrap().kind = AtomKind::Element(Element::N);
    let mut expected = graph.clone();
    for index in [10, 7, 4, 3, 0] {
        expected.remove_atom(index).unwrap();
    }

    graph.remove_atoms_descending(&[10, 7, 4, 3, 0]).unwrap();
    assert_eq!(graph, expected);
    assert_eq!(graph.atoms()[5].kind, AtomKind::Element(Element::N));
}

#[test]
fn push_bond_checks_range_and_self_loops() {
    let mut graph = chain_of(3);
    assert_eq!(graph.push_bond(0, 2, BondOrder::Single).unwrap(), 2);
    assert!(matches!(
        graph.push_bond(0, 3, BondOrder::Single),
        Err(PolymerError::InvalidInput(_))
    ));
    assert!(matches!(
        graph.push_bond(1, 1, BondOrder::Single),
        Err(PolymerError::InvalidInput(_))
    ));
}

#[test]
fn neighbors_and_degree_follow_bonds() {
    let graph = chain_of(3);
    assert_eq!(graph.neighbors(1).unwrap(), vec![0, 2]);
    assert_eq!(graph.degree(0).unwrap(), 1);
    assert!(graph.neighbors(3).is_err());
}

#[test]
fn components_and_shortest_path() {
    let mut graph = chain_of(4);
    let lone = graph.add_atom(Atom::placeholder());

    let components = connected_components(&graph);
    assert_eq!(components, vec![vec![0, 1, 2, 3], vec![lone]]);
    assert_eq!(shortest_path(&graph, 0, 3).unwrap(), Some(vec![0, 1, 2, 3]));
    assert_eq!(shortest_path(&graph, 0, lone).unwrap(), None);
    assert_eq!(shortest_path(&graph, 2, 2).unwrap(), Some(vec![2]));
    assert!(shortest_path(&graph, 0, 42).is_err());
}

fn chain_of(len: usize) -> MolecularGraph {
    let mut graph = MolecularGraph::new();
    for idx in 0..len {
        graph.add_atom(Atom::element(Element::C));
        if idx > 0 {
            graph.add_bond(idx - 1, idx, BondOrder::Single).unwrap();
        }
    }
    graph
}
