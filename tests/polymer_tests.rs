use polychain::{
    AtomKind, NotationCodec, PlaceholderPolicy, PolymerConfig, PolymerError, Polymerizer,
    SmilesCodec, assemble_chain, parse_smiles, polymerize, to_smiles,
};

#[test]
fn builds_simple_chains() {
    assert_eq!(polymerize("*CC*", 3).unwrap(), "*CCCCCC*");
    assert_eq!(polymerize("*C*", 3).unwrap(), "*CCC*");

    let chain = polymerize("*OCC*", 2).unwrap();
    for written in ["*OCCOCC*", "*CCOCCO*", "C(*)COCCO*"] {
        assert_eq!(to_smiles(&parse_smiles(written).unwrap()).unwrap(), chain);
    }
}

#[test]
fn degree_one_returns_the_monomer() {
    let codec = SmilesCodec;
    for monomer in ["*CC*", "*OCC*", "*C1CCC(*)CC1", "*c1ccc(*)cc1"] {
        let canonical = codec.encode(&codec.decode(monomer).unwrap()).unwrap();
        assert_eq!(polymerize(monomer, 1).unwrap(), canonical, "{monomer}");
    }
}

#[test]
fn chain_counts_follow_the_monomer() {
    let monomer = parse_smiles("*C1CCC(*)CC1").unwrap();
    let chain = assemble_chain(&monomer, &PolymerConfig::new(3)).unwrap();
    let report = &chain.report;
    assert_eq!((report.monomer_atoms, report.monomer_bonds), (8, 8));
    assert_eq!(report.atoms, 20);
    assert_eq!(report.bonds, 22);
    assert_eq!(report.removed_markers, 4);
    assert_eq!(report.components, 1);
    assert_eq!(report.backbone_length, Some(13));
    assert_eq!(chain.graph.atom_count(), report.atoms);
    assert_eq!(
        chain.graph.indices_where(|atom| atom.is_placeholder()).len(),
        2
    );
}

#[test]
fn report_records_every_stage() {
    let monomer = parse_smiles("*CC*").unwrap();
    let chain = assemble_chain(&monomer, &PolymerConfig::new(3)).unwrap();
    let report = chain.report;
    assert_eq!(report.degree, 3);
    assert_eq!(report.offsets, vec![0, 4, 8]);
    assert_eq!(report.stitch_bonds, vec![(2, 5), (6, 9)]);
    assert_eq!(report.open_ends, (0, 7));
    assert_eq!(report.implicit_hydrogens, 12);
    assert!(
        chain
            .graph
            .atoms()
            .iter()
            .all(|atom| atom.kind != AtomKind::Connection)
    );
}

#[test]
fn monomer_errors_surface_before_replication() {
    for (monomer, kind) in [
        ("CC", "invalid_monomer"),
        ("*CC", "invalid_monomer"),
        ("**", "invalid_monomer"),
        ("*C(C*", "parse_error"),
        ("*[CH3]C*", "invalid_structure"),
    ] {
        let err = polymerize(monomer, 2).unwrap_err();
        assert_eq!(err.kind(), kind, "{monomer}: {err}");
    }
}

#[test]
fn connection_point_errors_name_copy_and_atom() {
    let err = polymerize("*C*C", 2).unwrap_err();
    assert_eq!(
        err,
        PolymerError::DisconnectedConnectionPoint {
            copy: 0,
            atom: 2,
            neighbors: 2,
        }
    );
    assert_eq!(
        polymerize("**C", 2).unwrap_err(),
        PolymerError::DisconnectedConnectionPoint {
            copy: 0,
            atom: 1,
            neighbors: 2,
        }
    );
    assert!(matches!(
        polymerize("*.C*", 2).unwrap_err(),
        PolymerError::DisconnectedConnectionPoint { atom: 0, neighbors: 0, .. }
    ));
}

#[test]
fn zero_degree_is_invalid_input() {
    assert!(matches!(
        polymerize("*CC*", 0).unwrap_err(),
        PolymerError::InvalidInput(_)
    ));
    // parse failures win over a bad degree
    assert!(matches!(
        polymerize("*C(C*", 0).unwrap_err(),
        PolymerError::ParseError(_)
    ));
    assert!(matches!(
        polymerize("CC", 0).unwrap_err(),
        PolymerError::InvalidMonomer(_)
    ));
}

#[test]
fn extra_placeholders_follow_the_configured_policy() {
    let monomer = parse_smiles("*CC(C*)*").unwrap();
    let chain = assemble_chain(&monomer, &PolymerConfig::new(2)).unwrap();
    assert_eq!(chain.report.atoms, 10);
    assert_eq!(
        chain.graph.indices_where(|atom| atom.is_placeholder()).len(),
        4
    );

    let err = assemble_chain(&monomer, &PolymerConfig::new(2).strict()).unwrap_err();
    assert!(matches!(err, PolymerError::InvalidMonomer(_)));
}

#[test]
fn polymerizer_output_serializes_to_json() {
    let polymerizer = Polymerizer::new(PolymerConfig::new(2));
    let output = polymerizer.polymerize_with_report("*CC*").unwrap();
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["smiles"], "*CCCC*");
    assert_eq!(value["report"]["degree"], 2);
    assert_eq!(value["report"]["atoms"], 6);
    assert_eq!(value["report"]["open_ends"][1], 5);
}

#[test]
fn config_reads_json_with_defaults() {
    let config = PolymerConfig::from_json(r#"{"placeholder_policy":"reject"}"#).unwrap();
    assert_eq!(config.degree, 2);
    assert_eq!(config.placeholder_policy, PlaceholderPolicy::Reject);
    assert_eq!(PolymerConfig::from_json("{}").unwrap(), PolymerConfig::default());
    assert!(PolymerConfig::from_json(r#"{"degree":0}"#).is_err());
    assert!(PolymerConfig::from_json("not json").is_err());
}

#[test]
fn chains_may_carry_metal_atoms_and_counterions() {
    assert_eq!(polymerize("*C[Pd]C*", 1).unwrap(), "*C[Pd]C*");
    let output = Polymerizer::new(PolymerConfig::new(3))
        .polymerize_with_report("*CC*.[Cs+]")
        .unwrap();
    // each copy brings its counterion along
    assert_eq!(output.report.components, 4);
    assert_eq!(output.report.atoms, 3 * 5 - 4);
}

#[test]
fn long_chains_assemble_and_write() {
    let degree = 4000;
    let chain = polymerize("*CC*", degree).unwrap();
    assert_eq!(chain, format!("*{}*", "C".repeat(2 * degree)));

    let monomer = parse_smiles("*CC(C)(C(=O)OC)*").unwrap();
    let chain = assemble_chain(&monomer, &PolymerConfig::new(degree)).unwrap();
    assert_eq!(chain.report.atoms, degree * 9 - (2 * degree - 2));
    assert_eq!(chain.report.backbone_length, Some(degree * 2 + 1));
    let written = to_smiles(&chain.graph).unwrap();
    assert_eq!(to_smiles(&parse_smiles(&written).unwrap()).unwrap(), written);
}
