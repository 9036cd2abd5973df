use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Clone, Debug)]
pub enum MonomerShape {
    /// `*` + backbone + `*`, heteroatoms mixed in.
    Linear { backbone: usize },
    /// Linear backbone with random side groups.
    Branched { backbone: usize },
    /// Ring with the two placeholders on opposite sides.
    Ring { size: usize },
}

const BACKBONE: &[&str] = &["C", "C", "C", "O", "N", "S"];
const CARBON_SIDES: &[&str] = &["(C)", "(=O)", "(F)", "(Cl)", "(CC)", "(O)"];

/// Seeded random monomer SMILES with exactly two `*` placeholders.
pub fn generate_monomer(shape: MonomerShape, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    match shape {
        MonomerShape::Linear { backbone } => linear(&mut rng, backbone, false),
        MonomerShape::Branched { backbone } => linear(&mut rng, backbone, true),
        MonomerShape::Ring { size } => ring(size),
    }
}

fn linear(rng: &mut StdRng, backbone: usize, branched: bool) -> String {
    assert!(backbone > 0, "backbone must contain at least one atom");
    let mut smiles = String::from("*");
    for _ in 0..backbone {
        let atom = BACKBONE[rng.gen_range(0..BACKBONE.len())];
        smiles.push_str(atom);
        if branched && rng.gen_bool(0.5) {
            match atom {
                "C" => smiles.push_str(CARBON_SIDES[rng.gen_range(0..CARBON_SIDES.len())]),
                "N" => smiles.push_str("(C)"),
                _ => {}
            }
        }
    }
    smiles.push('*');
    smiles
}

fn ring(size: usize) -> String {
    assert!(size >= 3, "ring must contain at least three atoms");
    let mut smiles = String::from("*C1");
    for idx in 1..size {
        smiles.push_str(if idx == size / 2 { "C(*)" } else { "C" });
    }
    smiles.push('1');
    smiles
}
