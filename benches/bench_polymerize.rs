use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polychain::{
    PolymerConfig, Polymerizer, assemble_chain,
    bench_utils::{MonomerShape, generate_monomer},
    parse_smiles, to_smiles,
};

const LINEAR_SEED: u64 = 0x5A11;
const BRANCHED_SEED: u64 = 0x6B27;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);
const DEGREES: &[usize] = &[2, 10, 50, 200];

struct BenchCase {
    label: &'static str,
    smiles: String,
}

fn bench_cases() -> Vec<BenchCase> {
    vec![
        BenchCase {
            label: "linear",
            smiles: generate_monomer(MonomerShape::Linear { backbone: 6 }, LINEAR_SEED),
        },
        BenchCase {
            label: "branched",
            smiles: generate_monomer(MonomerShape::Branched { backbone: 6 }, BRANCHED_SEED),
        },
        BenchCase {
            label: "ring",
            smiles: generate_monomer(MonomerShape::Ring { size: 6 }, 0),
        },
    ]
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_chain");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        let monomer = parse_smiles(&case.smiles).expect("monomer");
        for &degree in DEGREES {
            let config = PolymerConfig::new(degree);
            group.bench_with_input(BenchmarkId::new(case.label, degree), &config, |b, config| {
                b.iter(|| assemble_chain(&monomer, config).expect("chain"));
            });
        }
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("polymerize");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        for &degree in DEGREES {
            let polymerizer = Polymerizer::new(PolymerConfig::new(degree));
            group.bench_function(BenchmarkId::new(case.label, degree), |b| {
                b.iter(|| polymerizer.polymerize(&case.smiles).expect("polymerize"));
            });
        }
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_smiles");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        let monomer = parse_smiles(&case.smiles).expect("monomer");
        let chain = assemble_chain(&monomer, &PolymerConfig::new(50)).expect("chain");
        group.bench_function(case.label, |b| {
            b.iter(|| to_smiles(&chain.graph).expect("write"));
        });
    }
    group.finish();
}

criterion_group!(
    name = polymerize_benches;
    config = Criterion::default();
    targets = bench_assemble, bench_end_to_end, bench_write
);
criterion_main!(polymerize_benches);
