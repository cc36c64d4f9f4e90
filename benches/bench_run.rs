use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chromevo::{
    chromosome::Chromosome,
    evolution::{EvolutionLauncher, EvolutionOptions, Problem},
    genotype,
    mutation::BitFlipMutation,
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
};

#[derive(Debug)]
struct OneMax {
    bits: usize,
}

impl Problem<u8> for OneMax {
    fn genotype(&self, rng: &mut RandomNumberGenerator) -> Chromosome<u8> {
        genotype::binary(self.bits, rng)
    }

    fn fitness(&self, chromosome: &Chromosome<u8>) -> f64 {
        chromosome.genes().iter().map(|&g| g as f64).sum()
    }

    fn terminate(&self, best: &Chromosome<u8>, _generation: usize, _temperature: f64) -> bool {
        best.fitness() == self.bits as f64
    }
}

fn bench_one_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_max_run");
    for population_size in [10, 50, 200].iter() {
        let launcher = EvolutionLauncher::<u8, OneMax>::builder()
            .with_problem(OneMax { bits: 32 })
            .with_selection_strategy(TournamentSelection::default())
            .with_mutation_strategy(BitFlipMutation::new(0.05).unwrap())
            .build()
            .unwrap();
        let options = EvolutionOptions::builder()
            .population_size(*population_size)
            .mutation_probability(0.3)
            .max_generations(100)
            .build()
            .unwrap();

        group.bench_function(&format!("one_max_population_{}", population_size), |b| {
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| {
                let result = launcher.run(black_box(&options), black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_one_max);
criterion_main!(benches);
