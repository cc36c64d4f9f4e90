use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chromevo::{
    chromosome::Chromosome,
    crossover::{OrderOneCrossover, SinglePointCrossover},
    evolution::{stages, FnProblem},
    genotype,
    reinsertion::{ElitistReinsertion, ReinsertionPool},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, TournamentSelection},
};

fn scored_population(size: usize, rng: &mut RandomNumberGenerator) -> Vec<Chromosome<i64>> {
    let problem = FnProblem::new(
        |rng: &mut RandomNumberGenerator| genotype::real_value(16, 0, 100, rng),
        |c: &Chromosome<i64>| c.genes().iter().sum::<i64>() as f64,
        |_best: &Chromosome<i64>, _generation, _temperature| true,
    );
    let population: Vec<Chromosome<i64>> =
        stages::initial_population(&problem, size, rng).unwrap();
    stages::score(population, &problem).unwrap()
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("selection");
    for size in [100, 1000].iter() {
        let population = scored_population(*size, &mut rng);

        group.bench_function(&format!("tournament_{}", size), |b| {
            let strategy = TournamentSelection::default().with_duplicates();
            b.iter(|| stages::select(black_box(&population), &strategy, 0.5, &mut rng).unwrap())
        });
        group.bench_function(&format!("roulette_{}", size), |b| {
            let strategy = RouletteWheelSelection::new();
            b.iter(|| stages::select(black_box(&population), &strategy, 0.5, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let population = scored_population(200, &mut rng);
    let pairs: Vec<_> = population
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    let pool: Vec<u32> = (0..64).collect();
    let permutations: Vec<_> = (0..100)
        .map(|_| {
            (
                genotype::permutation(64, &pool, &mut rng),
                genotype::permutation(64, &pool, &mut rng),
            )
        })
        .collect();

    let mut group = c.benchmark_group("crossover");
    group.bench_function("single_point_100_pairs", |b| {
        b.iter(|| stages::crossover(black_box(&pairs), &SinglePointCrossover::new(), &mut rng))
    });
    group.bench_function("order_one_100_pairs", |b| {
        b.iter(|| {
            stages::crossover(black_box(&permutations), &OrderOneCrossover::new(), &mut rng)
        })
    });
    group.finish();
}

fn bench_reinsertion(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);
    let parents = scored_population(100, &mut rng);
    let children = scored_population(100, &mut rng);
    let mutants = scored_population(20, &mut rng);
    let strategy = ElitistReinsertion::default();

    c.bench_function("elitist_reinsertion_100", |b| {
        b.iter(|| {
            let pool = ReinsertionPool {
                parents: parents.clone(),
                children: children.clone(),
                mutants: mutants.clone(),
                leftovers: Vec::new(),
            };
            stages::reinsert(&strategy, black_box(pool), 100, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_selection, bench_crossover, bench_reinsertion);
criterion_main!(benches);
